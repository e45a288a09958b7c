//! Permission gate: decides whether a caller may use a command.

use super::Caller;
use super::meta::CommandMeta;

/// Whether `caller` may use the command described by `meta`.
///
/// An empty permission list means the command is open to everyone.
/// Otherwise the listed permissions are alternative sufficient grants:
/// holding any one of them authorizes the caller.
pub fn authorized(meta: &CommandMeta, caller: &dyn Caller) -> bool {
    if meta.permissions().is_empty() {
        return true;
    }
    meta.permissions().iter().any(|p| caller.has_permission(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CallerKind;

    struct PermCaller(Vec<&'static str>);

    impl Caller for PermCaller {
        fn kind(&self) -> CallerKind {
            CallerKind::Interactive
        }
        fn has_permission(&self, permission: &str) -> bool {
            self.0.iter().any(|p| *p == permission)
        }
        fn send_text(&self, _text: &str) {}
    }

    #[test]
    fn test_empty_permission_list_authorizes_everyone() {
        let meta = CommandMeta::new("ping", "", "Measure latency");
        assert!(authorized(&meta, &PermCaller(vec![])));
    }

    #[test]
    fn test_any_single_permission_suffices() {
        let meta = CommandMeta::new("kick", "<user>", "Remove a user")
            .permission("mod.kick")
            .permission("admin.all");
        assert!(authorized(&meta, &PermCaller(vec!["admin.all"])));
        assert!(authorized(&meta, &PermCaller(vec!["mod.kick"])));
    }

    #[test]
    fn test_no_matching_permission_denies() {
        let meta = CommandMeta::new("kick", "<user>", "Remove a user")
            .permission("mod.kick")
            .permission("admin.all");
        assert!(!authorized(&meta, &PermCaller(vec![])));
        assert!(!authorized(&meta, &PermCaller(vec!["mod.mute"])));
    }
}
