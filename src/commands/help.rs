//! Help listing: which commands can this caller actually use.

use std::sync::Arc;

use console::Style;

use super::meta::CommandMeta;
use super::registry::{CommandRegistry, HandlerBinding};
use super::{Caller, CallerKind, permission};

/// Rendering configuration for help output, fixed at construction.
#[derive(Clone)]
pub struct HelpStyle {
    /// Prepended to every usage line, e.g. `"/"` for slash-command hosts.
    pub prefix: String,
    pub usage: Style,
    pub description: Style,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            usage: Style::new(),
            description: Style::new(),
        }
    }
}

impl HelpStyle {
    /// Terminal-friendly preset: bold cyan usage, dim description.
    pub fn colored() -> Self {
        Self {
            prefix: String::new(),
            usage: Style::new().bold().cyan(),
            description: Style::new().dim(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }
}

/// Produces permission-filtered help listings from a registry.
#[derive(Clone)]
pub struct HelpRenderer {
    style: HelpStyle,
}

impl HelpRenderer {
    pub fn new(style: HelpStyle) -> Self {
        Self { style }
    }

    /// Usage line for one command, with the configured prefix applied.
    pub fn usage_line(&self, meta: &CommandMeta) -> String {
        format!("{}{}", self.style.prefix, meta.usage_line())
    }

    /// One help line per command the caller may use, in registration order.
    ///
    /// A command reachable through several aliases contributes exactly one
    /// line. Commands failing the caller-kind or permission check are
    /// omitted. The listing is recomputed on every call, so permission
    /// changes between calls are always reflected.
    pub fn render<'a>(
        &'a self,
        registry: &'a CommandRegistry,
        caller: &'a dyn Caller,
    ) -> impl Iterator<Item = String> + 'a {
        let mut seen: Vec<Arc<HandlerBinding>> = Vec::new();
        registry.iter().filter_map(move |binding| {
            if seen.iter().any(|s| Arc::ptr_eq(s, binding)) {
                return None;
            }
            seen.push(Arc::clone(binding));

            let meta = binding.meta();
            if meta.is_interactive_only() && caller.kind() != CallerKind::Interactive {
                return None;
            }
            if !permission::authorized(meta, caller) {
                return None;
            }
            Some(format!(
                "{} {}",
                self.style.usage.apply_to(self.usage_line(meta)),
                self.style.description.apply_to(meta.description()),
            ))
        })
    }
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self::new(HelpStyle::default())
    }
}
