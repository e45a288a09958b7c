use serde::Serialize;

/// Declarative descriptor attached to a command at registration time.
///
/// Built once with [`CommandMeta::new`] plus the chainable setters, then
/// immutable for the life of the registry. The first alias is canonical and
/// is the one shown in error messages.
#[derive(Debug, Clone, Serialize)]
pub struct CommandMeta {
    aliases: Vec<String>,
    usage: String,
    description: String,
    permissions: Vec<String>,
    min_args: usize,
    max_args: Option<usize>,
    interactive_only: bool,
}

impl CommandMeta {
    /// Create a descriptor with its canonical name, an argument pattern
    /// (without the command name, may be empty), and a description.
    ///
    /// Defaults: no extra aliases, no permissions required, any argument
    /// count, callable by any caller kind.
    pub fn new(primary: &str, usage: &str, description: &str) -> Self {
        Self {
            aliases: vec![primary.to_string()],
            usage: usage.to_string(),
            description: description.to_string(),
            permissions: Vec::new(),
            min_args: 0,
            max_args: None,
            interactive_only: false,
        }
    }

    /// Add an alternative name for this command.
    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Add a permission that grants use of this command. Any single listed
    /// permission suffices; an empty list means no permission required.
    pub fn permission(mut self, permission: &str) -> Self {
        self.permissions.push(permission.to_string());
        self
    }

    /// Bound the accepted argument count. `None` for `max` means unbounded.
    pub fn args(mut self, min: usize, max: Option<usize>) -> Self {
        self.min_args = min;
        self.max_args = max;
        self
    }

    /// Restrict this command to interactive callers.
    pub fn interactive_only(mut self) -> Self {
        self.interactive_only = true;
        self
    }

    /// All names this command answers to, canonical first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The canonical name.
    pub fn primary(&self) -> &str {
        &self.aliases[0]
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    pub fn min_args(&self) -> usize {
        self.min_args
    }

    pub fn max_args(&self) -> Option<usize> {
        self.max_args
    }

    pub fn is_interactive_only(&self) -> bool {
        self.interactive_only
    }

    /// Whether `count` arguments fall within the declared bounds.
    pub fn accepts_arg_count(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.is_none_or(|max| count <= max)
    }

    /// Canonical usage line: the primary alias followed by the argument
    /// pattern, e.g. `"kick <user> [reason]"`.
    pub fn usage_line(&self) -> String {
        if self.usage.is_empty() {
            self.primary().to_string()
        } else {
            format!("{} {}", self.primary(), self.usage)
        }
    }
}
