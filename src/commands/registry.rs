//! Command registry: alias → handler binding map.
//!
//! Every alias of a command (primary name included) maps to the same shared
//! [`HandlerBinding`]. Lookups are case-insensitive; keys are stored
//! lowercased. The registry is built during initialization and read-only
//! afterwards, so it can sit behind an `Arc` and be read from any thread.

use std::collections::HashMap;
use std::sync::Arc;

use super::Caller;
use super::handler::{HandlerError, HandlerFn, Reply};
use super::meta::CommandMeta;

/// One command's metadata paired with its handler. All aliases of the
/// command resolve to the same binding instance.
pub struct HandlerBinding {
    meta: CommandMeta,
    handler: Box<HandlerFn>,
}

impl HandlerBinding {
    pub fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    pub fn invoke(&self, caller: &dyn Caller, args: &[String]) -> Result<Reply, HandlerError> {
        (self.handler)(caller, args)
    }
}

/// A bundle of commands to register together.
///
/// Each `command` call pairs one [`CommandMeta`] with its handler closure,
/// keeping the wiring explicit and checked at compile time.
#[derive(Default)]
pub struct CommandSet {
    entries: Vec<(CommandMeta, Box<HandlerFn>)>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command<F>(mut self, meta: CommandMeta, handler: F) -> Self
    where
        F: Fn(&dyn Caller, &[String]) -> Result<Reply, HandlerError> + Send + Sync + 'static,
    {
        self.entries.push((meta, Box::new(handler)));
        self
    }
}

/// Registry of command bindings, keyed by every alias.
pub struct CommandRegistry {
    /// Map from lowercase alias to binding.
    bindings: HashMap<String, Arc<HandlerBinding>>,
    /// Aliases in first-registration order, for stable help listings.
    order: Vec<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register every command in the set under all of its aliases.
    ///
    /// An alias that is already taken is silently replaced (last
    /// registration wins); other aliases of the displaced command keep
    /// their old binding. A replaced alias keeps its position in the
    /// stored order.
    pub fn register(&mut self, set: CommandSet) {
        for (meta, handler) in set.entries {
            let binding = Arc::new(HandlerBinding { meta, handler });
            for alias in binding.meta.aliases() {
                let key = alias.to_lowercase();
                if self.bindings.contains_key(&key) {
                    tracing::debug!(alias = %key, "alias re-registered, previous binding replaced");
                } else {
                    self.order.push(key.clone());
                }
                self.bindings.insert(key, Arc::clone(&binding));
            }
        }
    }

    /// Look up a binding by alias (case-insensitive).
    pub fn resolve(&self, alias: &str) -> Option<Arc<HandlerBinding>> {
        self.bindings.get(&alias.to_lowercase()).cloned()
    }

    /// Bindings in stored alias order. A command with several aliases
    /// appears once per alias; consumers deduplicate by binding identity.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<HandlerBinding>> {
        self.order.iter().filter_map(move |alias| self.bindings.get(alias))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
