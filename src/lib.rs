//! Command registration, dispatch, and help for interactive hosts.
//!
//! The host declares commands as handler closures with [`CommandMeta`]
//! descriptors, bundles them into a [`CommandSet`], and registers the set in
//! a [`CommandRegistry`]. A [`CommandDispatcher`] then resolves incoming
//! command names, validates arguments and the caller, checks permissions,
//! and invokes the handler. [`HelpRenderer`] produces a permission-filtered
//! listing of everything the caller may use.

pub mod commands;
pub mod core;

pub use commands::dispatcher::{CommandDispatcher, DispatchOutcome};
pub use commands::handler::{HandlerError, Reply};
pub use commands::help::{HelpRenderer, HelpStyle};
pub use commands::meta::CommandMeta;
pub use commands::registry::{CommandRegistry, CommandSet};
pub use commands::{Caller, CallerKind};
pub use crate::core::error::ScmdError;
