//! Command dispatcher: resolve, validate, authorize, invoke, classify.

use std::sync::Arc;

use super::handler::{HandlerError, Reply};
use super::help::HelpRenderer;
use super::registry::CommandRegistry;
use super::{Caller, CallerKind, permission};
use crate::core::error::ScmdError;

/// Terminal classification of one dispatch attempt.
///
/// All variants are recoverable and meant to be translated into caller-facing
/// messages by the host. Fatal handler failures do not appear here; they
/// surface as [`ScmdError`] from [`CommandDispatcher::dispatch`].
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The handler ran; its reply is attached.
    Invoked(Reply),
    /// No binding for the given name. The caller has already been sent the
    /// help listing as a side effect.
    UnknownCommand,
    /// Argument count out of bounds, or the handler rejected the argument
    /// content. Carries the canonical usage line for display.
    InvalidArguments { usage: String },
    /// Interactive-only command invoked by a non-interactive caller.
    WrongCallerKind,
    /// Caller holds none of the required permissions.
    PermissionDenied,
}

/// Resolves incoming command names against a read-only registry and runs
/// the full validation pipeline before invoking the handler.
#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
    help: HelpRenderer,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<CommandRegistry>, help: HelpRenderer) -> Self {
        Self { registry, help }
    }

    /// Dispatch one command. Stages run in order and short-circuit:
    /// resolve, argument count, caller kind, permission, invoke.
    ///
    /// `Err` means the handler itself failed in a way that is not an
    /// argument rejection; the host must log it rather than show a usage
    /// hint.
    pub fn dispatch(
        &self,
        alias: &str,
        caller: &dyn Caller,
        args: &[String],
    ) -> Result<DispatchOutcome, ScmdError> {
        let Some(binding) = self.registry.resolve(alias) else {
            tracing::debug!(alias, "unknown command");
            self.send_help(caller);
            return Ok(DispatchOutcome::UnknownCommand);
        };
        let meta = binding.meta();

        if !meta.accepts_arg_count(args.len()) {
            return Ok(DispatchOutcome::InvalidArguments {
                usage: self.help.usage_line(meta),
            });
        }

        if meta.is_interactive_only() && caller.kind() != CallerKind::Interactive {
            return Ok(DispatchOutcome::WrongCallerKind);
        }

        if !permission::authorized(meta, caller) {
            return Ok(DispatchOutcome::PermissionDenied);
        }

        match binding.invoke(caller, args) {
            Ok(reply) => Ok(DispatchOutcome::Invoked(reply)),
            Err(HandlerError::Rejected(reason)) => {
                tracing::debug!(command = meta.primary(), %reason, "handler rejected arguments");
                Ok(DispatchOutcome::InvalidArguments {
                    usage: self.help.usage_line(meta),
                })
            }
            Err(HandlerError::Failed(detail)) => {
                tracing::warn!(command = meta.primary(), %detail, "handler failed");
                Err(ScmdError::Invocation {
                    command: meta.primary().to_string(),
                    detail,
                })
            }
        }
    }

    /// Send the help listing for this caller, one line at a time.
    pub fn send_help(&self, caller: &dyn Caller) {
        for line in self.help.render(&self.registry, caller) {
            caller.send_text(&line);
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
