use thiserror::Error;

/// Unified error type for the scmd library.
///
/// Recoverable dispatch outcomes (unknown command, invalid arguments,
/// wrong caller kind, permission denied) are not errors; they travel as
/// [`crate::DispatchOutcome`] data. This type is reserved for failures the
/// host must treat as defects.
#[derive(Error, Debug)]
pub enum ScmdError {
    /// A handler failed outside its own argument checks. Fatal to the
    /// dispatch attempt; the host must log it, never show it as a usage hint.
    #[error("Invocation error in '{command}': {detail}")]
    Invocation { command: String, detail: String },
}
