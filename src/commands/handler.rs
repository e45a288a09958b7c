use serde::Serialize;
use thiserror::Error;

use super::Caller;

/// Signature every command handler implements.
///
/// Handlers receive the caller and the already-tokenized arguments; they
/// never see the raw input line.
pub type HandlerFn = dyn Fn(&dyn Caller, &[String]) -> Result<Reply, HandlerError> + Send + Sync;

/// How a handler signals failure.
///
/// `Rejected` is the expected, user-level class: the arguments passed the
/// count check but the handler refused their content. The dispatcher turns
/// it into an invalid-arguments outcome with the command's usage line.
/// `Failed` marks a defect; the dispatcher surfaces it as a fatal
/// [`crate::ScmdError`] instead of a usage hint.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Argument content rejected at a finer grain than the count bounds.
    #[error("{0}")]
    Rejected(String),

    /// Anything else that went wrong inside the handler.
    #[error("{0}")]
    Failed(String),
}

/// What a handler produced on success.
///
/// `message` is an optional line for the caller; `data` is an optional
/// structured payload for hosts that consume results programmatically.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reply {
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl Reply {
    /// A reply with a message line and no structured data.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }

    /// A reply with a message line and a structured payload.
    pub fn text_with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A reply that produces no output.
    pub fn silent() -> Self {
        Self::default()
    }
}
