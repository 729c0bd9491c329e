use thiserror::Error;

/// Failures recognized by the demo workflow. Kept as tagged values
/// internally; formatted to plain text only at the render boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The recording client failed to start. Surfaced as a status message;
    /// no retry is defined.
    #[error("initialization failed: {reason}")]
    InitializationFailure { reason: String },
    /// The asynchronous session-detail call rejected. Caught locally and
    /// rendered in place of the data.
    #[error("{message}")]
    SessionFetchFailure { message: String },
}

impl ReplayError {
    pub fn session_fetch(message: impl Into<String>) -> Self {
        ReplayError::SessionFetchFailure {
            message: message.into(),
        }
    }
}
