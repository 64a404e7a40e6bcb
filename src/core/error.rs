//! Error types for the logging facade
//!
//! These errors surface only at the sink boundary (`append`/`sync`); the
//! logging call surface itself never propagates them, since logging must
//! not be allowed to fail the caller's primary operation.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from a sink or output destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Sink flush failure with the scope it was reported for
    #[error("Sync failed for '{scope}': {message}")]
    SyncFailed { scope: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a sync failure error
    pub fn sync_failed(scope: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SyncFailed {
            scope: scope.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
