//! Action executor errors.

use super::error_code::{self, TollgateErrorCode};
use super::StorageError;

/// Errors raised while applying a decision. None of these is a data-quality
/// finding: each one aborts the run without a log entry.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Dataset carries no source identifier; the loader must attach provenance")]
    MissingProvenance,

    #[error("Failed to move {from} to {to}: {message}")]
    MoveFailed {
        from: String,
        to: String,
        message: String,
    },

    #[error("Storage area {path} unavailable: {message}")]
    AreaUnavailable { path: String, message: String },

    #[error("Decision log error: {0}")]
    Log(#[from] StorageError),
}

impl TollgateErrorCode for ActionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingProvenance => error_code::MISSING_PROVENANCE,
            Self::Log(e) => e.error_code(),
            _ => error_code::ACTION_FAILED,
        }
    }
}
