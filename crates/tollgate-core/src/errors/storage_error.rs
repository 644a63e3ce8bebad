//! Decision log and storage-area errors.

use super::error_code::{self, TollgateErrorCode};

/// Errors raised by the decision log and storage areas.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to lock {path}: {message}")]
    LockFailed { path: String, message: String },

    #[error("Failed to serialize log entry: {message}")]
    Serialize { message: String },
}

impl StorageError {
    /// Build an I/O error tagged with the path it occurred on.
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl TollgateErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
