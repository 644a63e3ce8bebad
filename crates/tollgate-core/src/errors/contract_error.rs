//! Contract loading errors.

use super::error_code::{self, TollgateErrorCode};

/// Errors that can occur while reading a data contract.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Contract unreadable at {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Contract parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported contract format `{extension}` for {path}")]
    UnsupportedFormat { path: String, extension: String },

    #[error("Duplicate feature `{0}` in contract")]
    DuplicateFeature(String),
}

impl TollgateErrorCode for ContractError {
    fn error_code(&self) -> &'static str {
        error_code::CONTRACT_ERROR
    }
}
