//! Dataset acquisition and construction errors.

use super::error_code::{self, TollgateErrorCode};

/// Errors that can occur while loading or assembling a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("No incoming datasets found in {dir}")]
    NoInputAvailable { dir: String },

    #[error("Dataset unreadable at {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Dataset parse error in {path} at record {record}: {message}")]
    Parse {
        path: String,
        record: u64,
        message: String,
    },

    #[error("Column `{column}` has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column `{0}`")]
    DuplicateColumn(String),
}

impl TollgateErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoInputAvailable { .. } => error_code::NO_INPUT,
            _ => error_code::DATASET_ERROR,
        }
    }
}
