//! Pipeline errors: every fatal condition a run can hit.

use super::error_code::TollgateErrorCode;
use super::{ActionError, ConfigError, ContractError, DatasetError, StorageError};

/// Errors that abort a pipeline run before or instead of a logged decision.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),
}

impl TollgateErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Contract(e) => e.error_code(),
            Self::Dataset(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Action(e) => e.error_code(),
        }
    }
}
