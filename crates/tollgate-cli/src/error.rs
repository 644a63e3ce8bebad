//! Top-level CLI error.

use tollgate_core::errors::{
    ActionError, ConfigError, ContractError, DatasetError, PipelineError, StorageError,
    TollgateErrorCode,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl TollgateErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Pipeline(e) => e.error_code(),
            Self::Render(_) => "RENDER_ERROR",
        }
    }
}

macro_rules! via_pipeline {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for CliError {
                fn from(err: $source) -> Self {
                    Self::Pipeline(PipelineError::from(err))
                }
            }
        )*
    };
}

via_pipeline!(ConfigError, ContractError, DatasetError, StorageError, ActionError);
