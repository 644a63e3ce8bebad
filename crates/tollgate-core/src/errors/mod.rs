//! Error handling for Tollgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod action_error;
pub mod config_error;
pub mod contract_error;
pub mod dataset_error;
pub mod error_code;
pub mod pipeline_error;
pub mod storage_error;

pub use action_error::ActionError;
pub use config_error::ConfigError;
pub use contract_error::ContractError;
pub use dataset_error::DatasetError;
pub use error_code::TollgateErrorCode;
pub use pipeline_error::PipelineError;
pub use storage_error::StorageError;
