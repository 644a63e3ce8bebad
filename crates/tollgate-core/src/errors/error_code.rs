//! TollgateErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// for CLI output and log correlation.
pub trait TollgateErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONTRACT_ERROR: &str = "CONTRACT_ERROR";
pub const NO_INPUT: &str = "NO_INPUT";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MISSING_PROVENANCE: &str = "MISSING_PROVENANCE";
pub const ACTION_FAILED: &str = "ACTION_FAILED";
