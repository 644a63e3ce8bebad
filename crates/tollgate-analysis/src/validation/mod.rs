//! Contract-driven column validation.

pub mod column_stats;
pub mod validator;

pub use validator::{ValidationResult, Validator};
