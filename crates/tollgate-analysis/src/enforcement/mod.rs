//! Decision side effects: artifact routing and the audit record.

pub mod actions;

pub use actions::{ActionExecutor, StorageAreas};
