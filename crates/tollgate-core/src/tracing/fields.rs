//! Span names used across the pipeline.
//!
//! Consistent names keep log queries stable across crates.

/// Contract validation of one dataset.
pub const SPAN_VALIDATE: &str = "tollgate.validate";

/// Risk aggregation.
pub const SPAN_RISK: &str = "tollgate.risk";

/// Band lookup.
pub const SPAN_DECIDE: &str = "tollgate.decide";

/// Side effect plus log append.
pub const SPAN_EXECUTE: &str = "tollgate.execute";

/// Dashboard window read.
pub const SPAN_DASHBOARD: &str = "tollgate.dashboard";
