//! Read models derived from the decision log.

pub mod summary;
pub mod trends;

pub use summary::{DashboardState, DashboardSummary, HealthSignal, ReasonCount};
pub use trends::{risk_trend, severity_weight};
