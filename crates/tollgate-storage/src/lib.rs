//! Persistence and input for Tollgate: dataset and contract loaders, the
//! append-only decision log, and the dashboard views built on top of it.

pub mod ingest;
pub mod log;
pub mod materialized;

pub use ingest::{load_contract, ContractFormat, DatasetLoader};
pub use log::{DecisionLog, DecisionLogReader};
pub use materialized::{DashboardState, DashboardSummary, HealthSignal};
