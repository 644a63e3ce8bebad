//! Configuration system for Tollgate.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod check_config;
pub mod dashboard_config;
pub mod decision_config;
pub mod paths_config;
pub mod scoring_config;
pub mod tollgate_config;

pub use check_config::CheckConfig;
pub use dashboard_config::DashboardConfig;
pub use decision_config::{BandConfig, DecisionConfig};
pub use paths_config::{PathsConfig, ResolvedPaths};
pub use scoring_config::ScoringConfig;
pub use tollgate_config::{CliOverrides, TollgateConfig};
