//! Domain types shared by every pipeline stage.

pub mod contract;
pub mod dataset;
pub mod decision;
pub mod log_entry;
pub mod metrics;
pub mod numeric;

pub use contract::{Constraints, ConstraintValue, ContractSpec, Criticality, FeatureSpec};
pub use dataset::{Cell, Column, Dataset, Provenance, Table};
pub use decision::{Decision, DecisionName, RiskScore, Severity};
pub use log_entry::LogEntry;
pub use metrics::{MetricSet, MetricSetBuilder, MetricValue, Statistic, Violation, ViolationKind};
