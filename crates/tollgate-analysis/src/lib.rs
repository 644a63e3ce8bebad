//! Tollgate evaluation engine.
//!
//! Validator -> RiskScorer -> DecisionEngine are pure; the ActionExecutor in
//! `enforcement` is the only stage with side effects.

pub mod decision;
pub mod enforcement;
pub mod pipeline;
pub mod risk;
pub mod validation;

pub use decision::{BandTable, DecisionEngine};
pub use enforcement::{ActionExecutor, StorageAreas};
pub use pipeline::{CheckOutcome, Evaluation, Pipeline, PipelineOutcome};
pub use risk::{NullRateTerm, RiskScorer, RiskTerm, WeightTable};
pub use validation::{ValidationResult, Validator};
