//! Risk aggregation: weighted scoring terms over validation metrics.

pub mod scorer;
pub mod terms;
pub mod weights;

pub use scorer::RiskScorer;
pub use terms::{NullRateTerm, RiskTerm, TermContribution};
pub use weights::WeightTable;
