//! Score-to-action mapping driven by a band table.

pub mod bands;
pub mod engine;

pub use bands::BandTable;
pub use engine::DecisionEngine;
