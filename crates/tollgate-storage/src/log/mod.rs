//! Append-only decision log, one JSON object per line.

pub mod reader;
pub mod writer;

pub use reader::{parse_log, DecisionLogReader};
pub use writer::DecisionLog;
