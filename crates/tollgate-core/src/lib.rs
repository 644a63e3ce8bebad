//! Core types, errors, configuration and tracing for Tollgate.
//!
//! Every other crate in the workspace depends on this one. It holds no
//! evaluation logic: the validator, scorer and decision engine live in
//! `tollgate-analysis`, persistence lives in `tollgate-storage`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
