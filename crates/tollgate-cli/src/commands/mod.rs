//! Subcommand implementations.

pub mod check;
pub mod config;
pub mod dashboard;
pub mod pipeline;

use std::path::Path;

use tollgate_core::config::{CliOverrides, ResolvedPaths, TollgateConfig};
use tollgate_core::types::{ContractSpec, Dataset};
use tollgate_storage::ingest::{load_contract, DatasetLoader};

use crate::error::CliError;

/// Resolved configuration for one invocation.
pub struct Context {
    pub config: TollgateConfig,
    pub paths: ResolvedPaths,
}

impl Context {
    pub fn load(root: &Path, overrides: &CliOverrides) -> Result<Self, CliError> {
        let config = TollgateConfig::load(root, Some(overrides))?;
        let paths = config.paths.resolve(root);
        tracing::debug!(root = %root.display(), contract = %paths.contract.display(), "configuration resolved");
        Ok(Self { config, paths })
    }

    /// The contract and the newest incoming dataset.
    pub fn inputs(&self) -> Result<(ContractSpec, Dataset), CliError> {
        let contract = load_contract(&self.paths.contract)?;
        let dataset = DatasetLoader::new(&self.paths.incoming).load_latest()?;
        Ok((contract, dataset))
    }
}
