//! Storage area and input locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONTRACT, DEFAULT_DECISION_LOG, DEFAULT_INCOMING_DIR, DEFAULT_REJECTED_DIR,
    DEFAULT_VALIDATED_DIR,
};

/// Locations of the storage areas, the decision log and the contract.
/// Relative paths resolve against the project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory scanned for new datasets. Default: `data/incoming`.
    pub incoming: Option<String>,
    /// Accepted datasets. Default: `data/validated`.
    pub validated: Option<String>,
    /// Quarantined datasets. Default: `data/rejected`.
    pub rejected: Option<String>,
    /// Decision log file. Default: `decisions/decision_log.jsonl`.
    pub decision_log: Option<String>,
    /// Contract document. Default: `contracts/user_features.yaml`.
    pub contract: Option<String>,
}

/// Absolute locations after resolution against a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub incoming: PathBuf,
    pub validated: PathBuf,
    pub rejected: PathBuf,
    pub decision_log: PathBuf,
    pub contract: PathBuf,
}

impl PathsConfig {
    pub fn effective_incoming(&self) -> &str {
        self.incoming.as_deref().unwrap_or(DEFAULT_INCOMING_DIR)
    }

    pub fn effective_validated(&self) -> &str {
        self.validated.as_deref().unwrap_or(DEFAULT_VALIDATED_DIR)
    }

    pub fn effective_rejected(&self) -> &str {
        self.rejected.as_deref().unwrap_or(DEFAULT_REJECTED_DIR)
    }

    pub fn effective_decision_log(&self) -> &str {
        self.decision_log.as_deref().unwrap_or(DEFAULT_DECISION_LOG)
    }

    pub fn effective_contract(&self) -> &str {
        self.contract.as_deref().unwrap_or(DEFAULT_CONTRACT)
    }

    /// Resolve every location against `root`.
    pub fn resolve(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            incoming: root.join(self.effective_incoming()),
            validated: root.join(self.effective_validated()),
            rejected: root.join(self.effective_rejected()),
            decision_log: root.join(self.effective_decision_log()),
            contract: root.join(self.effective_contract()),
        }
    }
}
