//! Top-level Tollgate configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CheckConfig, DashboardConfig, DecisionConfig, PathsConfig, ScoringConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::types::Criticality;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TOLLGATE_*`)
/// 3. Project config (`tollgate.toml` in project root)
/// 4. User config (`~/.tollgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TollgateConfig {
    pub paths: PathsConfig,
    pub scoring: ScoringConfig,
    pub decision: DecisionConfig,
    pub check: CheckConfig,
    pub dashboard: DashboardConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub contract: Option<String>,
    pub incoming: Option<String>,
    pub decision_log: Option<String>,
    pub lookback_hours: Option<u32>,
    pub top_reasons: Option<usize>,
    pub check_fail_threshold: Option<f64>,
}

impl TollgateConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TollgateConfig) -> Result<(), ConfigError> {
        for (field, criticality) in [
            ("scoring.tier_1_weight", Criticality::Tier1),
            ("scoring.tier_2_weight", Criticality::Tier2),
        ] {
            let weight = config.scoring.effective_weight(&criticality);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }

        if !config.check.effective_fail_threshold().is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "check.fail_threshold".to_string(),
                message: "must be a finite number".to_string(),
            });
        }

        if config.dashboard.effective_lookback_hours() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.lookback_hours".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.dashboard.effective_top_reasons() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.top_reasons".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        DecisionConfig::validate_bands(&config.decision.bands)
    }

    /// Returns the user config path: `~/.tollgate/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TollgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TollgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut TollgateConfig, other: &TollgateConfig) {
        // Paths
        if other.paths.incoming.is_some() {
            base.paths.incoming = other.paths.incoming.clone();
        }
        if other.paths.validated.is_some() {
            base.paths.validated = other.paths.validated.clone();
        }
        if other.paths.rejected.is_some() {
            base.paths.rejected = other.paths.rejected.clone();
        }
        if other.paths.decision_log.is_some() {
            base.paths.decision_log = other.paths.decision_log.clone();
        }
        if other.paths.contract.is_some() {
            base.paths.contract = other.paths.contract.clone();
        }

        // Scoring
        if other.scoring.tier_1_weight.is_some() {
            base.scoring.tier_1_weight = other.scoring.tier_1_weight;
        }
        if other.scoring.tier_2_weight.is_some() {
            base.scoring.tier_2_weight = other.scoring.tier_2_weight;
        }

        // Decision
        if !other.decision.bands.is_empty() {
            base.decision.bands = other.decision.bands.clone();
        }

        // Check
        if other.check.fail_threshold.is_some() {
            base.check.fail_threshold = other.check.fail_threshold;
        }

        // Dashboard
        if other.dashboard.lookback_hours.is_some() {
            base.dashboard.lookback_hours = other.dashboard.lookback_hours;
        }
        if other.dashboard.top_reasons.is_some() {
            base.dashboard.top_reasons = other.dashboard.top_reasons;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TOLLGATE_INCOMING_DIR`, `TOLLGATE_LOOKBACK_HOURS`, etc.
    /// Unparseable numeric values are rejected rather than ignored.
    fn apply_env_overrides(config: &mut TollgateConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TOLLGATE_INCOMING_DIR") {
            config.paths.incoming = Some(val);
        }
        if let Ok(val) = std::env::var("TOLLGATE_VALIDATED_DIR") {
            config.paths.validated = Some(val);
        }
        if let Ok(val) = std::env::var("TOLLGATE_REJECTED_DIR") {
            config.paths.rejected = Some(val);
        }
        if let Ok(val) = std::env::var("TOLLGATE_DECISION_LOG") {
            config.paths.decision_log = Some(val);
        }
        if let Ok(val) = std::env::var("TOLLGATE_CONTRACT") {
            config.paths.contract = Some(val);
        }
        if let Ok(val) = std::env::var("TOLLGATE_LOOKBACK_HOURS") {
            let hours = val.parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                field: "TOLLGATE_LOOKBACK_HOURS".to_string(),
                message: e.to_string(),
            })?;
            config.dashboard.lookback_hours = Some(hours);
        }
        if let Ok(val) = std::env::var("TOLLGATE_CHECK_FAIL_THRESHOLD") {
            let threshold = val.parse::<f64>().map_err(|e| ConfigError::InvalidValue {
                field: "TOLLGATE_CHECK_FAIL_THRESHOLD".to_string(),
                message: e.to_string(),
            })?;
            config.check.fail_threshold = Some(threshold);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TollgateConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.contract {
            config.paths.contract = Some(v.clone());
        }
        if let Some(ref v) = cli.incoming {
            config.paths.incoming = Some(v.clone());
        }
        if let Some(ref v) = cli.decision_log {
            config.paths.decision_log = Some(v.clone());
        }
        if let Some(v) = cli.lookback_hours {
            config.dashboard.lookback_hours = Some(v);
        }
        if let Some(v) = cli.top_reasons {
            config.dashboard.top_reasons = Some(v);
        }
        if let Some(v) = cli.check_fail_threshold {
            config.check.fail_threshold = Some(v);
        }
    }

    /// A copy with every default spelled out.
    pub fn effective(&self) -> TollgateConfig {
        TollgateConfig {
            paths: PathsConfig {
                incoming: Some(self.paths.effective_incoming().to_string()),
                validated: Some(self.paths.effective_validated().to_string()),
                rejected: Some(self.paths.effective_rejected().to_string()),
                decision_log: Some(self.paths.effective_decision_log().to_string()),
                contract: Some(self.paths.effective_contract().to_string()),
            },
            scoring: ScoringConfig {
                tier_1_weight: Some(self.scoring.effective_weight(&Criticality::Tier1)),
                tier_2_weight: Some(self.scoring.effective_weight(&Criticality::Tier2)),
            },
            decision: DecisionConfig {
                bands: self.decision.effective_bands(),
            },
            check: CheckConfig {
                fail_threshold: Some(self.check.effective_fail_threshold()),
            },
            dashboard: DashboardConfig {
                lookback_hours: Some(self.dashboard.effective_lookback_hours()),
                top_reasons: Some(self.dashboard.effective_top_reasons()),
            },
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
