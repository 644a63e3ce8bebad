//! Tests for the Tollgate configuration system.

use std::sync::Mutex;

use tollgate_core::config::{CliOverrides, DecisionConfig, TollgateConfig};
use tollgate_core::errors::ConfigError;
use tollgate_core::types::{Criticality, DecisionName, Severity};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TOLLGATE_ env vars to prevent cross-test contamination.
fn clear_tollgate_env_vars() {
    for key in [
        "TOLLGATE_INCOMING_DIR",
        "TOLLGATE_VALIDATED_DIR",
        "TOLLGATE_REJECTED_DIR",
        "TOLLGATE_DECISION_LOG",
        "TOLLGATE_CONTRACT",
        "TOLLGATE_LOOKBACK_HOURS",
        "TOLLGATE_CHECK_FAIL_THRESHOLD",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tollgate_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tollgate.toml"),
        r#"
[paths]
incoming = "landing"
contract = "contracts/orders.yaml"

[dashboard]
lookback_hours = 48
top_reasons = 5
"#,
    )
    .unwrap();

    std::env::set_var("TOLLGATE_LOOKBACK_HOURS", "12");

    let cli = CliOverrides {
        contract: Some("override.yaml".to_string()),
        ..Default::default()
    };

    let config = TollgateConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project for the contract path
    assert_eq!(config.paths.effective_contract(), "override.yaml");
    // Env beats project for the lookback window
    assert_eq!(config.dashboard.effective_lookback_hours(), 12);
    // Project beats defaults
    assert_eq!(config.paths.effective_incoming(), "landing");
    assert_eq!(config.dashboard.effective_top_reasons(), 5);

    clear_tollgate_env_vars();
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tollgate_env_vars();

    let dir = tempdir();
    let config = TollgateConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.paths.effective_incoming(), "data/incoming");
    assert_eq!(config.paths.effective_validated(), "data/validated");
    assert_eq!(config.paths.effective_rejected(), "data/rejected");
    assert_eq!(config.paths.effective_decision_log(), "decisions/decision_log.jsonl");
    assert_eq!(config.scoring.effective_weight(&Criticality::Tier1), 1.0);
    assert_eq!(config.scoring.effective_weight(&Criticality::Tier2), 0.5);
    assert_eq!(config.check.effective_fail_threshold(), 0.4);
    assert_eq!(config.dashboard.effective_lookback_hours(), 24);
    assert_eq!(config.dashboard.effective_top_reasons(), 3);
    assert_eq!(config.decision.effective_bands(), DecisionConfig::default_bands());
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tollgate_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("tollgate.toml"), "this is not valid toml {{{{").unwrap();

    match TollgateConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[test]
fn test_unparseable_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tollgate_env_vars();

    let dir = tempdir();
    std::env::set_var("TOLLGATE_CHECK_FAIL_THRESHOLD", "high");
    let result = TollgateConfig::load(dir.path(), None);
    clear_tollgate_env_vars();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_negative_weight_rejected() {
    let result = TollgateConfig::from_toml("[scoring]\ntier_2_weight = -0.5\n");
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "scoring.tier_2_weight");
        }
        other => panic!("Expected ValidationFailed, got: {other:?}"),
    }
}

#[test]
fn test_zero_lookback_rejected() {
    let result = TollgateConfig::from_toml("[dashboard]\nlookback_hours = 0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_custom_band_table() {
    let config = TollgateConfig::from_toml(
        r#"
[[decision.bands]]
min_score = 0.5
decision = "BLOCK_AND_ROLLBACK"
severity = "CRITICAL"
reason = "Too many nulls"

[[decision.bands]]
min_score = 0.0
decision = "ALLOW"
severity = "INFO"
reason = "Fine"
"#,
    )
    .unwrap();

    let bands = config.decision.effective_bands();
    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].decision, DecisionName::BlockAndRollback);
    assert_eq!(bands[0].severity, Severity::Critical);
    assert_eq!(bands[1].reason, "Fine");
}

#[test]
fn test_bands_must_descend() {
    let result = TollgateConfig::from_toml(
        r#"
[[decision.bands]]
min_score = 0.2
decision = "ALLOW_WITH_ALERT"
severity = "WARN"
reason = "a"

[[decision.bands]]
min_score = 0.6
decision = "BLOCK_AND_ROLLBACK"
severity = "CRITICAL"
reason = "b"
"#,
    );
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "decision.bands[1].min_score");
        }
        other => panic!("Expected ValidationFailed, got: {other:?}"),
    }
}

#[test]
fn test_effective_config_roundtrips_through_toml() {
    let config = TollgateConfig::default().effective();
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("decision_log = \"decisions/decision_log.jsonl\""));

    let reparsed = TollgateConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.decision.bands.len(), 3);
    assert_eq!(reparsed.scoring.tier_2_weight, Some(0.5));
}

#[test]
fn test_resolve_paths_against_root() {
    let config = TollgateConfig::from_toml("[paths]\nrejected = \"/srv/quarantine\"\n").unwrap();
    let root = std::path::Path::new("/work/project");
    let paths = config.paths.resolve(root);
    assert_eq!(paths.incoming, root.join("data/incoming"));
    assert_eq!(paths.rejected, std::path::PathBuf::from("/srv/quarantine"));
}
