//! Shared constants for the Tollgate workspace.

/// Tollgate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "tollgate.toml";

/// User config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".tollgate";

// ---- Storage areas ----

/// Default directory scanned for new datasets.
pub const DEFAULT_INCOMING_DIR: &str = "data/incoming";

/// Default directory receiving accepted datasets.
pub const DEFAULT_VALIDATED_DIR: &str = "data/validated";

/// Default directory receiving quarantined datasets.
pub const DEFAULT_REJECTED_DIR: &str = "data/rejected";

/// Default decision log location.
pub const DEFAULT_DECISION_LOG: &str = "decisions/decision_log.jsonl";

/// Default contract location.
pub const DEFAULT_CONTRACT: &str = "contracts/user_features.yaml";

// ---- Scoring ----

/// Weight applied to tier_1 feature contributions.
pub const DEFAULT_TIER_1_WEIGHT: f64 = 1.0;

/// Weight applied to tier_2 feature contributions.
pub const DEFAULT_TIER_2_WEIGHT: f64 = 0.5;

// ---- Decision bands ----

/// Lower bound (inclusive) of the block band.
pub const BLOCK_MIN_SCORE: f64 = 0.7;

/// Lower bound (inclusive) of the alert band.
pub const ALERT_MIN_SCORE: f64 = 0.4;

pub const BLOCK_REASON: &str = "High risk of silent data corruption";
pub const ALERT_REASON: &str = "Moderate data quality risk detected";
pub const ALLOW_REASON: &str = "Data within acceptable risk thresholds";

/// `check` fails when the score reaches this value.
pub const DEFAULT_CHECK_FAIL_THRESHOLD: f64 = 0.4;

// ---- Dashboard ----

/// Default dashboard lookback window in hours.
pub const DEFAULT_LOOKBACK_HOURS: u32 = 24;

/// Default number of reasons shown in the dashboard.
pub const DEFAULT_TOP_REASONS: usize = 3;

// ---- Datasets ----

/// File extension of datasets picked up from the incoming area.
pub const DATASET_EXTENSION: &str = "csv";

/// Cell values read as missing.
pub const NULL_TOKENS: [&str; 9] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];
