//! Decision log record. Field names are fixed for log readers.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::decision::Decision;

/// One line of the decision log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO-8601 UTC timestamp.
    pub timestamp: String,
    pub decision: String,
    pub severity: String,
    pub reason: String,
    pub source_file: String,
    pub row_count: u64,
}

impl LogEntry {
    /// Record `decision` for the artifact `source_file`, stamped at `at`.
    pub fn new(
        decision: &Decision,
        source_file: impl Into<String>,
        row_count: usize,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
            decision: decision.name.as_str().to_string(),
            severity: decision.severity.as_str().to_string(),
            reason: decision.reason.clone(),
            source_file: source_file.into(),
            row_count: row_count as u64,
        }
    }

    /// Parse the timestamp. RFC 3339 is preferred; naive ISO-8601 values
    /// written by older writers are read as UTC.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Compact single-line JSON, without the trailing newline.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::decision::{DecisionName, Severity};

    fn sample() -> LogEntry {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let decision = Decision::new(
            DecisionName::BlockAndRollback,
            Severity::Critical,
            "High risk of silent data corruption",
        );
        LogEntry::new(&decision, "2024_03_01.csv", 4, at)
    }

    #[test]
    fn json_line_has_exact_field_set() {
        let line = sample().to_json_line().unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["decision", "reason", "row_count", "severity", "source_file", "timestamp"]
        );
        assert_eq!(object["decision"], "BLOCK_AND_ROLLBACK");
        assert_eq!(object["severity"], "CRITICAL");
        assert_eq!(object["timestamp"], "2024-03-01T12:30:00.000000Z");
    }

    #[test]
    fn parses_rfc3339_and_naive_timestamps() {
        let entry = sample();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(entry.parsed_timestamp(), Some(expected));

        let naive = LogEntry {
            timestamp: "2024-03-01T12:30:00.123456".to_string(),
            ..entry.clone()
        };
        assert!(naive.parsed_timestamp().is_some());

        let garbage = LogEntry {
            timestamp: "yesterday".to_string(),
            ..entry
        };
        assert_eq!(garbage.parsed_timestamp(), None);
    }
}
