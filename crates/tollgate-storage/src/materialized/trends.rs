//! Risk trend: severity of each decision over time.

use tollgate_core::types::{LogEntry, Severity};

/// Numeric weight of a logged severity. Unknown severities weigh nothing.
pub fn severity_weight(severity: &str) -> f64 {
    match Severity::parse(severity) {
        Some(Severity::Critical) => 1.0,
        Some(Severity::Warn) => 0.5,
        Some(Severity::Info) | None => 0.0,
    }
}

/// Severity weights ordered by timestamp. Equal timestamps keep log order.
pub fn risk_trend(entries: &[LogEntry]) -> Vec<f64> {
    let mut stamped: Vec<_> = entries
        .iter()
        .map(|e| (e.parsed_timestamp(), severity_weight(&e.severity)))
        .collect();
    stamped.sort_by_key(|(ts, _)| *ts);
    stamped.into_iter().map(|(_, weight)| weight).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: &str, severity: &str) -> LogEntry {
        LogEntry {
            timestamp: timestamp.to_string(),
            decision: "ALLOW".to_string(),
            severity: severity.to_string(),
            reason: String::new(),
            source_file: "a.csv".to_string(),
            row_count: 1,
        }
    }

    #[test]
    fn trend_orders_by_time() {
        let entries = vec![
            entry("2024-03-01T12:00:00Z", "CRITICAL"),
            entry("2024-03-01T10:00:00Z", "INFO"),
            entry("2024-03-01T11:00:00Z", "WARN"),
        ];
        assert_eq!(risk_trend(&entries), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn unknown_severity_weighs_zero() {
        assert_eq!(severity_weight("FATAL"), 0.0);
    }
}
