//! Tolerant reader for the decision log.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tollgate_core::errors::StorageError;
use tollgate_core::types::LogEntry;

/// Reader half of the decision log. Never holds a lock; a torn final line
/// from an in-flight append is ignored.
#[derive(Debug, Clone)]
pub struct DecisionLogReader {
    path: PathBuf,
}

impl DecisionLogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All well-formed entries in append order. A missing log reads as empty.
    pub fn read_all(&self) -> Result<Vec<LogEntry>, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.path, &e)),
        };
        Ok(parse_log(&String::from_utf8_lossy(&bytes)))
    }

    /// Entries stamped at or after `cutoff`. Entries with unreadable
    /// timestamps are dropped.
    pub fn read_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<LogEntry>, StorageError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.parsed_timestamp().is_some_and(|ts| ts >= cutoff))
            .collect())
    }
}

/// Parse log text. Only newline-terminated lines count; blank and
/// malformed lines are skipped.
pub fn parse_log(content: &str) -> Vec<LogEntry> {
    let complete = match content.rfind('\n') {
        Some(end) => &content[..end],
        None => return Vec::new(),
    };

    let mut entries = Vec::new();
    for (index, line) in complete.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<LogEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping malformed decision log line");
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"{"timestamp":"2024-03-01T12:00:00.000000Z","decision":"ALLOW","severity":"INFO","reason":"Data is healthy","source_file":"a.csv","row_count":3}"#;

    #[test]
    fn skips_blank_and_malformed_lines() {
        let content = format!("{GOOD}\n\nnot json\n{{\"timestamp\":1}}\n{GOOD}\n");
        let entries = parse_log(&content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source_file, "a.csv");
    }

    #[test]
    fn ignores_unterminated_tail() {
        let content = format!("{GOOD}\n{GOOD}");
        assert_eq!(parse_log(&content).len(), 1);
        assert!(parse_log(GOOD).is_empty());
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let reader = DecisionLogReader::new(dir.path().join("absent.jsonl"));
        assert!(reader.read_all().unwrap().is_empty());
    }
}
