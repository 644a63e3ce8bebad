//! Exclusive-lock appender for the decision log.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tollgate_core::errors::StorageError;
use tollgate_core::types::LogEntry;

/// Writer half of the decision log. Existing lines are never rewritten.
///
/// Each append takes an exclusive advisory lock and issues a single write
/// of the whole line, so concurrent writers cannot interleave partial
/// records.
pub struct DecisionLog {
    path: PathBuf,
    file: fd_lock::RwLock<File>,
}

impl std::fmt::Debug for DecisionLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionLog").field("path", &self.path).finish()
    }
}

impl DecisionLog {
    /// Open the log for appending, creating it and its parent directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, &e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StorageError::io(&path, &e))?;
        Ok(Self {
            path,
            file: fd_lock::RwLock::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a newline-terminated JSON line and flush it.
    pub fn append(&mut self, entry: &LogEntry) -> Result<(), StorageError> {
        let mut line = entry.to_json_line().map_err(|e| StorageError::Serialize {
            message: e.to_string(),
        })?;
        line.push('\n');

        let mut guard = self.file.write().map_err(|e| StorageError::LockFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        guard
            .write_all(line.as_bytes())
            .and_then(|()| guard.flush())
            .map_err(|e| StorageError::io(&self.path, &e))?;

        tracing::debug!(
            path = %self.path.display(),
            decision = %entry.decision,
            source_file = %entry.source_file,
            "decision appended"
        );
        Ok(())
    }
}
