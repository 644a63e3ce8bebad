//! ActionExecutor: routes the source artifact and appends the decision.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tollgate_core::config::ResolvedPaths;
use tollgate_core::errors::ActionError;
use tollgate_core::tracing::fields::SPAN_EXECUTE;
use tollgate_core::types::{Dataset, Decision, LogEntry};
use tollgate_storage::log::DecisionLog;

#[cfg(windows)]
const CROSS_DEVICE_ERROR: i32 = 17; // ERROR_NOT_SAME_DEVICE
#[cfg(not(windows))]
const CROSS_DEVICE_ERROR: i32 = 18; // EXDEV

/// The three artifact locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageAreas {
    pub incoming: PathBuf,
    pub validated: PathBuf,
    pub rejected: PathBuf,
}

impl StorageAreas {
    pub fn new(
        incoming: impl Into<PathBuf>,
        validated: impl Into<PathBuf>,
        rejected: impl Into<PathBuf>,
    ) -> Self {
        Self {
            incoming: incoming.into(),
            validated: validated.into(),
            rejected: rejected.into(),
        }
    }

    /// All three areas under one root, named like the defaults.
    pub fn under(root: &Path) -> Self {
        Self::new(
            root.join("incoming"),
            root.join("validated"),
            root.join("rejected"),
        )
    }

    pub fn from_paths(paths: &ResolvedPaths) -> Self {
        Self::new(&paths.incoming, &paths.validated, &paths.rejected)
    }

    /// Destination area for `decision`.
    pub fn destination(&self, decision: &Decision) -> &Path {
        if decision.name.accepts() {
            &self.validated
        } else {
            &self.rejected
        }
    }
}

/// Applies decisions. The only pipeline stage with side effects.
#[derive(Debug)]
pub struct ActionExecutor {
    areas: StorageAreas,
    log: DecisionLog,
}

impl ActionExecutor {
    /// Create the storage areas if needed and take ownership of the log.
    pub fn new(areas: StorageAreas, log: DecisionLog) -> Result<Self, ActionError> {
        for dir in [&areas.incoming, &areas.validated, &areas.rejected] {
            std::fs::create_dir_all(dir).map_err(|e| ActionError::AreaUnavailable {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(Self { areas, log })
    }

    pub fn areas(&self) -> &StorageAreas {
        &self.areas
    }

    pub fn log(&self) -> &DecisionLog {
        &self.log
    }

    /// Move the dataset's source artifact according to `decision`, then
    /// append the log entry. A missing artifact is a no-op; any other move
    /// failure aborts before anything is logged.
    pub fn execute(
        &mut self,
        decision: &Decision,
        dataset: &Dataset,
    ) -> Result<LogEntry, ActionError> {
        let source_id = dataset.source_id().ok_or(ActionError::MissingProvenance)?;

        let span = tracing::info_span!(SPAN_EXECUTE, source_id, decision = %decision.name);
        let _guard = span.enter();

        let entry = LogEntry::new(decision, source_id, dataset.row_count(), Utc::now());
        let from = self.areas.incoming.join(source_id);
        let to = self.areas.destination(decision).join(source_id);
        move_artifact(&from, &to)?;

        self.log.append(&entry)?;
        tracing::info!(destination = %to.display(), "decision applied");
        Ok(entry)
    }
}

/// Rename `from` to `to`, copying across devices. Absent `from` is a no-op.
fn move_artifact(from: &Path, to: &Path) -> Result<(), ActionError> {
    let failed = |e: io::Error| ActionError::MoveFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        message: e.to_string(),
    };

    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !from.exists() => {
            tracing::debug!(path = %from.display(), "artifact already moved");
            Ok(())
        }
        Err(e) if e.raw_os_error() == Some(CROSS_DEVICE_ERROR) => {
            std::fs::copy(from, to).map_err(failed)?;
            std::fs::remove_file(from).map_err(failed)
        }
        Err(e) => Err(failed(e)),
    }
}
