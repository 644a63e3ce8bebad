//! Dataset acquisition: newest CSV in the incoming area.

use std::io::Read;
use std::path::{Path, PathBuf};

use tollgate_core::constants::{DATASET_EXTENSION, NULL_TOKENS};
use tollgate_core::errors::DatasetError;
use tollgate_core::types::{Cell, Column, Dataset, Table};

/// Picks and parses datasets from an incoming directory. File names are
/// expected to sort by arrival time.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    incoming_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(incoming_dir: impl Into<PathBuf>) -> Self {
        Self {
            incoming_dir: incoming_dir.into(),
        }
    }

    pub fn incoming_dir(&self) -> &Path {
        &self.incoming_dir
    }

    /// Path of the lexicographically last dataset in the incoming area.
    pub fn latest_path(&self) -> Result<PathBuf, DatasetError> {
        let pattern = format!(
            "{}/*.{DATASET_EXTENSION}",
            glob::Pattern::escape(&self.incoming_dir.to_string_lossy())
        );
        let no_input = || DatasetError::NoInputAvailable {
            dir: self.incoming_dir.display().to_string(),
        };

        let paths = glob::glob(&pattern).map_err(|_| no_input())?;
        let mut candidates: Vec<PathBuf> = paths
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        candidates.sort();
        candidates.pop().ok_or_else(no_input)
    }

    /// Load the newest dataset and attach its provenance.
    pub fn load_latest(&self) -> Result<Dataset, DatasetError> {
        let path = self.latest_path()?;
        tracing::info!(path = %path.display(), "loading latest dataset");
        Self::load_path(&path)
    }

    /// Load a specific CSV file; the file name becomes the source id.
    pub fn load_path(path: &Path) -> Result<Dataset, DatasetError> {
        let file = std::fs::File::open(path).map_err(|e| DatasetError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let table = read_csv(file, &path.display().to_string())?;
        let source_id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!(
            source_id = %source_id,
            rows = table.row_count(),
            columns = table.columns().len(),
            "dataset parsed"
        );
        Ok(Dataset::new(table, source_id))
    }
}

/// Parse CSV with a header row into a table. `label` names the source in
/// error messages.
pub fn read_csv<R: Read>(input: R, label: &str) -> Result<Table, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let parse_error = |err: csv::Error| DatasetError::Parse {
        path: label.to_string(),
        record: err.position().map_or(0, |p| p.record()),
        message: err.to_string(),
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(parse_cell(field));
        }
    }

    Table::new(
        headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| Column::new(name, values))
            .collect(),
    )
}

/// Interpret one CSV field: null token, integer, float, boolean, then text.
pub fn parse_cell(field: &str) -> Cell {
    if NULL_TOKENS.contains(&field) {
        return Cell::Null;
    }
    if let Ok(v) = field.parse::<i64>() {
        return Cell::Int(v);
    }
    if let Ok(v) = field.parse::<f64>() {
        return Cell::Float(v);
    }
    match field {
        "true" | "True" | "TRUE" => Cell::Bool(true),
        "false" | "False" | "FALSE" => Cell::Bool(false),
        _ => Cell::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_recognizes_types() {
        assert_eq!(parse_cell(""), Cell::Null);
        assert_eq!(parse_cell("NA"), Cell::Null);
        assert_eq!(parse_cell("None"), Cell::Null);
        assert_eq!(parse_cell("42"), Cell::Int(42));
        assert_eq!(parse_cell("-3"), Cell::Int(-3));
        assert_eq!(parse_cell("2.5"), Cell::Float(2.5));
        assert_eq!(parse_cell("True"), Cell::Bool(true));
        assert_eq!(parse_cell("false"), Cell::Bool(false));
        assert_eq!(parse_cell("TR"), Cell::Text("TR".to_string()));
    }

    #[test]
    fn read_csv_builds_columns() {
        let csv = "user_id,user_age,country_code\n1,,TR\n2,31,DE\n3,NA,US\n";
        let table = read_csv(csv.as_bytes(), "inline").unwrap();
        assert_eq!(table.row_count(), 3);
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["user_id", "user_age", "country_code"]);
        assert_eq!(table.column("user_age").unwrap().null_count(), 2);
    }

    #[test]
    fn read_csv_headers_only() {
        let table = read_csv("a,b\n".as_bytes(), "inline").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn read_csv_rejects_ragged_records() {
        let err = read_csv("a,b\n1,2\n3\n".as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }
}
