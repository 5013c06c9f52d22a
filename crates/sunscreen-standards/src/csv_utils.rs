//! Shared CSV utilities for loading standards files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::StandardsError;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "SUNSCREEN_STANDARDS_DIR";

/// Get the default standards root directory.
///
/// Checks the `SUNSCREEN_STANDARDS_DIR` environment variable first,
/// then falls back to the `standards/` directory at the workspace root.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

pub type CsvRow = BTreeMap<String, String>;

/// Read a CSV file into row maps keyed by column header.
///
/// Handles BOM characters and trims whitespace from headers and values.
/// Fails when any of `required` is not among the headers. Row order is file order.
pub fn read_csv_rows(path: &Path, required: &[&str]) -> Result<Vec<CsvRow>, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| StandardsError::csv(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| StandardsError::csv(path, source))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    for column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(StandardsError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| StandardsError::csv(path, source))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &CsvRow, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Split a semicolon-separated list, dropping blank items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
