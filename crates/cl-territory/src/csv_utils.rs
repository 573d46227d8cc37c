//! CSV helpers for reading option pools.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::TerritoryError;

pub type CsvRow = BTreeMap<String, String>;

/// Read a CSV file into its header names and row maps keyed by header.
///
/// Handles BOM characters and trims whitespace from headers and values.
pub fn read_csv_table(path: &Path) -> Result<(Vec<String>, Vec<CsvRow>), TerritoryError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| TerritoryError::csv(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| TerritoryError::csv(path, source))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| TerritoryError::csv(path, source))?;
        let row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|value| value.trim().to_string()))
            .collect();
        rows.push(row);
    }
    Ok((headers, rows))
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &CsvRow, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}
