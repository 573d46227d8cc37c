//! Option pool loading from CSV.
//!
//! Each level lives in its own file with a `value,label` header:
//!
//! ```text
//! value,label
//! 131,Santiago
//! 132,Cordillera
//! ```
//!
//! Rows with an empty value are skipped. Row order is kept, since it is the
//! order the selectors show.

use std::path::Path;

use cl_model::{Level, OptionPool, OptionRecord};
use tracing::{debug, info};

use crate::config::TerritoryConfig;
use crate::csv_utils::{get_field, read_csv_table};
use crate::error::TerritoryError;

const VALUE_COLUMN: &str = "value";
const LABEL_COLUMN: &str = "label";

/// The three option pools of the territory.
#[derive(Debug, Clone)]
pub struct Territory {
    pub regions: OptionPool,
    pub provinces: OptionPool,
    pub communes: OptionPool,
}

impl Territory {
    /// Load all three pools named by `config`.
    pub fn load(config: &TerritoryConfig) -> Result<Self, TerritoryError> {
        let regions = load_pool(&config.source_path(Level::Region), Level::Region)?;
        let provinces = load_pool(&config.source_path(Level::Province), Level::Province)?;
        let communes = load_pool(&config.source_path(Level::Commune), Level::Commune)?;
        info!(
            base_dir = %config.base_dir().display(),
            regions = regions.len(),
            provinces = provinces.len(),
            communes = communes.len(),
            "territory loaded"
        );
        Ok(Self {
            regions,
            provinces,
            communes,
        })
    }

    pub fn pool(&self, level: Level) -> &OptionPool {
        match level {
            Level::Region => &self.regions,
            Level::Province => &self.provinces,
            Level::Commune => &self.communes,
        }
    }
}

/// Load a single pool from a `value,label` CSV file.
pub fn load_pool(path: &Path, level: Level) -> Result<OptionPool, TerritoryError> {
    let (headers, rows) = read_csv_table(path)?;
    for column in [VALUE_COLUMN, LABEL_COLUMN] {
        if !headers.iter().any(|header| header.eq_ignore_ascii_case(column)) {
            return Err(TerritoryError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    let value_key = column_key(&headers, VALUE_COLUMN);
    let label_key = column_key(&headers, LABEL_COLUMN);

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in &rows {
        let value = get_field(row, value_key);
        if value.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(OptionRecord::new(value, get_field(row, label_key)));
    }
    debug!(
        level = %level,
        path = %path.display(),
        records = records.len(),
        skipped,
        "loaded option pool"
    );

    OptionPool::new(level, records).map_err(|source| TerritoryError::Pool {
        path: path.to_path_buf(),
        source,
    })
}

fn column_key<'a>(headers: &'a [String], column: &'a str) -> &'a str {
    headers
        .iter()
        .find(|header| header.eq_ignore_ascii_case(column))
        .map_or(column, String::as_str)
}
