//! Option records and the immutable pools they are captured into.
//!
//! An option's `value` encodes its position in the hierarchy as a string
//! prefix of its descendants' values:
//!
//! ```text
//! region    13       Metropolitana de Santiago
//! province  131      Santiago
//! commune   13101    Santiago
//! ```
//!
//! Filtering a level is therefore a linear prefix scan over the pool,
//! keeping every match in pool order.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LocationError, Result};
use crate::level::Level;

/// One selectable entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionRecord {
    /// Hierarchical code (e.g. "131").
    pub value: String,
    /// Display text (e.g. "Santiago").
    pub label: String,
}

impl OptionRecord {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// True when this option descends from (or is) the option with value `prefix`.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }
}

/// Full, unfiltered option list for one level.
///
/// Records are shared behind an `Arc`, so clones of a pool are cheap and
/// never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPool {
    level: Level,
    records: Arc<[OptionRecord]>,
}

impl OptionPool {
    /// Build a pool, rejecting duplicate values.
    pub fn new(level: Level, records: Vec<OptionRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.value.as_str()) {
                return Err(LocationError::DuplicateValue {
                    level,
                    value: record.value.clone(),
                });
            }
        }
        Ok(Self {
            level,
            records: records.into(),
        })
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[OptionRecord] {
        &self.records
    }

    pub fn get(&self, value: &str) -> Option<&OptionRecord> {
        self.records.iter().find(|record| record.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Copies of every record whose value starts with `prefix`, in pool order.
    pub fn filter_by_prefix(&self, prefix: &str) -> Vec<OptionRecord> {
        self.records
            .iter()
            .filter(|record| record.matches_prefix(prefix))
            .cloned()
            .collect()
    }

    /// The record with the longest value that is a prefix of `value`.
    ///
    /// Used to recover the ancestors of a stored commune code.
    pub fn longest_prefix_of(&self, value: &str) -> Option<&OptionRecord> {
        self.records
            .iter()
            .filter(|record| value.starts_with(record.value.as_str()))
            .max_by_key(|record| record.value.len())
    }
}

impl<'a> IntoIterator for &'a OptionPool {
    type Item = &'a OptionRecord;
    type IntoIter = std::slice::Iter<'a, OptionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
