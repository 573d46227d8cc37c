//! Snapshot of the rendered form the widget is attached to.

use std::collections::BTreeMap;

use cl_model::{Level, LocationError, OptionRecord, Result};

/// Identifiers of the three select controls, in hierarchy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlIds {
    pub region: String,
    pub province: String,
    pub commune: String,
}

impl ControlIds {
    /// Ids of the sub-controls of a multi-value field named `field`:
    /// `id_<field>_0`, `id_<field>_1`, `id_<field>_2`.
    pub fn for_field(field: &str) -> Self {
        Self {
            region: format!("id_{field}_{}", Level::Region.index()),
            province: format!("id_{field}_{}", Level::Province.index()),
            commune: format!("id_{field}_{}", Level::Commune.index()),
        }
    }

    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Region => &self.region,
            Level::Province => &self.province,
            Level::Commune => &self.commune,
        }
    }
}

impl Default for ControlIds {
    fn default() -> Self {
        Self::for_field("commune")
    }
}

/// Select controls keyed by id, each with its pre-populated options.
#[derive(Debug, Clone, Default)]
pub struct FormControls {
    controls: BTreeMap<String, Vec<OptionRecord>>,
}

impl FormControls {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_control(mut self, id: impl Into<String>, options: Vec<OptionRecord>) -> Self {
        self.insert(id, options);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, options: Vec<OptionRecord>) {
        self.controls.insert(id.into(), options);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    pub fn options(&self, id: &str) -> Result<&[OptionRecord]> {
        self.controls
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| LocationError::MissingControl { id: id.to_string() })
    }
}
