//! Selection snapshots and the first-paint policy.

use serde::{Deserialize, Serialize};

/// The selected value of each level, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub region: Option<String>,
    pub province: Option<String>,
    pub commune: Option<String>,
}

impl LocationSelection {
    /// Value submitted for the whole location field: the commune component.
    pub fn compress(&self) -> Option<&str> {
        self.commune.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.province.is_none() && self.commune.is_none()
    }
}

/// How the dependent selectors are populated before the first user change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialPopulation {
    /// Province and commune selectors stay empty until a region is chosen.
    Empty,
    /// Run the region cascade for the first region in the pool.
    #[default]
    Cascade,
}
