//! Levels of the territorial hierarchy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocationError;

/// One level of the region → province → commune hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Regiones. The top level; its selector always shows the full pool.
    Region,
    /// Provincias, filtered by the selected region.
    Province,
    /// Comunas, filtered by the selected province.
    Commune,
}

impl Level {
    /// All levels, top-down.
    pub const ALL: [Level; 3] = [Level::Region, Level::Province, Level::Commune];

    /// The level whose selection filters this one.
    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Region => None,
            Level::Province => Some(Level::Region),
            Level::Commune => Some(Level::Province),
        }
    }

    /// The level filtered by this one.
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Region => Some(Level::Province),
            Level::Province => Some(Level::Commune),
            Level::Commune => None,
        }
    }

    /// Position of the level's control within the form widget (0-based).
    pub fn index(self) -> usize {
        match self {
            Level::Region => 0,
            Level::Province => 1,
            Level::Commune => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Region => "region",
            Level::Province => "province",
            Level::Commune => "commune",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(Level::Region),
            "province" => Ok(Level::Province),
            "commune" => Ok(Level::Commune),
            _ => Err(LocationError::UnknownLevel(s.to_string())),
        }
    }
}
