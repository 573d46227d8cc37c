//! Territory configuration (`territory.toml`).
//!
//! ```toml
//! [controls]
//! field = "commune"
//!
//! [sources]
//! regions = "regions.csv"
//! provinces = "provinces.csv"
//! communes = "communes.csv"
//!
//! [widget]
//! initial = "cascade"
//! ```
//!
//! Every key is optional. Relative source paths resolve against the
//! directory holding the config file.

use std::path::{Path, PathBuf};

use cl_model::{InitialPopulation, Level};
use serde::Deserialize;

use crate::error::TerritoryError;
use crate::paths::CONFIG_FILE_NAME;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerritoryConfig {
    pub controls: ControlsConfig,
    pub sources: SourcesConfig,
    pub widget: WidgetConfig,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlsConfig {
    /// Form field name; control ids are `id_<field>_0..2`.
    pub field: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            field: "commune".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    pub regions: PathBuf,
    pub provinces: PathBuf,
    pub communes: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            regions: PathBuf::from("regions.csv"),
            provinces: PathBuf::from("provinces.csv"),
            communes: PathBuf::from("communes.csv"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub initial: InitialPopulation,
}

impl TerritoryConfig {
    /// Defaults, with sources resolved against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Parse a config from TOML text; sources resolve against `base_dir`.
    pub fn from_toml_str(
        text: &str,
        base_dir: impl Into<PathBuf>,
        origin: &Path,
    ) -> Result<Self, TerritoryError> {
        let mut config: Self = toml::from_str(text).map_err(|source| TerritoryError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, TerritoryError> {
        let text = std::fs::read_to_string(path).map_err(|source| TerritoryError::io(path, source))?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_toml_str(&text, base_dir, path)
    }

    /// Load `territory.toml` from `data_dir` if present, defaults otherwise.
    pub fn discover(data_dir: &Path) -> Result<Self, TerritoryError> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::with_base_dir(data_dir))
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolved path of the CSV file backing `level`.
    pub fn source_path(&self, level: Level) -> PathBuf {
        let relative = match level {
            Level::Region => &self.sources.regions,
            Level::Province => &self.sources.provinces,
            Level::Commune => &self.sources.communes,
        };
        self.base_dir.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = TerritoryConfig::from_toml_str("", "/data", Path::new("territory.toml")).unwrap();
        assert_eq!(config.controls.field, "commune");
        assert_eq!(config.widget.initial, InitialPopulation::Cascade);
        assert_eq!(
            config.source_path(Level::Province),
            PathBuf::from("/data/provinces.csv")
        );
    }

    #[test]
    fn partial_config_overrides() {
        let text = r#"
[controls]
field = "location"

[sources]
communes = "/srv/comunas.csv"

[widget]
initial = "empty"
"#;
        let config = TerritoryConfig::from_toml_str(text, "/data", Path::new("territory.toml")).unwrap();
        assert_eq!(config.controls.field, "location");
        assert_eq!(config.widget.initial, InitialPopulation::Empty);
        assert_eq!(config.source_path(Level::Region), PathBuf::from("/data/regions.csv"));
        assert_eq!(
            config.source_path(Level::Commune),
            PathBuf::from("/srv/comunas.csv")
        );
    }

    #[test]
    fn unknown_policy_rejected() {
        let result = TerritoryConfig::from_toml_str(
            "[widget]\ninitial = \"all\"\n",
            "/data",
            Path::new("territory.toml"),
        );
        assert!(matches!(result, Err(TerritoryError::Toml { .. })));
    }
}
