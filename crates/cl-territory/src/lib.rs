#![deny(unsafe_code)]

pub mod config;
pub mod csv_utils;
pub mod error;
pub mod loader;
pub mod paths;

pub use crate::config::{ControlsConfig, SourcesConfig, TerritoryConfig, WidgetConfig};
pub use crate::error::TerritoryError;
pub use crate::loader::{Territory, load_pool};
pub use crate::paths::{CONFIG_FILE_NAME, TERRITORY_ENV_VAR, default_data_dir};
