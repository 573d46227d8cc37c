use std::path::PathBuf;

/// Environment variable for overriding the territory data directory.
pub const TERRITORY_ENV_VAR: &str = "CL_TERRITORY_DIR";

/// Config file looked up inside a data directory.
pub const CONFIG_FILE_NAME: &str = "territory.toml";

/// Get the default territory data directory.
///
/// Checks the `CL_TERRITORY_DIR` environment variable first,
/// then falls back to the bundled `data/territory/` directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(root) = std::env::var(TERRITORY_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/territory")
}
