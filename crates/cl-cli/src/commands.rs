//! Command implementations shared by the binary and the integration tests.

use std::path::Path;

use anyhow::{Context, Result};
use cl_model::{Level, OptionRecord};
use cl_territory::{Territory, TerritoryConfig, default_data_dir};
use cl_widget::{CascadingFilter, ControlIds, FormControls};
use tracing::{debug, info};

/// One row of the `levels` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: Level,
    pub control_id: String,
    pub options: usize,
}

/// Selections requested by the `select` command, applied top-down.
#[derive(Debug, Clone, Default)]
pub struct SelectRequest {
    pub region: String,
    pub province: Option<String>,
    pub commune: Option<String>,
}

/// Resolve the territory config.
///
/// An explicit config file wins; otherwise `territory.toml` is looked up in
/// the data directory, falling back to defaults relative to it.
pub fn load_config(config: Option<&Path>, data_dir: Option<&Path>) -> Result<TerritoryConfig> {
    if let Some(path) = config {
        return TerritoryConfig::load(path)
            .with_context(|| format!("load territory config: {}", path.display()));
    }
    let data_dir = data_dir.map_or_else(default_data_dir, Path::to_path_buf);
    TerritoryConfig::discover(&data_dir)
        .with_context(|| format!("discover territory config in {}", data_dir.display()))
}

pub fn load_territory(config: &TerritoryConfig) -> Result<Territory> {
    Territory::load(config).context("load territory option pools")
}

/// Render the pools into the three form controls and attach the widget.
pub fn build_filter(config: &TerritoryConfig, territory: &Territory) -> Result<CascadingFilter> {
    let ids = ControlIds::for_field(&config.controls.field);
    let mut form = FormControls::new();
    for level in Level::ALL {
        form.insert(ids.get(level), territory.pool(level).as_slice().to_vec());
    }
    let mut filter = CascadingFilter::from_form(&form, &ids).context("attach location widget")?;
    filter.initialize(config.widget.initial);
    filter.drain_events();
    debug!(field = %config.controls.field, initial = ?config.widget.initial, "widget initialized");
    Ok(filter)
}

pub fn run_levels(config: &TerritoryConfig) -> Result<Vec<LevelSummary>> {
    let territory = load_territory(config)?;
    let ids = ControlIds::for_field(&config.controls.field);
    Ok(Level::ALL
        .into_iter()
        .map(|level| LevelSummary {
            level,
            control_id: ids.get(level).to_string(),
            options: territory.pool(level).len(),
        })
        .collect())
}

pub fn run_options(
    config: &TerritoryConfig,
    level: Level,
    parent: Option<&str>,
) -> Result<Vec<OptionRecord>> {
    let territory = load_territory(config)?;
    let pool = territory.pool(level);
    Ok(match parent {
        Some(prefix) => pool.filter_by_prefix(prefix),
        None => pool.as_slice().to_vec(),
    })
}

/// Apply the requested changes in cascade order and return the widget.
pub fn run_select(config: &TerritoryConfig, request: &SelectRequest) -> Result<CascadingFilter> {
    let territory = load_territory(config)?;
    let mut filter = build_filter(config, &territory)?;

    filter.on_region_changed(&request.region);
    if let Some(province) = &request.province {
        filter.on_province_changed(province).with_context(|| {
            format!("province {province} is not under region {}", request.region)
        })?;
    }
    if let Some(commune) = &request.commune {
        filter
            .select_commune(commune)
            .with_context(|| format!("select commune {commune}"))?;
    }

    let events = filter.drain_events();
    info!(
        region = %request.region,
        provinces = filter.provinces().visible().len(),
        communes = filter.communes().visible().len(),
        changes = events.len(),
        "selection applied"
    );
    Ok(filter)
}

/// Restore the widget from a stored commune value.
pub fn run_restore(config: &TerritoryConfig, commune: &str) -> Result<CascadingFilter> {
    let territory = load_territory(config)?;
    let mut filter = build_filter(config, &territory)?;
    filter
        .restore(commune)
        .with_context(|| format!("restore location {commune}"))?;
    filter.drain_events();
    info!(commune = %commune, "selection restored");
    Ok(filter)
}
