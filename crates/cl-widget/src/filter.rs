//! Cascading option filter.
//!
//! # Invariants
//!
//! - The region selector always shows the full region pool.
//! - Every visible province starts with the selected region's value.
//! - Every visible commune starts with the selected province's value.
//!
//! Both change handlers rebuild the dependent selector from its pool; they
//! never patch the previous list. `on_region_changed` always finishes by
//! rebuilding the communes for the resulting province selection, so the
//! commune list can never lag behind a stale province.

use cl_model::{
    InitialPopulation, Level, LocationError, LocationSelection, OptionPool, Result,
};
use tracing::{debug, warn};

use crate::event::SelectionEvent;
use crate::form::{ControlIds, FormControls};
use crate::selector::SelectorState;

#[derive(Debug, Clone)]
pub struct CascadingFilter {
    region_pool: OptionPool,
    province_pool: OptionPool,
    commune_pool: OptionPool,
    region: SelectorState,
    province: SelectorState,
    commune: SelectorState,
    events: Vec<SelectionEvent>,
}

impl CascadingFilter {
    /// Build the filter from the three pools.
    ///
    /// The region selector shows its full pool with nothing selected; the
    /// province and commune selectors start empty until a policy is applied
    /// with [`CascadingFilter::initialize`] or a region is chosen.
    pub fn new(
        region_pool: OptionPool,
        province_pool: OptionPool,
        commune_pool: OptionPool,
    ) -> Result<Self> {
        expect_level(&region_pool, Level::Region)?;
        expect_level(&province_pool, Level::Province)?;
        expect_level(&commune_pool, Level::Commune)?;

        let mut region = SelectorState::new(Level::Region);
        region.show_unselected(region_pool.as_slice().to_vec());

        Ok(Self {
            region_pool,
            province_pool,
            commune_pool,
            region,
            province: SelectorState::new(Level::Province),
            commune: SelectorState::new(Level::Commune),
            events: Vec::new(),
        })
    }

    /// Capture the pools from the pre-populated controls of a form.
    pub fn from_form(form: &FormControls, ids: &ControlIds) -> Result<Self> {
        let capture = |level: Level| -> Result<OptionPool> {
            let options = form.options(ids.get(level))?;
            OptionPool::new(level, options.to_vec())
        };
        let regions = capture(Level::Region)?;
        let provinces = capture(Level::Province)?;
        let communes = capture(Level::Commune)?;
        debug!(
            regions = regions.len(),
            provinces = provinces.len(),
            communes = communes.len(),
            "captured form controls"
        );
        Self::new(regions, provinces, communes)
    }

    /// Reset the selectors and apply the first-paint policy.
    pub fn initialize(&mut self, policy: InitialPopulation) {
        self.reset();
        if policy == InitialPopulation::Cascade
            && let Some(first) = self.region_pool.iter().next()
        {
            let value = first.value.clone();
            self.on_region_changed(&value);
        }
    }

    /// Region selector changed: rebuild provinces, then cascade to communes.
    pub fn on_region_changed(&mut self, value: &str) {
        if !self.region_pool.contains(value) {
            warn!(region = %value, "region value not present in region pool");
        }
        self.region.set_selected(Some(value.to_string()));

        let matches = self.province_pool.filter_by_prefix(value);
        debug!(region = %value, provinces = matches.len(), "rebuilt province selector");
        self.province.replace(matches);
        self.record(Level::Province);

        match self.province.selected().map(str::to_string) {
            Some(province) => self.rebuild_communes(&province),
            None => {
                self.commune.clear();
                self.record(Level::Commune);
            }
        }
    }

    /// Province selector changed: rebuild communes.
    ///
    /// Only a visible province can be chosen; anything else leaves the
    /// selectors untouched.
    pub fn on_province_changed(&mut self, value: &str) -> Result<()> {
        self.province.select(value)?;
        self.rebuild_communes(value);
        Ok(())
    }

    fn rebuild_communes(&mut self, value: &str) {
        let matches = self.commune_pool.filter_by_prefix(value);
        debug!(province = %value, communes = matches.len(), "rebuilt commune selector");
        self.commune.replace(matches);
        self.record(Level::Commune);
    }

    /// Select one of the visible communes.
    pub fn select_commune(&mut self, value: &str) -> Result<()> {
        self.commune.select(value)?;
        self.record(Level::Commune);
        Ok(())
    }

    /// Re-establish all three selections from a stored commune value.
    ///
    /// The region and province are the pool entries with the longest value
    /// that prefixes the commune value. An empty value resets the widget.
    pub fn restore(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            self.reset();
            return Ok(());
        }
        if !self.commune_pool.contains(value) {
            return Err(unknown(Level::Commune, value));
        }
        let province = self
            .province_pool
            .longest_prefix_of(value)
            .ok_or_else(|| unknown(Level::Province, value))?
            .value
            .clone();
        let region = self
            .region_pool
            .longest_prefix_of(&province)
            .ok_or_else(|| unknown(Level::Region, &province))?
            .value
            .clone();

        self.on_region_changed(&region);
        if self.province.selected() != Some(province.as_str()) {
            self.on_province_changed(&province)?;
        }
        self.select_commune(value)?;
        debug!(region = %region, province = %province, commune = %value, "restored selection");
        Ok(())
    }

    pub fn regions(&self) -> &SelectorState {
        &self.region
    }

    pub fn provinces(&self) -> &SelectorState {
        &self.province
    }

    pub fn communes(&self) -> &SelectorState {
        &self.commune
    }

    pub fn selector(&self, level: Level) -> &SelectorState {
        match level {
            Level::Region => &self.region,
            Level::Province => &self.province,
            Level::Commune => &self.commune,
        }
    }

    pub fn pool(&self, level: Level) -> &OptionPool {
        match level {
            Level::Region => &self.region_pool,
            Level::Province => &self.province_pool,
            Level::Commune => &self.commune_pool,
        }
    }

    pub fn selection(&self) -> LocationSelection {
        LocationSelection {
            region: self.region.selected().map(str::to_string),
            province: self.province.selected().map(str::to_string),
            commune: self.commune.selected().map(str::to_string),
        }
    }

    /// Take the selector changes recorded since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<SelectionEvent> {
        std::mem::take(&mut self.events)
    }

    fn reset(&mut self) {
        self.region.show_unselected(self.region_pool.as_slice().to_vec());
        self.province.clear();
        self.commune.clear();
        for level in Level::ALL {
            self.record(level);
        }
    }

    fn record(&mut self, level: Level) {
        let state = self.selector(level);
        let event = SelectionEvent {
            level,
            selected: state.selected().map(str::to_string),
            visible: state.visible().len(),
        };
        self.events.push(event);
    }
}

fn expect_level(pool: &OptionPool, expected: Level) -> Result<()> {
    if pool.level() == expected {
        Ok(())
    } else {
        Err(LocationError::LevelMismatch {
            expected,
            found: pool.level(),
        })
    }
}

fn unknown(level: Level, value: &str) -> LocationError {
    LocationError::UnknownValue {
        level,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use cl_model::OptionRecord;

    use super::*;

    fn pool(level: Level, entries: &[(&str, &str)]) -> OptionPool {
        OptionPool::new(
            level,
            entries
                .iter()
                .map(|(value, label)| OptionRecord::new(*value, *label))
                .collect(),
        )
        .unwrap()
    }

    fn filter() -> CascadingFilter {
        CascadingFilter::new(
            pool(Level::Region, &[("R1", "North"), ("R2", "South")]),
            pool(
                Level::Province,
                &[("R1-P1", "Alpha"), ("R1-P2", "Beta"), ("R2-P1", "Gamma")],
            ),
            pool(
                Level::Commune,
                &[("R1-P1-C1", "X"), ("R1-P2-C1", "Y"), ("R2-P1-C1", "Z")],
            ),
        )
        .unwrap()
    }

    fn labels(state: &SelectorState) -> Vec<&str> {
        state.visible().iter().map(|record| record.label.as_str()).collect()
    }

    #[test]
    fn starts_with_full_regions_and_empty_dependents() {
        let filter = filter();
        assert_eq!(labels(filter.regions()), vec!["North", "South"]);
        assert_eq!(filter.regions().selected(), None);
        assert!(filter.provinces().visible().is_empty());
        assert!(filter.communes().visible().is_empty());
    }

    #[test]
    fn region_change_filters_provinces() {
        let mut filter = filter();
        filter.on_region_changed("R1");
        assert_eq!(labels(filter.provinces()), vec!["Alpha", "Beta"]);
        assert_eq!(filter.provinces().selected(), Some("R1-P1"));
        assert_eq!(labels(filter.communes()), vec!["X"]);
    }

    #[test]
    fn unknown_region_empties_dependents() {
        let mut filter = filter();
        filter.on_region_changed("R1");
        filter.on_region_changed("R9");
        assert!(filter.provinces().visible().is_empty());
        assert!(filter.communes().visible().is_empty());
        assert_eq!(filter.selection().compress(), None);
    }

    #[test]
    fn province_outside_region_rejected() {
        let mut filter = filter();
        filter.on_region_changed("R1");
        filter.drain_events();
        assert_eq!(
            filter.on_province_changed("R2-P1"),
            Err(LocationError::NotVisible {
                level: Level::Province,
                value: "R2-P1".to_string(),
            })
        );
        let selection = filter.selection();
        assert_eq!(selection.province.as_deref(), Some("R1-P1"));
        assert_eq!(selection.compress(), Some("R1-P1-C1"));
        assert_eq!(labels(filter.communes()), vec!["X"]);
        assert!(filter.drain_events().is_empty());
    }

    #[test]
    fn unknown_region_stays_selected_without_record() {
        let mut filter = filter();
        filter.on_region_changed("R9");
        assert_eq!(filter.regions().selected(), Some("R9"));
        assert!(filter.regions().selected_record().is_none());
        assert_eq!(labels(filter.regions()), vec!["North", "South"]);
        assert_eq!(filter.provinces().selected(), None);
    }

    #[test]
    fn events_follow_cascade_order() {
        let mut filter = filter();
        filter.on_region_changed("R2");
        let events = filter.drain_events();
        assert_eq!(
            events,
            vec![
                SelectionEvent {
                    level: Level::Province,
                    selected: Some("R2-P1".to_string()),
                    visible: 1,
                },
                SelectionEvent {
                    level: Level::Commune,
                    selected: Some("R2-P1-C1".to_string()),
                    visible: 1,
                },
            ]
        );
        assert!(filter.drain_events().is_empty());
    }

    #[test]
    fn level_mismatch_rejected() {
        let result = CascadingFilter::new(
            pool(Level::Province, &[]),
            pool(Level::Province, &[]),
            pool(Level::Commune, &[]),
        );
        assert_eq!(
            result.unwrap_err(),
            LocationError::LevelMismatch {
                expected: Level::Region,
                found: Level::Province,
            }
        );
    }

    #[test]
    fn restore_selects_ancestors() {
        let mut filter = filter();
        filter.restore("R1-P2-C1").unwrap();
        let selection = filter.selection();
        assert_eq!(selection.region.as_deref(), Some("R1"));
        assert_eq!(selection.province.as_deref(), Some("R1-P2"));
        assert_eq!(selection.compress(), Some("R1-P2-C1"));
        assert_eq!(labels(filter.communes()), vec!["Y"]);
    }

    #[test]
    fn restore_unknown_commune_fails() {
        let mut filter = filter();
        assert_eq!(
            filter.restore("R3-P1-C1").unwrap_err(),
            LocationError::UnknownValue {
                level: Level::Commune,
                value: "R3-P1-C1".to_string(),
            }
        );
    }

    #[test]
    fn restore_empty_resets() {
        let mut filter = filter();
        filter.on_region_changed("R1");
        filter.restore("").unwrap();
        assert!(filter.selection().is_empty());
        assert!(filter.provinces().visible().is_empty());
    }
}
