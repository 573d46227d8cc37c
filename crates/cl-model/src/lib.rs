pub mod error;
pub mod level;
pub mod option;
pub mod selection;

pub use error::{LocationError, Result};
pub use level::Level;
pub use option::{OptionPool, OptionRecord};
pub use selection::{InitialPopulation, LocationSelection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_and_selection_compose() {
        let communes = OptionPool::new(
            Level::Commune,
            vec![
                OptionRecord::new("13101", "Santiago"),
                OptionRecord::new("13102", "Cerrillos"),
            ],
        )
        .expect("unique values");
        let selection = LocationSelection {
            region: Some("13".to_string()),
            province: Some("131".to_string()),
            commune: communes.get("13102").map(|record| record.value.clone()),
        };
        assert_eq!(selection.compress(), Some("13102"));
    }

    #[test]
    fn selection_serializes() {
        let selection = LocationSelection {
            region: Some("05".to_string()),
            province: None,
            commune: None,
        };
        let json = serde_json::to_string(&selection).expect("serialize selection");
        let round: LocationSelection = serde_json::from_str(&json).expect("deserialize selection");
        assert_eq!(round, selection);
    }
}
