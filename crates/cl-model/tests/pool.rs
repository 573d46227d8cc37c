#![allow(missing_docs)]

use cl_model::{Level, LocationError, OptionPool, OptionRecord};

fn provinces() -> OptionPool {
    OptionPool::new(
        Level::Province,
        vec![
            OptionRecord::new("R1-P1", "Alpha"),
            OptionRecord::new("R1-P2", "Beta"),
            OptionRecord::new("R2-P1", "Gamma"),
        ],
    )
    .unwrap()
}

#[test]
fn test_filter_keeps_pool_order() {
    let labels: Vec<String> = provinces()
        .filter_by_prefix("R1")
        .into_iter()
        .map(|record| record.label)
        .collect();
    assert_eq!(labels, vec!["Alpha", "Beta"]);
}

#[test]
fn test_filter_without_matches_is_empty() {
    assert!(provinces().filter_by_prefix("R9").is_empty());
}

#[test]
fn test_empty_pool() {
    let pool = OptionPool::new(Level::Region, Vec::new()).unwrap();
    assert!(pool.is_empty());
    assert!(!provinces().is_empty());
    assert_eq!(provinces().len(), 3);
}

#[test]
fn test_filter_returns_independent_copies() {
    let pool = provinces();
    let mut copies = pool.filter_by_prefix("R2");
    copies[0].label = "Changed".to_string();
    assert_eq!(pool.get("R2-P1").unwrap().label, "Gamma");
}

#[test]
fn test_duplicate_values_rejected() {
    let result = OptionPool::new(
        Level::Commune,
        vec![
            OptionRecord::new("13101", "Santiago"),
            OptionRecord::new("13101", "Santiago Centro"),
        ],
    );
    assert_eq!(
        result,
        Err(LocationError::DuplicateValue {
            level: Level::Commune,
            value: "13101".to_string(),
        })
    );
}

#[test]
fn test_longest_prefix_of() {
    let regions = OptionPool::new(
        Level::Region,
        vec![OptionRecord::new("1", "One"), OptionRecord::new("13", "Thirteen")],
    )
    .unwrap();
    assert_eq!(regions.longest_prefix_of("13101").unwrap().label, "Thirteen");
    assert_eq!(regions.longest_prefix_of("101").unwrap().label, "One");
    assert!(regions.longest_prefix_of("05101").is_none());
}

#[test]
fn test_record_serde_shape() {
    let record = OptionRecord::new("131", "Santiago");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({ "value": "131", "label": "Santiago" }));
}
