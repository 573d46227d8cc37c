//! Integration tests for the command layer, run against the bundled territory data.

use std::path::PathBuf;

use cl_cli::commands::{
    SelectRequest, load_config, run_levels, run_options, run_restore, run_select,
};
use cl_cli::render::{SelectorsReport, selection_summary, selectors_table};
use cl_model::Level;
use cl_territory::TerritoryConfig;

fn bundled_config() -> TerritoryConfig {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/territory");
    load_config(None, Some(&data_dir)).unwrap()
}

#[test]
fn test_levels_report_control_ids() {
    let levels = run_levels(&bundled_config()).unwrap();
    let ids: Vec<&str> = levels.iter().map(|l| l.control_id.as_str()).collect();
    assert_eq!(ids, vec!["id_commune_0", "id_commune_1", "id_commune_2"]);
    assert_eq!(levels[0].level, Level::Region);
    assert_eq!(levels[0].options, 3);
}

#[test]
fn test_options_filtered_by_parent() {
    let options = run_options(&bundled_config(), Level::Province, Some("08")).unwrap();
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Concepción", "Arauco", "Biobío"]);
}

#[test]
fn test_select_region_cascades_to_communes() {
    let request = SelectRequest {
        region: "05".to_string(),
        ..SelectRequest::default()
    };
    let filter = run_select(&bundled_config(), &request).unwrap();
    assert_eq!(filter.provinces().visible().len(), 8);
    assert_eq!(filter.provinces().selected(), Some("051"));
    assert!(
        filter
            .communes()
            .visible()
            .iter()
            .all(|record| record.value.starts_with("051"))
    );
    assert_eq!(filter.selection().compress(), Some("05101"));
}

#[test]
fn test_select_province_and_commune() {
    let request = SelectRequest {
        region: "13".to_string(),
        province: Some("133".to_string()),
        commune: Some("13302".to_string()),
    };
    let filter = run_select(&bundled_config(), &request).unwrap();
    assert_eq!(filter.communes().visible().len(), 3);
    assert_eq!(filter.selection().compress(), Some("13302"));
}

#[test]
fn test_select_province_outside_region_fails() {
    let request = SelectRequest {
        region: "13".to_string(),
        province: Some("051".to_string()),
        commune: None,
    };
    let error = run_select(&bundled_config(), &request).unwrap_err();
    assert!(error.to_string().contains("province 051 is not under region 13"));
}

#[test]
fn test_select_unknown_region_is_empty() {
    let request = SelectRequest {
        region: "99".to_string(),
        ..SelectRequest::default()
    };
    let filter = run_select(&bundled_config(), &request).unwrap();
    assert!(filter.provinces().visible().is_empty());
    assert!(filter.communes().visible().is_empty());
    assert!(selectors_table(&filter).to_string().contains("(no options)"));
    // The unknown region has no option record, so the raw value is shown.
    assert!(filter.regions().selected_record().is_none());
    insta::assert_snapshot!(selection_summary(&filter), @r"
    region:   99
    province: -
    commune:  -
    value:    -
    ");
}

#[test]
fn test_restore_summary() {
    let filter = run_restore(&bundled_config(), "13114").unwrap();
    insta::assert_snapshot!(selection_summary(&filter), @r"
    region:   13 Región Metropolitana de Santiago
    province: 131 Santiago
    commune:  13114 Las Condes
    value:    13114
    ");
}

#[test]
fn test_restore_unknown_commune_fails() {
    let error = run_restore(&bundled_config(), "99999").unwrap_err();
    assert!(format!("{error:#}").contains("unknown commune value: 99999"));
}

#[test]
fn test_report_serializes_selection() {
    let filter = run_restore(&bundled_config(), "08110").unwrap();
    let json = serde_json::to_value(SelectorsReport::from_filter(&filter)).unwrap();
    assert_eq!(json["value"], "08110");
    assert_eq!(json["selection"]["province"], "081");
    assert_eq!(json["provinces"].as_array().unwrap().len(), 3);
}
