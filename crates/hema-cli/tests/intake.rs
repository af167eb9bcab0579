//! Integration tests for panel intake feeding the engine.

use std::path::PathBuf;

use hema_cli::intake::{load_panel, missing_required, validate_required};
use hema_engine::Engine;
use hema_model::{Parameter, Sex};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_flat_intake_document() {
    let panel = load_panel(&fixture("anemia_panel.json")).unwrap();

    assert_eq!(panel.sex(), Sex::Female);
    assert_eq!(panel.demographics.age, Some(34));
    assert!(validate_required(&panel).is_ok());

    let result = Engine::new().unwrap().analyze(&panel);
    assert_eq!(result.abnormal_findings.len(), 6);
    assert!(result.finding(Parameter::Mchc).is_some());
    let names: Vec<&str> = result.candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Anemia Defisiensi Besi", "Anemia Mikrositik"]);
}

#[test]
fn test_incomplete_panel_requires_lenient() {
    let panel = load_panel(&fixture("incomplete_panel.json")).unwrap();

    assert_eq!(
        missing_required(&panel),
        [Parameter::Erythrocytes, Parameter::Thrombocytes]
    );
    let error = validate_required(&panel).unwrap_err();
    assert!(error.to_string().contains("--lenient"));

    // Analysis itself tolerates the gaps.
    let result = Engine::new().unwrap().analyze(&panel);
    assert_eq!(result.primary_diagnosis.name, "Leukositosis");
    assert!((result.primary_diagnosis.probability - 0.8).abs() < 1e-9);
}

#[test]
fn test_missing_file_reports_path() {
    let error = load_panel(&fixture("does_not_exist.json")).unwrap_err();
    assert!(format!("{error:#}").contains("does_not_exist.json"));
}

#[test]
fn test_json_result_shape() {
    let panel = load_panel(&fixture("incomplete_panel.json")).unwrap();
    let result = Engine::new().unwrap().analyze(&panel);

    let json = serde_json::to_value(&result).unwrap();
    let finding = &json["abnormal_findings"]["leukocytes"];
    assert_eq!(finding["status"], "high");
    assert_eq!(finding["normal_range"], "4500 - 11000");
    assert_eq!(json["primary_diagnosis"]["likelihood"], "high");
    assert_eq!(json["patient"]["sex"], "male");
    assert!(json["patient"].get("age").is_none());
}

#[test]
fn test_messy_intake_document_still_analyzes() {
    let panel = load_panel(&fixture("messy_panel.json")).unwrap();

    assert_eq!(panel.demographics.age, Some(52));
    assert!(!panel.readings.contains_key("laboratory"));
    assert!(!panel.readings.contains_key("flags"));
    assert!(validate_required(&panel).is_ok());

    let result = Engine::new().unwrap().analyze(&panel);
    assert_eq!(result.finding(Parameter::Hemoglobin).map(|f| f.value), Some(9.8));
    let names: Vec<&str> = result.candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["Anemia Megaloblastik", "Anemia Makrositik", "Leukopenia"]
    );
}
