//! Integration tests for reference range loading and resolution.

use hema_model::{NormalRange, Parameter, Sex, Status};
use hema_standards::{RangeTable, StandardsError, resolve};
use proptest::prelude::*;

const HEADER: &str = "Parameter,Sex,Min,Max,Unit\n";

fn full_table_with(overrides: &[(&str, &str)]) -> String {
    let mut csv = String::from(HEADER);
    for parameter in Parameter::all() {
        let key = parameter.key();
        if let Some((_, row)) = overrides.iter().find(|(name, _)| *name == key) {
            csv.push_str(row);
            csv.push('\n');
        } else {
            csv.push_str(&format!("{key},any,1,2,u\n"));
        }
    }
    csv
}

#[test]
fn test_sex_dependent_ranges() {
    let table = RangeTable::embedded().unwrap();
    assert_eq!(
        table.resolve("hemoglobin", Sex::Male).unwrap(),
        NormalRange::new(13.5, 17.5)
    );
    assert_eq!(
        table.resolve("hemoglobin", Sex::Female).unwrap(),
        NormalRange::new(12.0, 15.5)
    );
    assert_eq!(
        table.resolve("hematocrit", Sex::Female).unwrap(),
        NormalRange::new(36.0, 44.0)
    );
    assert_eq!(
        table.resolve("redBloodCell", Sex::Male).unwrap(),
        NormalRange::new(4.7, 6.1)
    );
}

#[test]
fn test_sex_independent_ranges() {
    for sex in Sex::all() {
        assert_eq!(resolve("leukocytes", *sex).unwrap(), NormalRange::new(4500.0, 11000.0));
        assert_eq!(resolve("platelet", *sex).unwrap(), NormalRange::new(150000.0, 450000.0));
        assert_eq!(resolve("mcv", *sex).unwrap(), NormalRange::new(80.0, 96.0));
        assert_eq!(resolve("basophils", *sex).unwrap(), NormalRange::new(0.0, 1.0));
    }
}

#[test]
fn test_unknown_parameter_is_rejected() {
    let err = resolve("ferritin", Sex::Male).unwrap_err();
    assert!(matches!(err, StandardsError::UnknownParameter { ref name } if name == "ferritin"));
}

#[test]
fn test_inverted_range_is_invariant_violation() {
    let csv = full_table_with(&[("mcv", "mcv,any,96,80,fL")]);
    let err = RangeTable::from_csv_str(&csv, "bad.csv").unwrap_err();
    assert!(matches!(
        err,
        StandardsError::InvariantViolation {
            parameter: Parameter::Mcv,
            ..
        }
    ));
}

#[test]
fn test_equal_bounds_are_invariant_violation() {
    let csv = full_table_with(&[("mch", "mch,any,30,30,pg")]);
    assert!(matches!(
        RangeTable::from_csv_str(&csv, "bad.csv"),
        Err(StandardsError::InvariantViolation { .. })
    ));
}

#[test]
fn test_missing_parameter_is_rejected() {
    let csv = format!("{HEADER}hemoglobin,any,12,17,g/dL\n");
    let err = RangeTable::from_csv_str(&csv, "partial.csv").unwrap_err();
    assert!(matches!(err, StandardsError::MissingRange { .. }));
    assert!(err.to_string().contains("partial.csv"));
}

#[test]
fn test_duplicate_row_is_rejected() {
    let mut csv = full_table_with(&[]);
    csv.push_str("mcv,male,80,100,fL\n");
    assert!(matches!(
        RangeTable::from_csv_str(&csv, "dup.csv"),
        Err(StandardsError::DuplicateRange {
            parameter: Parameter::Mcv,
            sex: Sex::Male,
            ..
        })
    ));
}

#[test]
fn test_sex_independent_parameter_needs_one_range() {
    let csv = full_table_with(&[("mcv", "mcv,male,80,96,fL\nmcv,female,78,96,fL")]);
    assert!(matches!(
        RangeTable::from_csv_str(&csv, "split.csv"),
        Err(StandardsError::SexSpecificRange {
            parameter: Parameter::Mcv,
            ..
        })
    ));

    // Per-sex rows are fine when they agree.
    let csv = full_table_with(&[("mcv", "mcv,male,80,96,fL\nmcv,female,80,96,fL")]);
    assert!(RangeTable::from_csv_str(&csv, "split.csv").is_ok());
}

#[test]
fn test_sex_dependent_parameter_may_differ() {
    let csv = full_table_with(&[(
        "hemoglobin",
        "hemoglobin,male,13.5,17.5,g/dL\nhemoglobin,female,12,15.5,g/dL",
    )]);
    let table = RangeTable::from_csv_str(&csv, "custom.csv").unwrap();
    assert!(Parameter::Hemoglobin.is_sex_dependent());
    assert_ne!(
        table.range(Parameter::Hemoglobin, Sex::Male),
        table.range(Parameter::Hemoglobin, Sex::Female)
    );
}

#[test]
fn test_unknown_sex_column_is_invalid_value() {
    let csv = full_table_with(&[("mcv", "mcv,other,80,96,fL")]);
    assert!(matches!(
        RangeTable::from_csv_str(&csv, "bad.csv"),
        Err(StandardsError::InvalidValue { field: "Sex", .. })
    ));
}

#[test]
fn test_custom_table_overrides_embedded_values() {
    let csv = full_table_with(&[("mcv", "mcv,any,80,100,fL")]);
    let table = RangeTable::from_csv_str(&csv, "custom.csv").unwrap();
    assert_eq!(table.range(Parameter::Mcv, Sex::Male), Some(NormalRange::new(80.0, 100.0)));
}

#[test]
fn test_for_sex_lists_every_parameter_in_panel_order() {
    let table = RangeTable::embedded().unwrap();
    let parameters: Vec<Parameter> = table.for_sex(Sex::Female).map(|e| e.parameter).collect();
    assert_eq!(parameters, Parameter::all());
}

proptest! {
    #[test]
    fn range_classification_is_monotonic(index in 0usize..13, male in any::<bool>(), offset in 0.001f64..1000.0) {
        let table = RangeTable::shared().unwrap();
        let parameter = Parameter::all()[index];
        let sex = if male { Sex::Male } else { Sex::Female };
        let range = table.range(parameter, sex).unwrap();

        prop_assert_eq!(range.status_of(range.min), None);
        prop_assert_eq!(range.status_of(range.max), None);
        prop_assert_eq!(range.status_of(range.min - offset), Some(Status::Low));
        prop_assert_eq!(range.status_of(range.max + offset), Some(Status::High));
    }
}
