//! Abnormality classification.
//!
//! Compares every present measurement against its reference range and keeps
//! only the out-of-range ones. Bounds are normal: a value equal to `min` or
//! `max` produces no finding.

use std::collections::BTreeMap;

use hema_model::{AbnormalFinding, Parameter, Sex};
use hema_normalization::NormalizedReadings;
use hema_standards::RangeTable;

/// Abnormal findings keyed by parameter.
pub type Findings = BTreeMap<Parameter, AbnormalFinding>;

/// Classify normalized readings for a patient of the given sex.
///
/// Absent measurements and parameters without a range are skipped.
pub fn classify(readings: &NormalizedReadings, sex: Sex, ranges: &RangeTable) -> Findings {
    let mut findings = Findings::new();

    for reading in readings.iter() {
        let Some(value) = reading.value.value() else {
            continue;
        };
        let Some(range) = ranges.range(reading.parameter, sex) else {
            continue;
        };
        let Some(status) = range.status_of(value) else {
            continue;
        };

        tracing::debug!(
            parameter = %reading.parameter,
            status = status.label(),
            range = %range,
            "abnormal parameter"
        );
        findings.insert(
            reading.parameter,
            AbnormalFinding::new(reading.parameter, value, status, &range),
        );
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use hema_model::{BloodPanel, Demographics, Status};
    use hema_normalization::normalize_panel;

    fn classify_panel(panel: &BloodPanel) -> Findings {
        let ranges = RangeTable::shared().unwrap();
        classify(&normalize_panel(panel), panel.sex(), ranges)
    }

    #[test]
    fn test_low_and_high_are_flagged() {
        let panel = BloodPanel::new(Demographics::new(Sex::Male))
            .with_reading("hemoglobin", 10.0)
            .with_reading("leukocytes", 15000.0)
            .with_reading("mcv", 88.0);
        let findings = classify_panel(&panel);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[&Parameter::Hemoglobin].status, Status::Low);
        assert_eq!(findings[&Parameter::Hemoglobin].range_text, "13.5 - 17.5");
        assert_eq!(findings[&Parameter::Leukocytes].status, Status::High);
    }

    #[test]
    fn test_bounds_are_normal() {
        let panel = BloodPanel::new(Demographics::new(Sex::Female))
            .with_reading("hemoglobin", 12.0)
            .with_reading("hematocrit", 44.0);
        assert!(classify_panel(&panel).is_empty());
    }

    #[test]
    fn test_sex_selects_range() {
        // 13.0 g/dL is low for men, normal for women
        let male = BloodPanel::new(Demographics::new(Sex::Male)).with_reading("hemoglobin", 13.0);
        let female =
            BloodPanel::new(Demographics::new(Sex::Female)).with_reading("hemoglobin", 13.0);
        assert!(classify_panel(&male).contains_key(&Parameter::Hemoglobin));
        assert!(classify_panel(&female).is_empty());
    }

    #[test]
    fn test_absent_and_unknown_are_skipped() {
        let panel = BloodPanel::new(Demographics::new(Sex::Male))
            .with_reading("mcv", "N/A")
            .with_reading("glucose", 300.0);
        assert!(classify_panel(&panel).is_empty());
    }
}
