//! Panel-level normalization.

use std::collections::BTreeMap;

use hema_model::{BloodPanel, Measurement, Parameter, ParameterReading, RawValue};

use crate::numeric::normalize;

/// Readings of one panel after normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedReadings {
    readings: BTreeMap<Parameter, Measurement>,
    unknown: Vec<String>,
}

impl NormalizedReadings {
    /// Measurement for a parameter; [`Measurement::Absent`] if not supplied.
    pub fn get(&self, parameter: Parameter) -> Measurement {
        self.readings
            .get(&parameter)
            .copied()
            .unwrap_or(Measurement::Absent)
    }

    /// Numeric value for a parameter, if present.
    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        self.get(parameter).value()
    }

    /// Supplied readings in parameter order, including absent ones.
    pub fn iter(&self) -> impl Iterator<Item = ParameterReading> + '_ {
        self.readings
            .iter()
            .map(|(parameter, value)| ParameterReading::new(*parameter, *value))
    }

    /// Input keys that did not name a panel parameter.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Normalize a set of named raw values.
///
/// Keys are matched through [`Parameter::parse`], so aliases such as
/// `platelet` and `thrombocytes` land on the same parameter. When two keys
/// alias one parameter, the first numeric value in key order wins; an absent
/// value never replaces a numeric one.
pub fn normalize_readings<'a, I>(readings: I) -> NormalizedReadings
where
    I: IntoIterator<Item = (&'a String, &'a RawValue)>,
{
    let mut normalized = NormalizedReadings::default();

    for (name, raw) in readings {
        let Some(parameter) = Parameter::parse(name) else {
            tracing::debug!(key = %name, "ignoring unknown parameter");
            normalized.unknown.push(name.clone());
            continue;
        };

        let measurement = normalize(raw);
        if measurement.is_absent() {
            tracing::debug!(parameter = %parameter, "measurement absent");
        }

        let slot = normalized
            .readings
            .entry(parameter)
            .or_insert(Measurement::Absent);
        if slot.is_absent() {
            *slot = measurement;
        }
    }

    normalized
}

/// Normalize the readings of a panel.
pub fn normalize_panel(panel: &BloodPanel) -> NormalizedReadings {
    normalize_readings(&panel.readings)
}
