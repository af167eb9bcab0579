//! Panel documents: loading and field-presence validation.
//!
//! Accepts either a nested document (`{"sex": .., "readings": {..}}`) or a
//! flat one where readings sit next to the demographic fields. `gender` is
//! accepted for `sex`, and the sex label may be English or Indonesian.
//!
//! Only `sex` can reject a document. An unreadable `age` is dropped, and
//! reading entries whose value is an object or array are skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use hema_model::{BloodPanel, Demographics, Parameter, RawValue, Sex};
use hema_normalization::{is_numeric, parse_numeric};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Readings a panel must carry unless validation is relaxed.
pub const REQUIRED_READINGS: &[Parameter] = &[
    Parameter::Hemoglobin,
    Parameter::Erythrocytes,
    Parameter::Leukocytes,
    Parameter::Thrombocytes,
];

#[derive(Debug, Deserialize)]
struct PanelDocument {
    #[serde(alias = "gender")]
    sex: Option<String>,
    #[serde(default)]
    age: Value,
    #[serde(default)]
    readings: BTreeMap<String, Value>,
    #[serde(flatten)]
    flat: BTreeMap<String, Value>,
}

/// Read and parse a panel document from disk.
pub fn load_panel(path: &Path) -> Result<BloodPanel> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_panel(&text).with_context(|| format!("parse {}", path.display()))
}

/// Parse a panel document. `sex` is required and must be recognizable.
pub fn parse_panel(text: &str) -> Result<BloodPanel> {
    let document: PanelDocument = serde_json::from_str(text).context("invalid panel document")?;

    let label = document
        .sex
        .ok_or_else(|| anyhow!("missing required field: sex"))?;
    let sex = Sex::parse(&label).ok_or_else(|| anyhow!("unrecognized sex: {label:?}"))?;

    let mut demographics = Demographics::new(sex);
    demographics.age = parse_age(&document.age);

    // Nested readings take precedence over flat keys with the same name.
    let mut readings = scalar_readings(document.flat);
    readings.extend(scalar_readings(document.readings));

    Ok(BloodPanel {
        demographics,
        readings,
    })
}

/// Age in whole years from a number or a numeric string; anything else is unknown.
fn parse_age(value: &Value) -> Option<u32> {
    let years = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_numeric(text),
        _ => None,
    }?;
    (0.0..=f64::from(u32::MAX))
        .contains(&years)
        .then(|| years.trunc() as u32)
}

fn scalar_readings(values: BTreeMap<String, Value>) -> BTreeMap<String, RawValue> {
    values
        .into_iter()
        .filter_map(|(key, value)| {
            let raw = match value {
                Value::Number(number) => RawValue::Number(number.as_f64()?),
                Value::String(text) => RawValue::Text(text),
                Value::Bool(flag) => RawValue::Flag(flag),
                Value::Null => RawValue::Null,
                Value::Array(_) | Value::Object(_) => {
                    debug!(key = %key, "skipping non-scalar entry");
                    return None;
                }
            };
            Some((key, raw))
        })
        .collect()
}

/// Required readings that are missing or not numeric.
pub fn missing_required(panel: &BloodPanel) -> Vec<Parameter> {
    REQUIRED_READINGS
        .iter()
        .copied()
        .filter(|required| {
            !panel.readings.iter().any(|(key, value)| {
                Parameter::parse(key) == Some(*required) && is_numeric(value)
            })
        })
        .collect()
}

/// Fail when any required reading is missing.
pub fn validate_required(panel: &BloodPanel) -> Result<()> {
    let missing = missing_required(panel);
    if missing.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = missing.iter().map(Parameter::key).collect();
    bail!(
        "missing required readings: {} (use --lenient to analyze anyway)",
        names.join(", ")
    )
}
