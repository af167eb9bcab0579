//! Raw input values and normalized measurements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parameter::{Parameter, Sex};

/// A value as supplied by the caller, before normalization.
///
/// Deserializes from any JSON scalar so intake documents can be read as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Flag(bool),
    Null,
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A normalized measurement: a finite number or explicitly absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    Value(f64),
    Absent,
}

impl Measurement {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// One measured parameter after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterReading {
    pub parameter: Parameter,
    pub value: Measurement,
}

impl ParameterReading {
    pub fn new(parameter: Parameter, value: Measurement) -> Self {
        Self { parameter, value }
    }
}

/// Patient details that travel with a panel. Age is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub sex: Sex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl Demographics {
    pub fn new(sex: Sex) -> Self {
        Self { sex, age: None }
    }

    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

/// One blood panel submitted for analysis.
///
/// Reading keys are free-form; unknown keys are carried through and ignored
/// during classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPanel {
    #[serde(flatten)]
    pub demographics: Demographics,
    #[serde(default)]
    pub readings: BTreeMap<String, RawValue>,
}

impl BloodPanel {
    pub fn new(demographics: Demographics) -> Self {
        Self {
            demographics,
            readings: BTreeMap::new(),
        }
    }

    /// Add or replace a reading.
    #[must_use]
    pub fn with_reading(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.readings.insert(name.into(), value.into());
        self
    }

    pub fn sex(&self) -> Sex {
        self.demographics.sex
    }
}
