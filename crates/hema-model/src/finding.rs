use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parameter::Parameter;

/// Reference interval for one parameter. Bounds are inclusive-normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `min < max` holds.
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Classify a value against this range. Values equal to a bound are normal.
    pub fn status_of(&self, value: f64) -> Option<Status> {
        if value < self.min {
            Some(Status::Low)
        } else if value > self.max {
            Some(Status::High)
        } else {
            None
        }
    }

    /// Display text, e.g. `13.5 - 17.5`.
    pub fn text(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}

impl fmt::Display for NormalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// Direction of an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Low,
    High,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }

    /// Localized label used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Rendah",
            Self::High => "Tinggi",
        }
    }
}

/// A parameter whose value fell outside its reference range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbnormalFinding {
    pub parameter: Parameter,
    pub value: f64,
    pub status: Status,
    #[serde(rename = "normal_range")]
    pub range_text: String,
}

impl AbnormalFinding {
    pub fn new(parameter: Parameter, value: f64, status: Status, range: &NormalRange) -> Self {
        Self {
            parameter,
            value,
            status,
            range_text: range.text(),
        }
    }

    pub fn is_low(&self) -> bool {
        self.status == Status::Low
    }

    pub fn is_high(&self) -> bool {
        self.status == Status::High
    }
}
