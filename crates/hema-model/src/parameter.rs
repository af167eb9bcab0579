//! Blood parameter and patient sex enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseParameterError;

/// A measured blood parameter from the fixed panel.
///
/// The declaration order is the display order of the panel and the key order
/// of every parameter map in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Hemoglobin,
    Hematocrit,
    /// Red blood cell count.
    Erythrocytes,
    /// White blood cell count.
    Leukocytes,
    /// Platelet count.
    Thrombocytes,
    Mcv,
    Mch,
    Mchc,
    Neutrophils,
    Lymphocytes,
    Monocytes,
    Eosinophils,
    Basophils,
}

impl Parameter {
    /// Get all panel parameters in display order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Hemoglobin,
            Self::Hematocrit,
            Self::Erythrocytes,
            Self::Leukocytes,
            Self::Thrombocytes,
            Self::Mcv,
            Self::Mch,
            Self::Mchc,
            Self::Neutrophils,
            Self::Lymphocytes,
            Self::Monocytes,
            Self::Eosinophils,
            Self::Basophils,
        ]
    }

    /// Parse a parameter key, accepting the aliases used by intake forms.
    ///
    /// Matching ignores ASCII case, `_`, `-` and spaces, so `redBloodCell`,
    /// `red_blood_cell` and `RED BLOOD CELL` all resolve to [`Parameter::Erythrocytes`].
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "hemoglobin" | "haemoglobin" | "hgb" | "hb" => Some(Self::Hemoglobin),
            "hematocrit" | "haematocrit" | "hct" => Some(Self::Hematocrit),
            "erythrocytes" | "redbloodcell" | "redbloodcells" | "rbc" => Some(Self::Erythrocytes),
            "leukocytes" | "whitebloodcell" | "whitebloodcells" | "wbc" => Some(Self::Leukocytes),
            "thrombocytes" | "platelet" | "platelets" | "plt" => Some(Self::Thrombocytes),
            "mcv" => Some(Self::Mcv),
            "mch" => Some(Self::Mch),
            "mchc" => Some(Self::Mchc),
            "neutrophils" => Some(Self::Neutrophils),
            "lymphocytes" => Some(Self::Lymphocytes),
            "monocytes" => Some(Self::Monocytes),
            "eosinophils" => Some(Self::Eosinophils),
            "basophils" => Some(Self::Basophils),
            _ => None,
        }
    }

    /// Canonical snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "hemoglobin",
            Self::Hematocrit => "hematocrit",
            Self::Erythrocytes => "erythrocytes",
            Self::Leukocytes => "leukocytes",
            Self::Thrombocytes => "thrombocytes",
            Self::Mcv => "mcv",
            Self::Mch => "mch",
            Self::Mchc => "mchc",
            Self::Neutrophils => "neutrophils",
            Self::Lymphocytes => "lymphocytes",
            Self::Monocytes => "monocytes",
            Self::Eosinophils => "eosinophils",
            Self::Basophils => "basophils",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "Hemoglobin",
            Self::Hematocrit => "Hematocrit",
            Self::Erythrocytes => "Red Blood Cells",
            Self::Leukocytes => "White Blood Cells",
            Self::Thrombocytes => "Platelets",
            Self::Mcv => "MCV",
            Self::Mch => "MCH",
            Self::Mchc => "MCHC",
            Self::Neutrophils => "Neutrophils",
            Self::Lymphocytes => "Lymphocytes",
            Self::Monocytes => "Monocytes",
            Self::Eosinophils => "Eosinophils",
            Self::Basophils => "Basophils",
        }
    }

    /// Whether the reference range differs between male and female patients.
    pub fn is_sex_dependent(&self) -> bool {
        matches!(
            self,
            Self::Hemoglobin | Self::Hematocrit | Self::Erythrocytes
        )
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Parameter {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseParameterError::UnknownParameter {
            name: s.to_string(),
        })
    }
}

/// Patient sex used to select reference ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Both canonical values.
    pub const fn all() -> &'static [Self] {
        &[Self::Male, Self::Female]
    }

    /// Parse a sex label strictly. Returns `None` for unrecognised labels.
    ///
    /// Accepts English and Indonesian spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "laki-laki" | "laki laki" | "lakilaki" | "l" | "pria" => {
                Some(Self::Male)
            }
            "female" | "f" | "woman" | "perempuan" | "p" | "wanita" => Some(Self::Female),
            _ => None,
        }
    }

    /// Map any label to a canonical value.
    ///
    /// Only recognised male labels select [`Sex::Male`]; everything else,
    /// including unrecognised input, selects [`Sex::Female`].
    pub fn from_label(s: &str) -> Self {
        match Self::parse(s) {
            Some(Self::Male) => Self::Male,
            _ => Self::Female,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseParameterError::UnknownSex {
            label: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_aliases_resolve() {
        assert_eq!(Parameter::parse("redBloodCell"), Some(Parameter::Erythrocytes));
        assert_eq!(Parameter::parse("whiteBloodCell"), Some(Parameter::Leukocytes));
        assert_eq!(Parameter::parse("platelet"), Some(Parameter::Thrombocytes));
        assert_eq!(Parameter::parse(" MCHC "), Some(Parameter::Mchc));
        assert_eq!(Parameter::parse("glucose"), None);
    }

    #[test]
    fn parameter_key_round_trips() {
        for parameter in Parameter::all() {
            assert_eq!(Parameter::parse(parameter.key()), Some(*parameter));
        }
    }

    #[test]
    fn unknown_parameter_error_names_input() {
        let err = "ferritin".parse::<Parameter>().unwrap_err();
        assert_eq!(err.to_string(), "unknown blood parameter: ferritin");
    }

    #[test]
    fn sex_lenient_mapping_falls_back_to_female() {
        assert_eq!(Sex::from_label("male"), Sex::Male);
        assert_eq!(Sex::from_label("Laki-laki"), Sex::Male);
        assert_eq!(Sex::from_label("perempuan"), Sex::Female);
        assert_eq!(Sex::from_label("unknown"), Sex::Female);
        assert_eq!(Sex::from_label(""), Sex::Female);
    }

    #[test]
    fn sex_strict_parse_rejects_unknown() {
        assert_eq!(Sex::parse("wanita"), Some(Sex::Female));
        assert!("other".parse::<Sex>().is_err());
    }
}
