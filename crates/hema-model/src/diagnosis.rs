//! Diagnosis candidate and analysis result types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::finding::AbnormalFinding;
use crate::parameter::Parameter;
use crate::reading::Demographics;

/// Qualitative likelihood derived from a candidate probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Low,
    Moderate,
    High,
}

impl Likelihood {
    /// Bucket a probability: below 0.5 is low, below 0.75 moderate, else high.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.5 {
            Self::Low
        } else if probability < 0.75 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Localized label used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Rendah",
            Self::Moderate => "Sedang",
            Self::High => "Tinggi",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Named rule list used for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProfile {
    /// Severity-scaled probabilities over raw counts.
    #[default]
    Clinical,
    /// Fixed probabilities, simpler rule set.
    Screening,
}

impl RuleProfile {
    pub const fn all() -> &'static [Self] {
        &[Self::Clinical, Self::Screening]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clinical => "clinical",
            Self::Screening => "screening",
        }
    }
}

impl fmt::Display for RuleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of one fired rule (or a selector fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticCandidate {
    /// Identifier of the rule that produced this candidate.
    pub rule: String,
    /// Condition label.
    pub name: String,
    /// Not clamped; severity-scaled rules may exceed 1.0 for extreme values.
    pub probability: f64,
    pub likelihood: Likelihood,
    pub explanation: String,
    pub recommendations: Vec<String>,
}

impl DiagnosticCandidate {
    pub fn new(
        rule: impl Into<String>,
        name: impl Into<String>,
        probability: f64,
        explanation: impl Into<String>,
        recommendations: &[&str],
    ) -> Self {
        Self {
            rule: rule.into(),
            name: name.into(),
            probability,
            likelihood: Likelihood::from_probability(probability),
            explanation: explanation.into(),
            recommendations: recommendations.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

/// Complete result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub patient: Demographics,
    pub profile: RuleProfile,
    pub abnormal_findings: BTreeMap<Parameter, AbnormalFinding>,
    /// Sorted by probability, descending.
    pub candidates: Vec<DiagnosticCandidate>,
    pub primary_diagnosis: DiagnosticCandidate,
}

impl AnalysisResult {
    pub fn is_normal(&self) -> bool {
        self.abnormal_findings.is_empty()
    }

    pub fn finding(&self, parameter: Parameter) -> Option<&AbnormalFinding> {
        self.abnormal_findings.get(&parameter)
    }

    pub fn candidate(&self, name: &str) -> Option<&DiagnosticCandidate> {
        self.candidates.iter().find(|c| c.name == name)
    }
}
