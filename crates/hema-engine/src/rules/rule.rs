//! Diagnostic rule definitions.
//!
//! Each [`Rule`] variant is an independent predicate over the abnormal
//! findings (and, for a few rules, the raw measurements) carrying its own
//! probability payload. Rules never look at each other's output.

use std::fmt;

use hema_model::{
    AbnormalFinding, Demographics, DiagnosticCandidate, NormalRange, Parameter, Status,
};
use hema_normalization::NormalizedReadings;
use hema_standards::RangeTable;
use serde::Serialize;

use super::catalog::{self, Condition};
use crate::classify::Findings;

/// MCV above this value (fL) marks megaloblastic anemia.
pub const MEGALOBLASTIC_MCV_THRESHOLD: f64 = 100.0;

/// Probability assigned by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Probability {
    Fixed { value: f64 },
    /// `base + severity * spread`, where severity is the relative distance of
    /// the value past the violated bound. Not clamped.
    Scaled { base: f64, spread: f64 },
}

impl Probability {
    pub const fn fixed(value: f64) -> Self {
        Self::Fixed { value }
    }

    pub const fn scaled(base: f64, spread: f64) -> Self {
        Self::Scaled { base, spread }
    }

    /// Resolve the probability for a finding.
    ///
    /// A finding only exists for a parameter that was classified against
    /// `ranges` for this patient's sex, and a [`RangeTable`] holds a range for
    /// every parameter and sex, so the lookup cannot miss.
    pub fn resolve(
        &self,
        finding: &AbnormalFinding,
        ranges: &RangeTable,
        demographics: &Demographics,
    ) -> f64 {
        match self {
            Self::Fixed { value } => *value,
            Self::Scaled { base, spread } => {
                let range = ranges.range(finding.parameter, demographics.sex);
                debug_assert!(range.is_some(), "finding without a reference range");
                let distance = range.map_or(0.0, |range| severity(finding, &range));
                base + distance * spread
            }
        }
    }
}

/// Relative distance of the value past the bound it violated.
pub fn severity(finding: &AbnormalFinding, range: &NormalRange) -> f64 {
    match finding.status {
        Status::Low => (range.min - finding.value) / range.min,
        Status::High => (finding.value - range.max) / range.max,
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { value } => write!(f, "{value:.2}"),
            Self::Scaled { base, spread } => write!(f, "{base:.2} + severity x {spread:.2}"),
        }
    }
}

/// Everything a rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub findings: &'a Findings,
    pub readings: &'a NormalizedReadings,
    pub ranges: &'a RangeTable,
    pub demographics: &'a Demographics,
}

impl RuleContext<'_> {
    fn finding(&self, parameter: Parameter) -> Option<&AbnormalFinding> {
        self.findings.get(&parameter)
    }

    fn is_low(&self, parameter: Parameter) -> bool {
        self.finding(parameter).is_some_and(AbnormalFinding::is_low)
    }

    fn is_high(&self, parameter: Parameter) -> bool {
        self.finding(parameter).is_some_and(AbnormalFinding::is_high)
    }

    /// Candidate for a finding with the given status, using its severity.
    fn on_status(
        &self,
        parameter: Parameter,
        status: Status,
        rule: &str,
        condition: &Condition,
        probability: &Probability,
    ) -> Option<DiagnosticCandidate> {
        let finding = self.finding(parameter).filter(|f| f.status == status)?;
        let probability = probability.resolve(finding, self.ranges, self.demographics);
        Some(condition.candidate(rule, probability))
    }
}

/// Anemia sub-type probabilities, one per MCV branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnemiaProbabilities {
    pub microcytic: Probability,
    pub macrocytic: Probability,
    pub normocytic: Probability,
}

/// A single diagnostic rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Low hemoglobin, sub-typed by the MCV finding.
    Anemia(AnemiaProbabilities),
    /// Low hemoglobin with low MCV and low MCH.
    IronDeficiencyAnemia { probability: f64 },
    /// Low hemoglobin with raw MCV above [`MEGALOBLASTIC_MCV_THRESHOLD`].
    MegaloblasticAnemia { probability: f64 },
    /// High hemoglobin and hematocrit; with `require_erythrocytes` the red
    /// cell count must be high too.
    Polycythemia {
        require_erythrocytes: bool,
        probability: f64,
    },
    Leukocytosis { probability: Probability },
    Leukopenia { probability: f64 },
    Thrombocytopenia { probability: Probability },
    Thrombocytosis { probability: f64 },
    Neutrophilia { probability: f64 },
    Lymphocytosis { probability: f64 },
    Eosinophilia { probability: f64 },
}

impl Rule {
    /// Stable identifier of the rule family.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Anemia(_) => "anemia",
            Self::IronDeficiencyAnemia { .. } => "iron_deficiency_anemia",
            Self::MegaloblasticAnemia { .. } => "megaloblastic_anemia",
            Self::Polycythemia {
                require_erythrocytes: true,
                ..
            } => "erythrocytosis_polycythemia",
            Self::Polycythemia { .. } => "polycythemia",
            Self::Leukocytosis { .. } => "leukocytosis",
            Self::Leukopenia { .. } => "leukopenia",
            Self::Thrombocytopenia { .. } => "thrombocytopenia",
            Self::Thrombocytosis { .. } => "thrombocytosis",
            Self::Neutrophilia { .. } => "neutrophilia",
            Self::Lymphocytosis { .. } => "lymphocytosis",
            Self::Eosinophilia { .. } => "eosinophilia",
        }
    }

    /// Human-readable trigger condition.
    pub fn trigger(&self) -> &'static str {
        match self {
            Self::Anemia(_) => "hemoglobin low; sub-type by MCV (low, high, otherwise)",
            Self::IronDeficiencyAnemia { .. } => "hemoglobin low, MCV low, MCH low",
            Self::MegaloblasticAnemia { .. } => "hemoglobin low, MCV > 100 fL",
            Self::Polycythemia {
                require_erythrocytes: true,
                ..
            } => "red cells high, hemoglobin high, hematocrit high",
            Self::Polycythemia { .. } => "hemoglobin high, hematocrit high",
            Self::Leukocytosis { .. } => "white cells high",
            Self::Leukopenia { .. } => "white cells low",
            Self::Thrombocytopenia { .. } => "platelets low",
            Self::Thrombocytosis { .. } => "platelets high",
            Self::Neutrophilia { .. } => "neutrophils high",
            Self::Lymphocytosis { .. } => "lymphocytes high",
            Self::Eosinophilia { .. } => "eosinophils high",
        }
    }

    /// Probability description for listings.
    pub fn probability_text(&self) -> String {
        match self {
            Self::Anemia(p) => format!(
                "micro {} / macro {} / normo {}",
                p.microcytic, p.macrocytic, p.normocytic
            ),
            Self::Leukocytosis { probability } | Self::Thrombocytopenia { probability } => {
                probability.to_string()
            }
            Self::IronDeficiencyAnemia { probability }
            | Self::MegaloblasticAnemia { probability }
            | Self::Polycythemia { probability, .. }
            | Self::Leukopenia { probability }
            | Self::Thrombocytosis { probability }
            | Self::Neutrophilia { probability }
            | Self::Lymphocytosis { probability }
            | Self::Eosinophilia { probability } => Probability::fixed(*probability).to_string(),
        }
    }

    /// Evaluate the rule. Returns at most one candidate.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<DiagnosticCandidate> {
        match self {
            Self::Anemia(p) => evaluate_anemia(ctx, p),
            Self::IronDeficiencyAnemia { probability } => {
                let fires = ctx.is_low(Parameter::Hemoglobin)
                    && ctx.is_low(Parameter::Mcv)
                    && ctx.is_low(Parameter::Mch);
                fires.then(|| catalog::IRON_DEFICIENCY_ANEMIA.candidate(self.id(), *probability))
            }
            Self::MegaloblasticAnemia { probability } => {
                let fires = ctx.is_low(Parameter::Hemoglobin)
                    && ctx
                        .readings
                        .value(Parameter::Mcv)
                        .is_some_and(|mcv| mcv > MEGALOBLASTIC_MCV_THRESHOLD);
                fires.then(|| catalog::MEGALOBLASTIC_ANEMIA.candidate(self.id(), *probability))
            }
            Self::Polycythemia {
                require_erythrocytes,
                probability,
            } => {
                let fires = ctx.is_high(Parameter::Hemoglobin)
                    && ctx.is_high(Parameter::Hematocrit)
                    && (!require_erythrocytes || ctx.is_high(Parameter::Erythrocytes));
                let condition = if *require_erythrocytes {
                    &catalog::ERYTHROCYTOSIS_POLYCYTHEMIA
                } else {
                    &catalog::POLYCYTHEMIA
                };
                fires.then(|| condition.candidate(self.id(), *probability))
            }
            Self::Leukocytosis { probability } => ctx.on_status(
                Parameter::Leukocytes,
                Status::High,
                self.id(),
                &catalog::LEUKOCYTOSIS,
                probability,
            ),
            Self::Leukopenia { probability } => ctx.on_status(
                Parameter::Leukocytes,
                Status::Low,
                self.id(),
                &catalog::LEUKOPENIA,
                &Probability::fixed(*probability),
            ),
            Self::Thrombocytopenia { probability } => ctx.on_status(
                Parameter::Thrombocytes,
                Status::Low,
                self.id(),
                &catalog::THROMBOCYTOPENIA,
                probability,
            ),
            Self::Thrombocytosis { probability } => ctx.on_status(
                Parameter::Thrombocytes,
                Status::High,
                self.id(),
                &catalog::THROMBOCYTOSIS,
                &Probability::fixed(*probability),
            ),
            Self::Neutrophilia { probability } => ctx.on_status(
                Parameter::Neutrophils,
                Status::High,
                self.id(),
                &catalog::NEUTROPHILIA,
                &Probability::fixed(*probability),
            ),
            Self::Lymphocytosis { probability } => ctx.on_status(
                Parameter::Lymphocytes,
                Status::High,
                self.id(),
                &catalog::LYMPHOCYTOSIS,
                &Probability::fixed(*probability),
            ),
            Self::Eosinophilia { probability } => ctx.on_status(
                Parameter::Eosinophils,
                Status::High,
                self.id(),
                &catalog::EOSINOPHILIA,
                &Probability::fixed(*probability),
            ),
        }
    }
}

/// The three anemia sub-types are mutually exclusive within this rule.
fn evaluate_anemia(ctx: &RuleContext<'_>, p: &AnemiaProbabilities) -> Option<DiagnosticCandidate> {
    let hemoglobin = ctx
        .finding(Parameter::Hemoglobin)
        .filter(|f| f.is_low())?;

    let (rule, condition, probability) = match ctx.finding(Parameter::Mcv).map(|f| f.status) {
        Some(Status::Low) => ("anemia_microcytic", &catalog::MICROCYTIC_ANEMIA, &p.microcytic),
        Some(Status::High) => ("anemia_macrocytic", &catalog::MACROCYTIC_ANEMIA, &p.macrocytic),
        None => ("anemia_normocytic", &catalog::NORMOCYTIC_ANEMIA, &p.normocytic),
    };

    let probability = probability.resolve(hemoglobin, ctx.ranges, ctx.demographics);
    Some(condition.candidate(rule, probability))
}
