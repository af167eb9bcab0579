//! Diagnosis selection.
//!
//! Exactly one of three outcomes per analysis:
//! - at least one rule fired: candidates ranked by probability
//! - no rule fired but something is abnormal: a non-specific fallback
//! - nothing abnormal: a normal result

use hema_model::DiagnosticCandidate;

use crate::classify::Findings;
use crate::rules::catalog;

/// Probability of the non-specific fallback.
pub const NON_SPECIFIC_PROBABILITY: f64 = 0.35;

/// Probability of the normal result.
pub const NORMAL_PROBABILITY: f64 = 0.9;

/// Ranked candidates and the primary diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub candidates: Vec<DiagnosticCandidate>,
    pub primary: DiagnosticCandidate,
}

impl Selection {
    fn single(candidate: DiagnosticCandidate) -> Self {
        Self {
            primary: candidate.clone(),
            candidates: vec![candidate],
        }
    }
}

/// Rank fired candidates or synthesize the applicable fallback.
pub fn select(mut candidates: Vec<DiagnosticCandidate>, findings: &Findings) -> Selection {
    if candidates.is_empty() {
        return if findings.is_empty() {
            Selection::single(catalog::NORMAL.candidate("normal", NORMAL_PROBABILITY))
        } else {
            Selection::single(
                catalog::NON_SPECIFIC.candidate("non_specific", NON_SPECIFIC_PROBABILITY),
            )
        };
    }

    // Stable: equal probabilities keep rule order.
    candidates.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    let primary = candidates[0].clone();
    Selection {
        candidates,
        primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hema_model::{AbnormalFinding, NormalRange, Parameter, Status};

    fn candidate(rule: &str, probability: f64) -> DiagnosticCandidate {
        DiagnosticCandidate::new(rule, rule, probability, "", &[])
    }

    fn one_finding() -> Findings {
        let mut findings = Findings::new();
        findings.insert(
            Parameter::Monocytes,
            AbnormalFinding::new(
                Parameter::Monocytes,
                12.0,
                Status::High,
                &NormalRange::new(2.0, 8.0),
            ),
        );
        findings
    }

    #[test]
    fn test_normal_when_no_findings() {
        let selection = select(Vec::new(), &Findings::new());
        assert_eq!(selection.primary.name, "Hasil Normal");
        assert_eq!(selection.primary.probability, NORMAL_PROBABILITY);
        assert_eq!(selection.candidates.len(), 1);
    }

    #[test]
    fn test_non_specific_when_nothing_fires() {
        let selection = select(Vec::new(), &one_finding());
        assert_eq!(selection.primary.name, "Abnormalitas Darah Non-spesifik");
        assert_eq!(selection.primary.probability, NON_SPECIFIC_PROBABILITY);
    }

    #[test]
    fn test_ranking_is_descending_and_stable() {
        let selection = select(
            vec![
                candidate("a", 0.7),
                candidate("b", 0.85),
                candidate("c", 0.7),
                candidate("d", 0.65),
            ],
            &one_finding(),
        );
        let order: Vec<&str> = selection.candidates.iter().map(|c| c.rule.as_str()).collect();
        assert_eq!(order, ["b", "a", "c", "d"]);
        assert_eq!(selection.primary.rule, "b");
    }
}
