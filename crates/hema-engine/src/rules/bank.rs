//! Ordered rule lists.

use hema_model::{DiagnosticCandidate, RuleProfile};

use super::rule::{AnemiaProbabilities, Probability, Rule, RuleContext};

/// An ordered collection of independent rules.
///
/// Every rule is evaluated; the order only matters for breaking probability
/// ties when candidates are ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBank {
    profile: RuleProfile,
    rules: Vec<Rule>,
}

impl RuleBank {
    /// Build a bank from an explicit rule list.
    pub fn from_rules(profile: RuleProfile, rules: Vec<Rule>) -> Self {
        Self { profile, rules }
    }

    /// Built-in bank for a profile.
    pub fn for_profile(profile: RuleProfile) -> Self {
        match profile {
            RuleProfile::Clinical => Self::clinical(),
            RuleProfile::Screening => Self::screening(),
        }
    }

    /// Severity-scaled rules over raw counts.
    pub fn clinical() -> Self {
        Self::from_rules(
            RuleProfile::Clinical,
            vec![
                Rule::Anemia(AnemiaProbabilities {
                    microcytic: Probability::scaled(0.7, 0.3),
                    macrocytic: Probability::scaled(0.7, 0.25),
                    normocytic: Probability::scaled(0.7, 0.25),
                }),
                Rule::IronDeficiencyAnemia { probability: 0.85 },
                Rule::MegaloblasticAnemia { probability: 0.8 },
                Rule::Polycythemia {
                    require_erythrocytes: true,
                    probability: 0.8,
                },
                Rule::Leukocytosis {
                    probability: Probability::scaled(0.65, 0.3),
                },
                Rule::Leukopenia { probability: 0.75 },
                Rule::Thrombocytopenia {
                    probability: Probability::scaled(0.7, 0.25),
                },
                Rule::Thrombocytosis { probability: 0.7 },
                Rule::Neutrophilia { probability: 0.7 },
                Rule::Lymphocytosis { probability: 0.65 },
                Rule::Eosinophilia { probability: 0.7 },
            ],
        )
    }

    /// Fixed-probability rules.
    pub fn screening() -> Self {
        Self::from_rules(
            RuleProfile::Screening,
            vec![
                Rule::Anemia(AnemiaProbabilities {
                    microcytic: Probability::fixed(0.8),
                    macrocytic: Probability::fixed(0.8),
                    normocytic: Probability::fixed(0.6),
                }),
                Rule::Polycythemia {
                    require_erythrocytes: false,
                    probability: 0.8,
                },
                Rule::Leukocytosis {
                    probability: Probability::fixed(0.7),
                },
                Rule::Leukopenia { probability: 0.8 },
                Rule::Thrombocytopenia {
                    probability: Probability::fixed(0.8),
                },
                Rule::Thrombocytosis { probability: 0.7 },
                Rule::Neutrophilia { probability: 0.7 },
                Rule::Lymphocytosis { probability: 0.65 },
                Rule::Eosinophilia { probability: 0.7 },
            ],
        )
    }

    pub fn profile(&self) -> RuleProfile {
        self.profile
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule in order and collect the candidates that fired.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<DiagnosticCandidate> {
        let mut candidates = Vec::new();
        for rule in &self.rules {
            if let Some(candidate) = rule.evaluate(ctx) {
                tracing::debug!(
                    rule = candidate.rule.as_str(),
                    condition = candidate.name.as_str(),
                    probability = candidate.probability,
                    "rule fired"
                );
                candidates.push(candidate);
            }
        }
        candidates
    }
}
