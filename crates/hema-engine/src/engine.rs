//! Analysis entry point.

use hema_model::{AnalysisResult, BloodPanel, NormalRange, RuleProfile, Sex};
use hema_normalization::normalize_panel;
use hema_standards::{RangeTable, StandardsError};
use tracing::{debug, info, info_span};

use crate::classify::classify;
use crate::rules::{RuleBank, RuleContext};
use crate::select::select;

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub profile: RuleProfile,
}

impl EngineConfig {
    #[must_use]
    pub fn with_profile(mut self, profile: RuleProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// Diagnostic engine: a validated range table and a rule bank.
///
/// Immutable after construction, so one engine can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Engine {
    ranges: RangeTable,
    bank: RuleBank,
}

impl Engine {
    /// Engine over the embedded reference ranges with the default profile.
    pub fn new() -> Result<Self, StandardsError> {
        Self::with_config(EngineConfig::default())
    }

    /// Engine over the embedded reference ranges.
    pub fn with_config(config: EngineConfig) -> Result<Self, StandardsError> {
        let ranges = RangeTable::shared()?.clone();
        Ok(Self::with_ranges(ranges, config))
    }

    /// Engine over a caller-supplied (already validated) range table.
    pub fn with_ranges(ranges: RangeTable, config: EngineConfig) -> Self {
        Self {
            ranges,
            bank: RuleBank::for_profile(config.profile),
        }
    }

    /// Replace the rule bank.
    #[must_use]
    pub fn with_rule_bank(mut self, bank: RuleBank) -> Self {
        self.bank = bank;
        self
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    pub fn rule_bank(&self) -> &RuleBank {
        &self.bank
    }

    pub fn profile(&self) -> RuleProfile {
        self.bank.profile()
    }

    /// Resolve a reference range by parameter name.
    pub fn resolve(&self, name: &str, sex: Sex) -> Result<NormalRange, StandardsError> {
        self.ranges.resolve(name, sex)
    }

    /// Analyze one panel.
    ///
    /// Never fails: malformed values are treated as absent and unknown keys
    /// are ignored.
    pub fn analyze(&self, panel: &BloodPanel) -> AnalysisResult {
        let span = info_span!("analyze", profile = %self.profile(), sex = %panel.sex());
        let _guard = span.enter();

        let readings = normalize_panel(panel);
        if !readings.unknown().is_empty() {
            debug!(keys = ?readings.unknown(), "unknown parameters ignored");
        }

        let findings = classify(&readings, panel.sex(), &self.ranges);
        let ctx = RuleContext {
            findings: &findings,
            readings: &readings,
            ranges: &self.ranges,
            demographics: &panel.demographics,
        };
        let fired = self.bank.evaluate(&ctx);
        let fired_count = fired.len();
        let selection = select(fired, &findings);

        info!(
            readings = readings.len(),
            abnormal = findings.len(),
            fired = fired_count,
            primary = selection.primary.name.as_str(),
            "analysis complete"
        );

        AnalysisResult {
            patient: panel.demographics,
            profile: self.profile(),
            abnormal_findings: findings,
            candidates: selection.candidates,
            primary_diagnosis: selection.primary,
        }
    }
}

/// Analyze a panel with the embedded ranges and the default profile.
pub fn analyze(panel: &BloodPanel) -> Result<AnalysisResult, StandardsError> {
    Ok(Engine::new()?.analyze(panel))
}
