use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info_span, trace, warn};

use hema_engine::{Engine, EngineConfig, RuleBank};
use hema_model::{AnalysisResult, RawValue, RuleProfile, Sex};
use hema_standards::RangeTable;

use crate::cli::{AnalyzeArgs, RangesArgs, RulesArgs};
use crate::summary::{apply_table_style, header_cell};
use hema_cli::intake::{load_panel, missing_required, validate_required};
use hema_cli::logging::redact_value;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let span = info_span!("panel", path = %args.panel.display());
    let _guard = span.enter();

    let panel = load_panel(&args.panel)?;
    if args.lenient {
        let missing = missing_required(&panel);
        if !missing.is_empty() {
            warn!(missing = ?missing, "required readings missing; continuing");
        }
    } else {
        validate_required(&panel)?;
    }

    for (key, value) in &panel.readings {
        let text = raw_text(value);
        trace!(key = %key, value = redact_value(&text), "reading");
    }

    let config = EngineConfig::default().with_profile(args.profile.into());
    let engine = match &args.ranges {
        Some(path) => {
            let ranges = RangeTable::from_path(path)
                .with_context(|| format!("load reference ranges from {}", path.display()))?;
            Engine::with_ranges(ranges, config)
        }
        None => Engine::with_config(config).context("load reference ranges")?,
    };

    Ok(engine.analyze(&panel))
}

pub fn run_ranges(args: &RangesArgs) -> Result<()> {
    let table = load_ranges(args)?;
    let entries: Vec<_> = match args.sex {
        Some(sex) => table.for_sex(Sex::from(sex)).collect(),
        None => table.iter().collect(),
    };

    let mut output = Table::new();
    output.set_header(vec![
        header_cell("Parameter"),
        header_cell("Sex"),
        header_cell("Normal range"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut output);
    for entry in entries {
        output.add_row(vec![
            entry.parameter.label().to_string(),
            entry.sex.label().to_string(),
            entry.range.text(),
            entry.unit.clone(),
        ]);
    }
    println!("Source: {}", table.source());
    println!("{output}");
    Ok(())
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let profile = RuleProfile::from(args.profile);
    let bank = RuleBank::for_profile(profile);

    let mut output = Table::new();
    output.set_header(vec![
        header_cell("#"),
        header_cell("Rule"),
        header_cell("Fires when"),
        header_cell("Probability"),
    ]);
    apply_table_style(&mut output);
    for (index, rule) in bank.rules().iter().enumerate() {
        output.add_row(vec![
            (index + 1).to_string(),
            rule.id().to_string(),
            rule.trigger().to_string(),
            rule.probability_text(),
        ]);
    }
    println!("Profile: {profile}");
    println!("{output}");
    Ok(())
}

fn load_ranges(args: &RangesArgs) -> Result<RangeTable> {
    match &args.ranges {
        Some(path) => RangeTable::from_path(path)
            .with_context(|| format!("load reference ranges from {}", path.display())),
        None => RangeTable::embedded().context("load reference ranges"),
    }
}

fn raw_text(value: &RawValue) -> String {
    match value {
        RawValue::Number(number) => number.to_string(),
        RawValue::Text(text) => text.clone(),
        RawValue::Flag(flag) => flag.to_string(),
        RawValue::Null => "null".to_string(),
    }
}
