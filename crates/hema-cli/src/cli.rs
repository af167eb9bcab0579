//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hema_model::{RuleProfile, Sex};

#[derive(Parser)]
#[command(
    name = "hema",
    version,
    about = "Blood panel analyzer - flag abnormal values and rank likely diagnoses",
    long_about = "Classify complete blood count readings against reference ranges and \
                  evaluate a fixed bank of diagnostic rules.\n\n\
                  Results are screening aids, not a medical diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow measured values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one panel document.
    Analyze(AnalyzeArgs),

    /// Print the reference range table.
    Ranges(RangesArgs),

    /// List the rules of a profile in evaluation order.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// JSON panel document.
    #[arg(value_name = "PANEL")]
    pub panel: PathBuf,

    /// Rule profile to evaluate.
    #[arg(long = "profile", value_enum, default_value = "clinical")]
    pub profile: ProfileArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Analyze even when required readings are missing.
    #[arg(long = "lenient")]
    pub lenient: bool,

    /// Reference range CSV to use instead of the built-in table.
    #[arg(long = "ranges", value_name = "CSV")]
    pub ranges: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RangesArgs {
    /// Only show ranges that apply to this sex.
    #[arg(long = "sex", value_enum)]
    pub sex: Option<SexArg>,

    /// Reference range CSV to show instead of the built-in table.
    #[arg(long = "ranges", value_name = "CSV")]
    pub ranges: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Rule profile to list.
    #[arg(long = "profile", value_enum, default_value = "clinical")]
    pub profile: ProfileArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Clinical,
    Screening,
}

impl From<ProfileArg> for RuleProfile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Clinical => Self::Clinical,
            ProfileArg::Screening => Self::Screening,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Male => Self::Male,
            SexArg::Female => Self::Female,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
