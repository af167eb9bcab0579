//! Error types for reference range loading and lookup.

use std::path::PathBuf;

use hema_model::{Parameter, Sex};
use thiserror::Error;

/// Errors raised while building or querying a reference range table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Range file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV row.
    #[error("failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// Invalid value in a CSV field.
    #[error("invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
    },

    /// Parameter name outside the fixed panel.
    #[error("unknown blood parameter: {name}")]
    UnknownParameter { name: String },

    /// A configured range does not satisfy `min < max`.
    #[error("invalid range for {parameter} ({sex}): min {min} is not below max {max}")]
    InvariantViolation {
        parameter: Parameter,
        sex: Sex,
        min: f64,
        max: f64,
    },

    /// The same parameter and sex are defined twice.
    #[error("duplicate range for {parameter} ({sex}) in {file}")]
    DuplicateRange {
        parameter: Parameter,
        sex: Sex,
        file: String,
    },

    /// Male and female ranges differ for a parameter that is not sex-dependent.
    #[error("{parameter} must have one range for both sexes in {file}")]
    SexSpecificRange { parameter: Parameter, file: String },

    /// The table lacks an entry the panel needs.
    #[error("no range defined for {parameter} ({sex}) in {file}")]
    MissingRange {
        parameter: Parameter,
        sex: Sex,
        file: String,
    },
}

/// Result type for range operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
