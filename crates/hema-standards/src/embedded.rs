//! Embedded reference data.
//!
//! Reference ranges are embedded at compile time using `include_str!()` so the
//! engine never touches the filesystem unless a caller supplies its own table.

/// File name reported in errors for the embedded table.
pub const REFERENCE_RANGES_FILE: &str = "reference_ranges.csv";

/// Adult reference ranges, keyed by parameter and sex.
pub const REFERENCE_RANGES: &str = include_str!("../data/reference_ranges.csv");
