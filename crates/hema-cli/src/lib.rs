//! CLI library components for the blood panel analyzer.

pub mod intake;
pub mod logging;
