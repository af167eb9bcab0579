//! Blood panel value normalization.
//!
//! Coerces caller-supplied values into numeric measurements or an explicit
//! absent marker. Normalization never fails: unparseable input is treated as
//! missing data and excluded from classification downstream.

mod numeric;
mod panel;

pub use numeric::{is_numeric, normalize, parse_numeric};
pub use panel::{NormalizedReadings, normalize_panel, normalize_readings};
