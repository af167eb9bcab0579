//! Reference ranges for blood panel parameters.
//!
//! This crate provides the range resolver: a validated table mapping
//! `(parameter, sex)` to a normal `{min, max}` interval. The default table is
//! embedded at compile time; callers may load their own CSV with the same
//! layout.
//!
//! # Example
//!
//! ```rust,ignore
//! use hema_model::Sex;
//! use hema_standards::RangeTable;
//!
//! let table = RangeTable::shared()?;
//! let range = table.resolve("hemoglobin", Sex::Male)?;
//! assert_eq!(range.min, 13.5);
//! ```

pub mod embedded;
pub mod error;
pub mod ranges;

pub use error::{Result, StandardsError};
pub use ranges::{RangeEntry, RangeTable, resolve};
