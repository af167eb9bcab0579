//! Rule-based diagnostic engine for blood panels.
//!
//! Data flows one way:
//!
//! ```text
//! raw readings -> normalize -> classify (reference ranges) -> rule bank -> select
//! ```
//!
//! - [`classify`]: flags each present parameter as low or high
//! - [`rules`]: ordered, independent diagnostic rules
//! - [`select`]: ranking and the normal / non-specific fallbacks
//! - [`engine`]: the [`Engine`] facade wiring the stages together
//!
//! # Example
//!
//! ```rust,ignore
//! use hema_engine::Engine;
//! use hema_model::{BloodPanel, Demographics, Sex};
//!
//! let engine = Engine::new()?;
//! let panel = BloodPanel::new(Demographics::new(Sex::Male))
//!     .with_reading("hemoglobin", 10.0)
//!     .with_reading("mcv", 70.0);
//! let result = engine.analyze(&panel);
//! assert_eq!(result.primary_diagnosis.name, "Anemia Mikrositik");
//! ```

pub mod classify;
pub mod engine;
pub mod rules;
pub mod select;

pub use classify::{Findings, classify};
pub use engine::{Engine, EngineConfig, analyze};
pub use rules::{Probability, Rule, RuleBank, RuleContext};
pub use select::{Selection, select};
