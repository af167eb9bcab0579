//! Diagnostic rule bank.
//!
//! Rules are a tagged enum evaluated in a fixed order. Two built-in profiles
//! share the same dispatch: `clinical` scales probabilities by severity,
//! `screening` uses fixed probabilities.

pub mod catalog;
mod bank;
mod rule;

pub use bank::RuleBank;
pub use catalog::Condition;
pub use rule::{
    AnemiaProbabilities, MEGALOBLASTIC_MCV_THRESHOLD, Probability, Rule, RuleContext, severity,
};
