//! Decision stage for advisor-rs
//!
//! Turns a market snapshot and a sentiment result into a toy investment
//! suggestion via a fixed, total decision table. Intentionally simple and
//! strictly educational; this is not financial advice.

pub mod rule;

pub use rule::{DecisionRule, SignDecisionRule};
