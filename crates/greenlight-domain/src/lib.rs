//! Pure validation evaluation (no IO).
//!
//! Input: a unit's checklist, test results, and findings, assembled elsewhere.
//! Output: checklist summary + overall status + health score + audit report.
//!
//! Nothing in this crate raises errors: malformed linkage degrades to an
//! unresolved state and is tallied in diagnostics, so batch evaluation never
//! aborts early.

#![forbid(unsafe_code)]

pub mod audit;
pub mod checklist;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod score;
pub mod test_support;

mod engine;

#[cfg(test)]
mod proptest;

pub use engine::{evaluate, Outcome};
