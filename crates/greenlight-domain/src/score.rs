//! Health scoring: checklist coverage minus severity-weighted finding penalty.
//!
//! Coverage measures the pass rate among items that have resolved either
//! way; the penalty punishes unresolved risk independently of checklist
//! state, so a fully-covered checklist with a critical security finding
//! still scores low.

use crate::policy::ScorePolicy;
use greenlight_types::{ChecklistSummary, Finding};

/// Compute the 0-100 health score for a unit of work.
///
/// `coverage = 100 * passed / (passed + failed)` over resolved items only;
/// 100 when nothing has resolved yet. Unresolved items keep the unit
/// `pending`, which is the overall status's job, so they never drag the
/// score down. `penalty = Σ weight(severity) * scale`, result clamped to
/// [0, 100] and rounded. Pure and total: identical inputs always produce
/// identical output.
pub fn health_score(summary: &ChecklistSummary, findings: &[Finding], policy: &ScorePolicy) -> u8 {
    let resolved = summary.passed + summary.failed;
    let coverage = if resolved > 0 {
        100.0 * f64::from(summary.passed) / f64::from(resolved)
    } else {
        100.0
    };

    let penalty: f64 = findings
        .iter()
        .map(|f| policy.weights.weight(f.severity) * policy.penalty_scale)
        .sum();
    let penalty = penalty.min(100.0);

    (coverage - penalty).clamp(0.0, 100.0).round() as u8
}
