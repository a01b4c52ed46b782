use crate::audit;
use crate::checklist;
use crate::fingerprint::fingerprint_inputs;
use crate::model::UnitInputs;
use crate::policy::ScorePolicy;
use crate::score::health_score;
use greenlight_types::{AuditReport, ChecklistSummary, Diagnostics, OverallStatus, Severity};

/// Composite result of one evaluation of a unit's inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub checklist: ChecklistSummary,
    pub status: OverallStatus,
    pub health_score: u8,
    pub audit: AuditReport,
    pub diagnostics: Diagnostics,
    /// Stable identity of the inputs this outcome was computed from.
    pub fingerprint: String,
}

/// Evaluate a unit of work: aggregate the checklist, derive the overall
/// status, score health, and build the audit report.
///
/// Deterministic and idempotent: identical inputs yield an identical outcome.
pub fn evaluate(inputs: &UnitInputs, policy: &ScorePolicy) -> Outcome {
    let mut diagnostics = Diagnostics::default();
    let tests_by_id = inputs.tests_by_id();
    let aggregation = checklist::aggregate(&inputs.checklist, &tests_by_id, &mut diagnostics);

    let has_critical = inputs
        .findings
        .iter()
        .any(|f| f.severity == Severity::Critical);

    let status = if aggregation.required_failed || has_critical {
        OverallStatus::Failed
    } else if aggregation.required_unresolved {
        OverallStatus::Pending
    } else {
        OverallStatus::Validated
    };

    Outcome {
        status,
        health_score: health_score(&aggregation.summary, &inputs.findings, policy),
        audit: audit::build_report(&inputs.findings),
        diagnostics,
        fingerprint: fingerprint_inputs(inputs),
        checklist: aggregation.summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{finding, inputs, item, item_skipped, test_result};
    use greenlight_types::TestStatus;

    #[test]
    fn passing_required_item_with_no_findings_validates_at_100() {
        let unit = inputs(
            vec![item("c1", true, &["t1"])],
            vec![test_result("t1", TestStatus::Passed)],
            Vec::new(),
        );
        let outcome = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Validated);
        assert_eq!(outcome.health_score, 100);
        assert_eq!(
            outcome.checklist,
            ChecklistSummary {
                total: 1,
                passed: 1,
                failed: 0,
                pending: 0,
                skipped: 0,
            }
        );
    }

    #[test]
    fn failed_test_plus_critical_finding_fails_at_zero() {
        let unit = inputs(
            vec![item("c1", true, &["t1"])],
            vec![test_result("t1", TestStatus::Failed)],
            vec![finding("ch1", Severity::Critical)],
        );
        let outcome = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Failed);
        assert_eq!(outcome.health_score, 0);
        assert_eq!(outcome.checklist.failed, 1);
    }

    #[test]
    fn unlinked_required_item_is_pending_with_full_score() {
        let unit = inputs(vec![item("c1", true, &[])], Vec::new(), Vec::new());
        let outcome = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Pending);
        assert_eq!(outcome.health_score, 100);
    }

    #[test]
    fn critical_finding_fails_even_with_all_items_passed() {
        let unit = inputs(
            vec![item("c1", true, &["t1"])],
            vec![test_result("t1", TestStatus::Passed)],
            vec![finding("ch1", Severity::Critical)],
        );
        let outcome = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Failed);
        assert_eq!(outcome.health_score, 90);
    }

    #[test]
    fn non_required_failure_does_not_block_validation() {
        let unit = inputs(
            vec![item("c1", true, &["t1"]), item("c2", false, &["t2"])],
            vec![
                test_result("t1", TestStatus::Passed),
                test_result("t2", TestStatus::Failed),
            ],
            Vec::new(),
        );
        let outcome = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Validated);
        assert_eq!(outcome.checklist.failed, 1);
    }

    #[test]
    fn required_skipped_item_does_not_block_validation() {
        let skipped_required = greenlight_types::ChecklistItem {
            required: true,
            ..item_skipped("c1", &[])
        };
        let unit = inputs(vec![skipped_required], Vec::new(), Vec::new());
        let outcome = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Validated);
    }

    #[test]
    fn empty_unit_validates_vacuously() {
        let outcome = evaluate(&UnitInputs::default(), &ScorePolicy::default());
        assert_eq!(outcome.status, OverallStatus::Validated);
        assert_eq!(outcome.health_score, 100);
        assert_eq!(outcome.checklist.total, 0);
        assert!(outcome.audit.groups.is_empty());
    }

    #[test]
    fn evaluate_is_deterministic() {
        let unit = inputs(
            vec![item("c1", true, &["t1"]), item("c2", false, &[])],
            vec![test_result("t1", TestStatus::Passed)],
            vec![finding("ch1", Severity::Medium)],
        );
        let first = evaluate(&unit, &ScorePolicy::default());
        let second = evaluate(&unit, &ScorePolicy::default());
        assert_eq!(first, second);
    }
}
