//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Checklist summary totality
//! - Health score bounds and monotonicity
//! - Audit report count conservation and ordering determinism
//! - Evaluation determinism

use crate::audit::build_report;
use crate::engine::evaluate;
use crate::model::UnitInputs;
use crate::policy::ScorePolicy;
use crate::score::health_score;
use greenlight_types::{
    Category, ChecklistItem, ChecklistSummary, Finding, RepoPath, Severity, TestResult, TestStatus,
};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_id(prefix: &'static str) -> impl Strategy<Value = String> {
    (0u32..40).prop_map(move |n| format!("{prefix}{n}"))
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_test_status() -> impl Strategy<Value = TestStatus> {
    prop_oneof![
        Just(TestStatus::Passed),
        Just(TestStatus::Failed),
        Just(TestStatus::Errored),
    ]
}

fn arb_finding() -> impl Strategy<Value = Finding> {
    (arb_id("f"), arb_severity(), arb_category()).prop_map(|(id, severity, category)| Finding {
        id,
        severity,
        category,
        message: "generated".to_string(),
        file_path: RepoPath::new("src/lib.rs"),
        line_number: None,
        suggestion: None,
    })
}

fn arb_item() -> impl Strategy<Value = ChecklistItem> {
    (
        arb_id("c"),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(arb_id("t"), 0..4),
    )
        .prop_map(|(id, required, skipped, linked_test_ids)| ChecklistItem {
            text: format!("criterion {id}"),
            id,
            required,
            skipped,
            linked_test_ids,
        })
}

fn arb_test_result() -> impl Strategy<Value = TestResult> {
    (arb_id("t"), arb_test_status(), 0u64..5000).prop_map(|(test_id, status, duration_ms)| {
        TestResult {
            name: format!("case.{test_id}"),
            test_id,
            status,
            duration_ms,
            linked_checklist_ids: Vec::new(),
        }
    })
}

fn arb_inputs() -> impl Strategy<Value = UnitInputs> {
    (
        prop::collection::vec(arb_item(), 0..8),
        prop::collection::vec(arb_test_result(), 0..8),
        prop::collection::vec(arb_finding(), 0..8),
    )
        .prop_map(|(checklist, test_results, findings)| UnitInputs {
            checklist,
            test_results,
            findings,
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn summary_total_equals_checklist_length(inputs in arb_inputs()) {
        let outcome = evaluate(&inputs, &ScorePolicy::default());
        prop_assert_eq!(outcome.checklist.total as usize, inputs.checklist.len());
        let buckets = outcome.checklist.passed
            + outcome.checklist.failed
            + outcome.checklist.pending
            + outcome.checklist.skipped;
        prop_assert_eq!(buckets, outcome.checklist.total);
    }

    #[test]
    fn score_stays_in_bounds(inputs in arb_inputs()) {
        let outcome = evaluate(&inputs, &ScorePolicy::default());
        prop_assert!(outcome.health_score <= 100);
    }

    #[test]
    fn score_never_increases_with_more_critical_findings(
        findings in prop::collection::vec(arb_finding(), 0..8),
        extra in 1usize..5,
    ) {
        let summary = ChecklistSummary { total: 4, passed: 3, ..ChecklistSummary::default() };
        let base = health_score(&summary, &findings, &ScorePolicy::default());

        let mut more = findings;
        for i in 0..extra {
            more.push(Finding {
                id: format!("crit{i}"),
                severity: Severity::Critical,
                category: Category::Security,
                message: "generated".to_string(),
                file_path: RepoPath::new("src/lib.rs"),
                line_number: None,
                suggestion: None,
            });
        }
        let worse = health_score(&summary, &more, &ScorePolicy::default());
        prop_assert!(worse <= base);
    }

    #[test]
    fn audit_groups_conserve_findings(findings in prop::collection::vec(arb_finding(), 0..16)) {
        let report = build_report(&findings);
        let group_total: usize = report.groups.iter().map(|g| g.items.len()).sum();
        prop_assert_eq!(group_total, findings.len());
        prop_assert_eq!(report.counts.by_severity.total() as usize, findings.len());
        let category_total: u32 = report.counts.by_category.values().sum();
        prop_assert_eq!(category_total as usize, findings.len());
    }

    #[test]
    fn audit_items_are_severity_ordered(findings in prop::collection::vec(arb_finding(), 0..16)) {
        let report = build_report(&findings);
        for group in &report.groups {
            for pair in group.items.windows(2) {
                prop_assert!(pair[0].severity.rank() <= pair[1].severity.rank());
            }
        }
    }

    #[test]
    fn pending_items_never_lower_the_score(
        summary in (0u32..8, 0u32..8).prop_map(|(passed, failed)| ChecklistSummary {
            total: passed + failed,
            passed,
            failed,
            ..ChecklistSummary::default()
        }),
        extra_pending in 1u32..8,
    ) {
        let base = health_score(&summary, &[], &ScorePolicy::default());
        let with_pending = ChecklistSummary {
            total: summary.total + extra_pending,
            pending: extra_pending,
            ..summary
        };
        prop_assert_eq!(health_score(&with_pending, &[], &ScorePolicy::default()), base);
    }

    #[test]
    fn evaluation_is_deterministic(inputs in arb_inputs()) {
        let first = evaluate(&inputs, &ScorePolicy::default());
        let second = evaluate(&inputs, &ScorePolicy::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unlinked_items_are_always_pending_or_skipped(
        mut item in arb_item(),
        findings in prop::collection::vec(arb_finding(), 0..4),
    ) {
        item.linked_test_ids.clear();
        let inputs = UnitInputs {
            checklist: vec![item.clone()],
            test_results: Vec::new(),
            findings,
        };
        let outcome = evaluate(&inputs, &ScorePolicy::default());
        if item.skipped {
            prop_assert_eq!(outcome.checklist.skipped, 1);
        } else {
            prop_assert_eq!(outcome.checklist.pending, 1);
        }
    }
}
