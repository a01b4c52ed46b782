//! Checklist aggregation: derive item statuses from linked test outcomes and
//! roll them into coverage counts.

use greenlight_types::{ChecklistItem, ChecklistSummary, Diagnostics, ItemStatus, TestResult, TestStatus};
use std::collections::BTreeMap;

/// Derive the status of one checklist item from its linked test results.
///
/// - no linked tests: `pending` (no evidence yet)
/// - a linked id missing from `tests_by_id` is treated as not-yet-run; it is
///   tallied in `diagnostics.unknown_test_refs` and keeps the item from
///   being `passed`, but never makes it `failed` on its own
/// - every linked test passed: `passed`
/// - any linked test failed or errored: `failed`
/// - otherwise: `pending`
///
/// Items waived by the checklist-generation service are `skipped` regardless
/// of linkage.
pub fn compute_status(
    item: &ChecklistItem,
    tests_by_id: &BTreeMap<&str, &TestResult>,
    diagnostics: &mut Diagnostics,
) -> ItemStatus {
    if item.skipped {
        return ItemStatus::Skipped;
    }
    if item.linked_test_ids.is_empty() {
        return ItemStatus::Pending;
    }

    let mut all_passed = true;
    let mut any_failed = false;
    for test_id in &item.linked_test_ids {
        match tests_by_id.get(test_id.as_str()) {
            Some(test) => match test.status {
                TestStatus::Passed => {}
                TestStatus::Failed | TestStatus::Errored => {
                    all_passed = false;
                    any_failed = true;
                }
            },
            None => {
                diagnostics.unknown_test_refs += 1;
                all_passed = false;
            }
        }
    }

    if all_passed {
        ItemStatus::Passed
    } else if any_failed {
        ItemStatus::Failed
    } else {
        ItemStatus::Pending
    }
}

/// One pass over the checklist: status counts plus the flags that decide
/// whether required items block validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregation {
    pub summary: ChecklistSummary,
    /// At least one required item derived `failed`.
    pub required_failed: bool,
    /// At least one required item is still `pending`.
    pub required_unresolved: bool,
}

/// Derive every item's status once and roll up counts and blocking flags.
/// `total` is the item count regardless of `required`; a non-required item
/// counts the same as a required one in the summary.
pub fn aggregate(
    checklist: &[ChecklistItem],
    tests_by_id: &BTreeMap<&str, &TestResult>,
    diagnostics: &mut Diagnostics,
) -> Aggregation {
    let mut agg = Aggregation {
        summary: ChecklistSummary {
            total: checklist.len() as u32,
            ..ChecklistSummary::default()
        },
        ..Aggregation::default()
    };
    for item in checklist {
        let status = compute_status(item, tests_by_id, diagnostics);
        match status {
            ItemStatus::Passed => agg.summary.passed += 1,
            ItemStatus::Failed => agg.summary.failed += 1,
            ItemStatus::Pending => agg.summary.pending += 1,
            ItemStatus::Skipped => agg.summary.skipped += 1,
        }
        if item.required {
            match status {
                ItemStatus::Failed => agg.required_failed = true,
                ItemStatus::Pending => agg.required_unresolved = true,
                // A waived criterion never blocks validation.
                ItemStatus::Passed | ItemStatus::Skipped => {}
            }
        }
    }
    agg
}

/// Count items by derived status.
pub fn summarize(
    checklist: &[ChecklistItem],
    tests_by_id: &BTreeMap<&str, &TestResult>,
    diagnostics: &mut Diagnostics,
) -> ChecklistSummary {
    aggregate(checklist, tests_by_id, diagnostics).summary
}
