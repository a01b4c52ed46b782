use greenlight_types::{ChecklistItem, Finding, TestResult};
use std::collections::BTreeMap;

/// Everything the engine needs to evaluate one unit of work.
///
/// Items are ordered (display order of the checklist); order is irrelevant
/// for aggregation. Test results and findings are facts produced by external
/// collaborators and consumed read-only.
#[derive(Clone, Debug, Default)]
pub struct UnitInputs {
    pub checklist: Vec<ChecklistItem>,
    pub test_results: Vec<TestResult>,
    pub findings: Vec<Finding>,
}

impl UnitInputs {
    /// Index test results by id for linkage resolution.
    ///
    /// Duplicate test ids keep the last occurrence, matching how a re-run
    /// supersedes an earlier result in the same batch.
    pub fn tests_by_id(&self) -> BTreeMap<&str, &TestResult> {
        self.test_results
            .iter()
            .map(|t| (t.test_id.as_str(), t))
            .collect()
    }
}
