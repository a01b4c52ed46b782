use crate::model::UnitInputs;
use greenlight_types::{Category, ChecklistItem, Finding, RepoPath, Severity, TestResult, TestStatus};

pub fn item(id: &str, required: bool, linked: &[&str]) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        text: format!("criterion {id}"),
        required,
        linked_test_ids: linked.iter().map(|s| s.to_string()).collect(),
        skipped: false,
    }
}

pub fn item_skipped(id: &str, linked: &[&str]) -> ChecklistItem {
    ChecklistItem {
        skipped: true,
        ..item(id, false, linked)
    }
}

pub fn test_result(test_id: &str, status: TestStatus) -> TestResult {
    TestResult {
        test_id: test_id.to_string(),
        name: format!("suite.case.{test_id}"),
        status,
        duration_ms: 100,
        linked_checklist_ids: Vec::new(),
    }
}

pub fn finding(id: &str, severity: Severity) -> Finding {
    finding_in(id, severity, Category::CodeQuality)
}

pub fn finding_in(id: &str, severity: Severity, category: Category) -> Finding {
    Finding {
        id: id.to_string(),
        severity,
        category,
        message: format!("finding {id}"),
        file_path: RepoPath::new("src/lib.rs"),
        line_number: Some(1),
        suggestion: None,
    }
}

pub fn inputs(
    checklist: Vec<ChecklistItem>,
    test_results: Vec<TestResult>,
    findings: Vec<Finding>,
) -> UnitInputs {
    UnitInputs {
        checklist,
        test_results,
        findings,
    }
}
