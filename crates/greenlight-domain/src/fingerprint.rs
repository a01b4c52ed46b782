use crate::model::UnitInputs;
use greenlight_types::TestStatus;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a unit's inputs.
///
/// Identity fields:
/// - each checklist item's id, required flag, skipped flag, and linked ids
/// - each test result's id and status
/// - each finding's id, severity, category, and path
///
/// Names, messages, durations, and suggestions are excluded: they don't
/// change the verdict, so cosmetic edits don't churn the fingerprint.
pub fn fingerprint_inputs(inputs: &UnitInputs) -> String {
    let mut canonical = String::new();

    for item in &inputs.checklist {
        canonical.push_str("item|");
        canonical.push_str(&item.id);
        canonical.push('|');
        canonical.push(if item.required { 'r' } else { 'o' });
        canonical.push(if item.skipped { 's' } else { '-' });
        for test_id in &item.linked_test_ids {
            canonical.push('|');
            canonical.push_str(test_id);
        }
        canonical.push('\n');
    }
    for test in &inputs.test_results {
        canonical.push_str("test|");
        canonical.push_str(&test.test_id);
        canonical.push('|');
        canonical.push_str(match test.status {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Errored => "errored",
        });
        canonical.push('\n');
    }
    for finding in &inputs.findings {
        canonical.push_str("finding|");
        canonical.push_str(&finding.id);
        canonical.push('|');
        canonical.push_str(finding.severity.as_str());
        canonical.push('|');
        canonical.push_str(finding.category.label());
        canonical.push('|');
        canonical.push_str(finding.file_path.as_str());
        canonical.push('\n');
    }

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
