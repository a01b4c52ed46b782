//! Audit reporting: partition findings by category and order by severity.

use greenlight_types::{AuditCounts, AuditGroup, AuditReport, Finding, SeverityCounts};
use std::collections::BTreeMap;

/// Build the category-grouped, severity-ordered audit report.
///
/// Ordering contract:
/// - groups appear in first-appearance order of their category in the input
///   sequence (not alphabetically), mirroring collector output
/// - items within a group are sorted by severity rank ascending; ties keep
///   the original insertion order (never message text)
/// - `counts.by_severity` enumerates every severity value, including zeros
///
/// Total over any well-formed finding sequence; empty input yields empty
/// groups and zero-filled counts.
pub fn build_report(findings: &[Finding]) -> AuditReport {
    let mut groups: Vec<AuditGroup> = Vec::new();
    let mut by_category: BTreeMap<_, u32> = BTreeMap::new();

    for finding in findings {
        *by_category.entry(finding.category).or_insert(0) += 1;
        match groups.iter_mut().find(|g| g.category == finding.category) {
            Some(group) => group.items.push(finding.clone()),
            None => groups.push(AuditGroup {
                category: finding.category,
                items: vec![finding.clone()],
            }),
        }
    }

    // Stable sort preserves insertion order within equal ranks.
    for group in &mut groups {
        group.items.sort_by_key(|f| f.severity.rank());
    }

    AuditReport {
        counts: AuditCounts {
            by_severity: SeverityCounts::from_findings(findings),
            by_category,
        },
        groups,
    }
}
