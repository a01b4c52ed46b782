use crate::taxonomy::{Category, Severity};
use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for the greenlight validation report.
pub const SCHEMA_REPORT_V1: &str = "greenlight.report.v1";

/// Identity of a unit of work (an issue or a pull request).
///
/// The display form is `owner/repo#number`, but the engine treats it as an
/// opaque key.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived status of a checklist item. Never supplied by callers; the
/// aggregator is the only writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Passed,
    Failed,
    Skipped,
}

/// Outcome of one automated test run, supplied by the test-execution
/// collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Errored,
}

/// One required/optional criterion on a unit's checklist.
///
/// The `status` field of the source data model is deliberately absent here:
/// it is derived by the aggregator from `linked_test_ids`, never carried as
/// input state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub required: bool,
    #[serde(default)]
    pub linked_test_ids: Vec<String>,
    /// Set by the checklist-generation service when a criterion was waived.
    #[serde(default)]
    pub skipped: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TestResult {
    pub test_id: String,
    pub name: String,
    pub status: TestStatus,
    pub duration_ms: u64,
    #[serde(default)]
    pub linked_checklist_ids: Vec<String>,
}

/// A static-analysis observation. Immutable once created; consumed read-only
/// by the scorer and the audit reporter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub id: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub file_path: RepoPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Counts of checklist items by derived status. `total` counts every item
/// regardless of `required`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub pending: u32,
    pub skipped: u32,
}

/// Overall validation verdict for a unit of work. Derived, never set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Validated,
    Failed,
    Pending,
}

/// One count per severity value, zero-filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub info: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            counts.bump(f.severity);
        }
        counts
    }

    pub fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::Info => self.info += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditCounts {
    pub by_severity: SeverityCounts,
    pub by_category: BTreeMap<Category, u32>,
}

/// Findings of one category, in severity-rank order (ties keep input order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditGroup {
    pub category: Category,
    pub items: Vec<Finding>,
}

/// Severity/category-partitioned view over all findings of a unit.
///
/// Groups are ordered by first appearance of their category in the input
/// sequence so the report mirrors collector output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    pub counts: AuditCounts,
    pub groups: Vec<AuditGroup>,
}

/// Degrade-don't-throw bookkeeping: malformed or dangling input records are
/// counted here instead of aborting the computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostics {
    /// Checklist items referencing a test id never supplied.
    pub unknown_test_refs: u32,
    pub malformed_items: u32,
    pub malformed_tests: u32,
    pub malformed_findings: u32,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        *self == Diagnostics::default()
    }

    pub fn merge(&mut self, other: &Diagnostics) {
        self.unknown_test_refs += other.unknown_test_refs;
        self.malformed_items += other.malformed_items;
        self.malformed_tests += other.malformed_tests;
        self.malformed_findings += other.malformed_findings;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Greenlight-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GreenlightData {
    pub profile: String,

    pub items_total: u32,
    pub tests_seen: u32,
    pub findings_total: u32,

    pub diagnostics: Diagnostics,
}

/// The emitted validation report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub computed_at: OffsetDateTime,

    pub unit_id: UnitId,
    pub status: OverallStatus,
    pub health_score: u8,
    pub checklist: ChecklistSummary,
    pub audit: AuditReport,

    /// Stable SHA-256 over the unit's inputs; identical inputs yield an
    /// identical fingerprint across recomputations.
    pub fingerprint: String,

    pub data: GreenlightData,
}
