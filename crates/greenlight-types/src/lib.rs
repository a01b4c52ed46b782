//! Stable DTOs and IDs used across the greenlight workspace.
//!
//! This crate is intentionally boring:
//! - the validation report envelope and its building blocks
//! - the severity/category taxonomy
//! - stable identifiers and diagnostic reason codes
//! - canonical repo-relative path handling
//! - explain registry for status and reason codes

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod report;
pub mod taxonomy;

pub use explain::{Explanation, lookup_explanation};
pub use path::RepoPath;
pub use report::{
    AuditCounts, AuditGroup, AuditReport, ChecklistItem, ChecklistSummary, Diagnostics, Finding,
    GreenlightData, ItemStatus, OverallStatus, SeverityCounts, TestResult, TestStatus, ToolMeta,
    UnitId, ValidationReport, SCHEMA_REPORT_V1,
};
pub use taxonomy::{Category, Severity};
