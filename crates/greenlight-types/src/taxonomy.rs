//! The closed severity and category taxonomy.
//!
//! Both enums are deliberately closed variant sets (no open string tags) so
//! that match exhaustiveness is checked at compile time. Severity carries a
//! total order via [`Severity::rank`]; categories are a grouping key only.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Finding severity, critical highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Every severity, in rank order.
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    /// Total order over severities: lower rank sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Info => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

/// Domain tag for a finding. Used only for grouping; carries no ordering.
///
/// `Ord` is derived solely so categories can key a `BTreeMap` with a
/// deterministic serialization order. Report grouping never sorts by it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Security,
    CodeQuality,
    AntiPatterns,
    DeadCode,
    Documentation,
    Complexity,
    Performance,
    BestPractices,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Security,
        Category::CodeQuality,
        Category::AntiPatterns,
        Category::DeadCode,
        Category::Documentation,
        Category::Complexity,
        Category::Performance,
        Category::BestPractices,
    ];

    /// Canonical display name, matching the dashboard audit panel.
    pub fn label(self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::CodeQuality => "Code Quality",
            Category::AntiPatterns => "Anti-Patterns",
            Category::DeadCode => "Dead Code",
            Category::Documentation => "Documentation",
            Category::Complexity => "Complexity",
            Category::Performance => "Performance",
            Category::BestPractices => "Best Practices",
        }
    }
}
