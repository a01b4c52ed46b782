#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl RenderableSeverity {
    pub fn tag(self) -> &'static str {
        match self {
            RenderableSeverity::Critical => "CRITICAL",
            RenderableSeverity::High => "HIGH",
            RenderableSeverity::Medium => "MEDIUM",
            RenderableSeverity::Low => "LOW",
            RenderableSeverity::Info => "INFO",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Validated,
    Failed,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub message: String,
    pub path: String,
    pub line: Option<u32>,
    pub suggestion: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableGroup {
    pub label: String,
    pub items: Vec<RenderableFinding>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderableChecklist {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub pending: u32,
    pub skipped: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    /// Total count of degraded input records (unknown refs + malformed).
    pub diagnostics_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub unit_id: String,
    pub status: RenderableStatus,
    pub health_score: u8,
    pub checklist: RenderableChecklist,
    pub groups: Vec<RenderableGroup>,
    pub data: RenderableData,
}
