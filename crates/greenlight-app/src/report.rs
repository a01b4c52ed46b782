use anyhow::Context;
use greenlight_render::{
    RenderableChecklist, RenderableData, RenderableFinding, RenderableGroup, RenderableReport,
    RenderableSeverity, RenderableStatus,
};
use greenlight_types::{Finding, OverallStatus, Severity, ValidationReport, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<ValidationReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse greenlight v1 report")
}

pub fn serialize_report(report: &ValidationReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ValidationReport) -> RenderableReport {
    let diagnostics = &report.data.diagnostics;
    RenderableReport {
        unit_id: report.unit_id.to_string(),
        status: match report.status {
            OverallStatus::Validated => RenderableStatus::Validated,
            OverallStatus::Failed => RenderableStatus::Failed,
            OverallStatus::Pending => RenderableStatus::Pending,
        },
        health_score: report.health_score,
        checklist: RenderableChecklist {
            total: report.checklist.total,
            passed: report.checklist.passed,
            failed: report.checklist.failed,
            pending: report.checklist.pending,
            skipped: report.checklist.skipped,
        },
        groups: report
            .audit
            .groups
            .iter()
            .map(|group| RenderableGroup {
                label: group.category.label().to_string(),
                items: group.items.iter().map(renderable_finding).collect(),
            })
            .collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            diagnostics_total: diagnostics.unknown_test_refs
                + diagnostics.malformed_items
                + diagnostics.malformed_tests
                + diagnostics.malformed_findings,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Critical => RenderableSeverity::Critical,
            Severity::High => RenderableSeverity::High,
            Severity::Medium => RenderableSeverity::Medium,
            Severity::Low => RenderableSeverity::Low,
            Severity::Info => RenderableSeverity::Info,
        },
        message: f.message.clone(),
        path: f.file_path.as_str().to_string(),
        line: f.line_number,
        suggestion: f.suggestion.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report_json() -> String {
        r#"{
            "schema": "greenlight.report.v1",
            "tool": {"name": "greenlight", "version": "0.0.0"},
            "computed_at": "2026-01-15T10:30:00Z",
            "unit_id": "quantum/core#42",
            "status": "failed",
            "health_score": 57,
            "checklist": {"total": 3, "passed": 2, "failed": 1, "pending": 0, "skipped": 0},
            "audit": {
                "counts": {
                    "by_severity": {"critical": 1, "high": 0, "medium": 0, "low": 0, "info": 0},
                    "by_category": {"security": 1}
                },
                "groups": [{
                    "category": "security",
                    "items": [{
                        "id": "ch1",
                        "severity": "critical",
                        "category": "security",
                        "message": "Hardcoded credential in config loader",
                        "file_path": "src/config/loader.ts",
                        "line_number": 27
                    }]
                }]
            },
            "fingerprint": "abc123",
            "data": {
                "profile": "strict",
                "items_total": 3,
                "tests_seen": 2,
                "findings_total": 1,
                "diagnostics": {
                    "unknown_test_refs": 1,
                    "malformed_items": 0,
                    "malformed_tests": 0,
                    "malformed_findings": 0
                }
            }
        }"#
        .to_string()
    }

    #[test]
    fn parse_round_trips_through_serialize() {
        let report = parse_report_json(&sample_report_json()).unwrap();
        let bytes = serialize_report(&report).unwrap();
        let again = parse_report_json(std::str::from_utf8(&bytes).unwrap()).unwrap();
        assert_eq!(report, again);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema": "somebody.else.v9"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn to_renderable_maps_labels_and_totals() {
        let report = parse_report_json(&sample_report_json()).unwrap();
        let renderable = to_renderable(&report);

        assert_eq!(renderable.unit_id, "quantum/core#42");
        assert_eq!(renderable.status, RenderableStatus::Failed);
        assert_eq!(renderable.groups.len(), 1);
        assert_eq!(renderable.groups[0].label, "Security");
        assert_eq!(
            renderable.groups[0].items[0].severity,
            RenderableSeverity::Critical
        );
        assert_eq!(renderable.data.diagnostics_total, 1);
    }
}
