use crate::{RenderableReport, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Greenlight report\n\n");
    let status = match report.status {
        RenderableStatus::Validated => "VALIDATED",
        RenderableStatus::Failed => "FAILED",
        RenderableStatus::Pending => "PENDING",
    };
    out.push_str(&format!(
        "- Unit: `{}`\n- Status: **{}**\n- Health score: **{}/100**\n",
        report.unit_id, status, report.health_score
    ));

    let c = &report.checklist;
    out.push_str(&format!(
        "- Checklist: {} passed / {} failed / {} pending / {} skipped (of {})\n\n",
        c.passed, c.failed, c.pending, c.skipped, c.total
    ));

    if report.data.diagnostics_total > 0 {
        out.push_str(&format!(
            "> Note: {} input record(s) were malformed or dangling and did not block validation.\n\n",
            report.data.diagnostics_total
        ));
    }

    if report.groups.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for group in &report.groups {
        out.push_str(&format!("### {}\n\n", group.label));
        for f in &group.items {
            if let Some(line) = f.line {
                out.push_str(&format!(
                    "- [{}] {} (`{}`:{})\n",
                    f.severity.tag(),
                    f.message,
                    f.path,
                    line
                ));
            } else {
                out.push_str(&format!(
                    "- [{}] {} (`{}`)\n",
                    f.severity.tag(),
                    f.message,
                    f.path
                ));
            }
            if let Some(suggestion) = &f.suggestion {
                out.push_str(&format!("  - suggestion: {}\n", suggestion));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableChecklist, RenderableData, RenderableFinding, RenderableGroup,
        RenderableSeverity,
    };

    fn empty_report() -> RenderableReport {
        RenderableReport {
            unit_id: "quantum/core#42".to_string(),
            status: RenderableStatus::Validated,
            health_score: 100,
            checklist: RenderableChecklist::default(),
            groups: Vec::new(),
            data: RenderableData {
                profile: "strict".to_string(),
                diagnostics_total: 0,
            },
        }
    }

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&empty_report());
        assert!(md.contains("Status: **VALIDATED**"));
        assert!(md.contains("Health score: **100/100**"));
        assert!(md.contains("No findings."));
        assert!(!md.contains("> Note:"));
    }

    #[test]
    fn renders_grouped_findings_with_suggestion_and_diagnostics() {
        let mut report = empty_report();
        report.status = RenderableStatus::Failed;
        report.health_score = 40;
        report.checklist = RenderableChecklist {
            total: 3,
            passed: 1,
            failed: 1,
            pending: 1,
            skipped: 0,
        };
        report.data.diagnostics_total = 2;
        report.groups = vec![RenderableGroup {
            label: "Security".to_string(),
            items: vec![RenderableFinding {
                severity: RenderableSeverity::Critical,
                message: "Consider rate limiting on login endpoint".to_string(),
                path: "src/auth/controller.ts".to_string(),
                line: Some(45),
                suggestion: Some("Add rate limiting middleware".to_string()),
            }],
        }];

        let md = render_markdown(&report);
        assert!(md.contains("Status: **FAILED**"));
        assert!(md.contains("1 passed / 1 failed / 1 pending / 0 skipped (of 3)"));
        assert!(md.contains("> Note: 2 input record(s)"));
        assert!(md.contains("### Security"));
        assert!(md.contains("[CRITICAL] Consider rate limiting on login endpoint"));
        assert!(md.contains("`src/auth/controller.ts`:45"));
        assert!(md.contains("suggestion: Add rate limiting middleware"));
    }

    #[test]
    fn finding_without_line_renders_path_only() {
        let mut report = empty_report();
        report.groups = vec![RenderableGroup {
            label: "Documentation".to_string(),
            items: vec![RenderableFinding {
                severity: RenderableSeverity::Info,
                message: "README outdated".to_string(),
                path: "README.md".to_string(),
                line: None,
                suggestion: None,
            }],
        }];
        let md = render_markdown(&report);
        assert!(md.contains("[INFO] README outdated (`README.md`)"));
    }
}
