//! Render use cases: markdown and GitHub annotations from in-memory reports.

use anyhow::Context;
use camino::Utf8Path;
use greenlight_render::RenderableReport;
use greenlight_types::ValidationReport;

pub fn run_markdown(report: &RenderableReport) -> String {
    greenlight_render::render_markdown(report)
}

pub fn run_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    greenlight_render::render_github_annotations(report, max)
}

pub fn write_report(path: &Utf8Path, report: &ValidationReport) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let bytes = crate::serialize_report(report)?;
    std::fs::write(path, bytes).with_context(|| format!("write report: {path}"))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))
}

fn ensure_parent(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenlight_render::{
        RenderableChecklist, RenderableData, RenderableFinding, RenderableGroup,
        RenderableSeverity, RenderableStatus,
    };

    fn sample_report() -> RenderableReport {
        RenderableReport {
            unit_id: "quantum/core#42".to_string(),
            status: RenderableStatus::Failed,
            health_score: 57,
            checklist: RenderableChecklist {
                total: 3,
                passed: 2,
                failed: 1,
                pending: 0,
                skipped: 0,
            },
            groups: vec![RenderableGroup {
                label: "Security".to_string(),
                items: vec![
                    RenderableFinding {
                        severity: RenderableSeverity::Critical,
                        message: "Hardcoded credential in config loader".to_string(),
                        path: "src/config/loader.ts".to_string(),
                        line: Some(27),
                        suggestion: None,
                    },
                    RenderableFinding {
                        severity: RenderableSeverity::Low,
                        message: "Unused import".to_string(),
                        path: "src/util.ts".to_string(),
                        line: None,
                        suggestion: Some("Remove it".to_string()),
                    },
                ],
            }],
            data: RenderableData {
                profile: "strict".to_string(),
                diagnostics_total: 0,
            },
        }
    }

    #[test]
    fn run_annotations_respects_max() {
        let report = sample_report();
        let annotations = run_annotations(&report, 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn run_markdown_smoke() {
        let report = sample_report();
        let markdown = run_markdown(&report);
        assert!(markdown.contains("quantum/core#42"));
    }

    #[test]
    fn write_text_creates_the_file() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = camino::Utf8PathBuf::from_path_buf(tmp.path().join("out.md")).expect("utf8");
        write_text(&path, "# Greenlight report\n").expect("write");
        let back = std::fs::read_to_string(&path).expect("read");
        assert!(back.starts_with("# Greenlight report"));
    }
}
