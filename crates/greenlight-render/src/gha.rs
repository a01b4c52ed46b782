use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
pub fn render_github_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    let mut out = Vec::new();

    'groups: for group in &report.groups {
        for f in &group.items {
            if out.len() >= max {
                break 'groups;
            }

            let level = match f.severity {
                RenderableSeverity::Critical | RenderableSeverity::High => "error",
                RenderableSeverity::Medium => "warning",
                RenderableSeverity::Low | RenderableSeverity::Info => "notice",
            };

            let mut meta = format!("file={}", f.path);
            if let Some(line) = f.line {
                meta.push_str(&format!(",line={}", line));
            }

            let message = format!("[{}] {}", group.label, f.message)
                .replace('%', "%25")
                .replace('\r', "%0D")
                .replace('\n', "%0A");

            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}
