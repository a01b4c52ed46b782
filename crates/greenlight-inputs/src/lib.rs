//! Input adapters: read checklist, test-result, and finding documents.
//!
//! This crate is allowed to do filesystem IO. Parsing is lenient per record:
//! a malformed entry is skipped and counted in diagnostics, never raised as
//! an error, so one bad record cannot block validation of the rest of the
//! unit. Only an unreadable file or invalid top-level JSON is a hard error.

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use camino::Utf8Path;
use greenlight_domain::model::UnitInputs;
use greenlight_types::Diagnostics;

pub use parse::{parse_checklist, parse_findings, parse_test_results, ParsedInputs};

/// Read and parse the three input documents for one unit of work.
///
/// `test_results` and `findings` are optional: a unit may be validated with
/// a checklist alone (every item comes out pending).
pub fn load_inputs(
    checklist_path: &Utf8Path,
    test_results_path: Option<&Utf8Path>,
    findings_path: Option<&Utf8Path>,
) -> anyhow::Result<ParsedInputs> {
    let mut diagnostics = Diagnostics::default();

    let checklist_text = std::fs::read_to_string(checklist_path)
        .with_context(|| format!("read checklist: {checklist_path}"))?;
    let checklist = parse_checklist(&checklist_text, &mut diagnostics)
        .with_context(|| format!("parse checklist: {checklist_path}"))?;

    let test_results = match test_results_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read test results: {path}"))?;
            parse_test_results(&text, &mut diagnostics)
                .with_context(|| format!("parse test results: {path}"))?
        }
        None => Vec::new(),
    };

    let findings = match findings_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read findings: {path}"))?;
            parse_findings(&text, &mut diagnostics)
                .with_context(|| format!("parse findings: {path}"))?
        }
        None => Vec::new(),
    };

    Ok(ParsedInputs {
        inputs: UnitInputs {
            checklist,
            test_results,
            findings,
        },
        diagnostics,
    })
}

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a checklist document. **Never panics.**
    pub fn parse_checklist_text(text: &str) -> anyhow::Result<()> {
        let mut diagnostics = Diagnostics::default();
        let _ = parse::parse_checklist(text, &mut diagnostics)?;
        Ok(())
    }

    /// Parse arbitrary text as a test-result document. **Never panics.**
    pub fn parse_test_results_text(text: &str) -> anyhow::Result<()> {
        let mut diagnostics = Diagnostics::default();
        let _ = parse::parse_test_results(text, &mut diagnostics)?;
        Ok(())
    }

    /// Parse arbitrary text as a findings document. **Never panics.**
    pub fn parse_findings_text(text: &str) -> anyhow::Result<()> {
        let mut diagnostics = Diagnostics::default();
        let _ = parse::parse_findings(text, &mut diagnostics)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn loads_all_three_documents() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");

        let checklist = root.join("checklist.json");
        let tests = root.join("tests.json");
        let findings = root.join("findings.json");
        std::fs::write(
            &checklist,
            r#"[{"id":"c1","text":"Unit tests","required":true,"linked_test_ids":["t1"]}]"#,
        )
        .unwrap();
        std::fs::write(
            &tests,
            r#"[{"test_id":"t1","name":"auth.login.success","status":"passed","duration_ms":120}]"#,
        )
        .unwrap();
        std::fs::write(&findings, r#"[]"#).unwrap();

        let parsed = load_inputs(&checklist, Some(&tests), Some(&findings)).unwrap();
        assert_eq!(parsed.inputs.checklist.len(), 1);
        assert_eq!(parsed.inputs.test_results.len(), 1);
        assert!(parsed.inputs.findings.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn missing_optional_documents_default_to_empty() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");

        let checklist = root.join("checklist.json");
        std::fs::write(&checklist, r#"[]"#).unwrap();

        let parsed = load_inputs(&checklist, None, None).unwrap();
        assert!(parsed.inputs.test_results.is_empty());
        assert!(parsed.inputs.findings.is_empty());
    }

    #[test]
    fn unreadable_checklist_is_a_hard_error() {
        let missing = Utf8PathBuf::from("/nonexistent/checklist.json");
        assert!(load_inputs(&missing, None, None).is_err());
    }
}
