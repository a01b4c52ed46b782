use anyhow::Context;
use greenlight_domain::model::UnitInputs;
use greenlight_types::{ChecklistItem, Diagnostics, Finding, TestResult};
use serde_json::Value;

/// A unit's inputs plus the parse-level diagnostics collected on the way in.
#[derive(Clone, Debug)]
pub struct ParsedInputs {
    pub inputs: UnitInputs,
    pub diagnostics: Diagnostics,
}

/// Parse a checklist document: a JSON array of checklist items.
///
/// Records that fail to decode are skipped and counted; the document itself
/// must be a JSON array.
pub fn parse_checklist(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> anyhow::Result<Vec<ChecklistItem>> {
    let records = top_level_array(text).context("checklist document")?;
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<ChecklistItem>(record) {
            Ok(item) => items.push(item),
            Err(_) => diagnostics.malformed_items += 1,
        }
    }
    Ok(items)
}

/// Parse a test-result document: a JSON array of test results.
pub fn parse_test_results(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> anyhow::Result<Vec<TestResult>> {
    let records = top_level_array(text).context("test-result document")?;
    let mut results = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<TestResult>(record) {
            Ok(result) => results.push(result),
            Err(_) => diagnostics.malformed_tests += 1,
        }
    }
    Ok(results)
}

/// Parse a findings document: a JSON array of findings.
///
/// A finding with missing required fields (or an unknown severity/category
/// tag) is skipped from scoring but still surfaces in the diagnostics count.
pub fn parse_findings(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> anyhow::Result<Vec<Finding>> {
    let records = top_level_array(text).context("findings document")?;
    let mut findings = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<Finding>(record) {
            Ok(finding) => findings.push(finding),
            Err(_) => diagnostics.malformed_findings += 1,
        }
    }
    Ok(findings)
}

fn top_level_array(text: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;
    match value {
        Value::Array(records) => Ok(records),
        other => anyhow::bail!("expected a JSON array, got {}", type_name(&other)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenlight_types::{Category, Severity};

    #[test]
    fn malformed_finding_is_counted_not_fatal() {
        let text = r#"[
            {"id":"ch1","severity":"medium","category":"security",
             "message":"Consider rate limiting","file_path":"src/auth/controller.ts"},
            {"id":"ch2","severity":"not-a-severity","category":"security",
             "message":"broken","file_path":"x"},
            {"id":"ch3"}
        ]"#;
        let mut diagnostics = Diagnostics::default();
        let findings = parse_findings(text, &mut diagnostics).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Medium);
        assert_eq!(findings[0].category, Category::Security);
        assert_eq!(diagnostics.malformed_findings, 2);
    }

    #[test]
    fn malformed_item_and_test_records_are_counted() {
        let mut diagnostics = Diagnostics::default();
        let items = parse_checklist(
            r#"[{"id":"c1","text":"t","required":true}, {"required":"yes"}]"#,
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(diagnostics.malformed_items, 1);

        let tests = parse_test_results(
            r#"[{"test_id":"t1","name":"n","status":"errored","duration_ms":5}, 42]"#,
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(diagnostics.malformed_tests, 1);
    }

    #[test]
    fn non_array_top_level_is_a_hard_error() {
        let mut diagnostics = Diagnostics::default();
        assert!(parse_checklist(r#"{"items":[]}"#, &mut diagnostics).is_err());
        assert!(parse_findings("not json", &mut diagnostics).is_err());
    }

    #[test]
    fn empty_documents_parse_to_empty() {
        let mut diagnostics = Diagnostics::default();
        assert!(parse_checklist("[]", &mut diagnostics).unwrap().is_empty());
        assert!(parse_test_results("[]", &mut diagnostics).unwrap().is_empty());
        assert!(parse_findings("[]", &mut diagnostics).unwrap().is_empty());
        assert!(diagnostics.is_empty());
    }
}
