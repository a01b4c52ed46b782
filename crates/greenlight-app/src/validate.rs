//! The `validate` use case: evaluate a unit of work and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use greenlight_lifecycle::Registry;
use greenlight_settings::{Overrides, ResolvedConfig};
use greenlight_types::{
    GreenlightData, OverallStatus, ToolMeta, UnitId, ValidationReport, SCHEMA_REPORT_V1,
};

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Identity of the unit of work, e.g. `quantum/core#42`.
    pub unit_id: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Checklist document path.
    pub checklist: &'a Utf8Path,
    /// Test-result document path, if any.
    pub test_results: Option<&'a Utf8Path>,
    /// Findings document path, if any.
    pub findings: Option<&'a Utf8Path>,
}

/// Output from the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateOutput {
    /// The generated report.
    pub report: ValidationReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the validate use case: resolve config, load inputs, compute the
/// validation result, produce the report envelope.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        greenlight_settings::GreenlightConfigV1::default()
    } else {
        greenlight_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = greenlight_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let parsed =
        greenlight_inputs::load_inputs(input.checklist, input.test_results, input.findings)
            .context("load inputs")?;

    let unit_id = UnitId::new(input.unit_id);
    let items_total = parsed.inputs.checklist.len() as u32;
    let tests_seen = parsed.inputs.test_results.len() as u32;
    let findings_total = parsed.inputs.findings.len() as u32;

    let registry = Registry::new(resolved.effective.clone());
    let result = registry
        .validate(&unit_id, parsed.inputs)
        .context("compute validation")?;

    let mut diagnostics = parsed.diagnostics;
    diagnostics.merge(&result.diagnostics);

    let report = ValidationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "greenlight".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        computed_at: result.computed_at,
        unit_id,
        status: result.overall_status,
        health_score: result.health_score,
        checklist: result.checklist_summary,
        audit: result.audit_report,
        fingerprint: result.inputs_fingerprint,
        data: GreenlightData {
            profile: resolved.profile.clone(),
            items_total,
            tests_seen,
            findings_total,
            diagnostics,
        },
    };

    Ok(ValidateOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map overall status to exit code: 0 = validated/pending, 2 = failed.
pub fn status_exit_code(status: OverallStatus) -> i32 {
    match status {
        OverallStatus::Validated => 0,
        OverallStatus::Pending => 0,
        OverallStatus::Failed => 2,
    }
}
