//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use greenlight_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            // Fallback: assume we're in xtask dir or use current dir
            std::env::current_dir().expect("Cannot determine current directory")
        });

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the ValidationReport schema.
fn generate_report_schema() -> schemars::Schema {
    schema_for!(greenlight_types::ValidationReport)
}

/// Generate the GreenlightConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(greenlight_settings::GreenlightConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "greenlight.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "greenlight.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
/// Returns Ok(()) if all schemas match, Err otherwise.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut all_match = true;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            all_match = false;
            continue;
        }

        let schema = (spec.generate)();
        let expected = serialize_schema(&schema)?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
            all_match = false;
        }
    }

    if all_match {
        println!("All schemas are up to date.");
        Ok(())
    } else {
        if !missing.is_empty() {
            eprintln!("Missing schemas:");
            for name in &missing {
                eprintln!("  - {}", name);
            }
        }
        if !mismatched.is_empty() {
            eprintln!("Schemas out of date:");
            for name in &mismatched {
                eprintln!("  - {}", name);
            }
        }
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed")
    }
}

/// Run the built greenlight binary on each golden fixture and compare the
/// report output (timestamp/version-normalized) against expected.report.json.
fn check_fixtures() -> anyhow::Result<()> {
    let greenlight_bin = project_root()
        .join("target")
        .join("debug")
        .join("greenlight");

    #[cfg(target_os = "windows")]
    let greenlight_bin = greenlight_bin.with_extension("exe");

    if !greenlight_bin.exists() {
        bail!(
            "greenlight binary not found at {}.\n\
            Run `cargo build -p greenlight-cli` first.",
            greenlight_bin.display()
        );
    }

    let fixtures_dir = project_root().join("tests").join("fixtures");
    let mut checked = 0;
    let mut errors = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).context("Failed to read tests/fixtures/")? {
        let entry = entry?;
        let fixture_dir = entry.path();
        if !fixture_dir.is_dir() {
            continue;
        }

        let golden_path = fixture_dir.join("expected.report.json");
        if !golden_path.exists() {
            continue;
        }

        let fixture_name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let golden_content = fs::read_to_string(&golden_path)?;
        let golden_value: serde_json::Value = serde_json::from_str(&golden_content)
            .with_context(|| format!("Failed to parse golden file for '{}'", fixture_name))?;
        let unit_id = golden_value
            .get("unit_id")
            .and_then(|v| v.as_str())
            .unwrap_or("golden/fixture#0")
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&greenlight_bin)
            .args([
                "validate",
                "--unit",
                &unit_id,
                "--checklist",
                fixture_dir.join("checklist.json").to_str().unwrap_or_default(),
                "--tests",
                fixture_dir.join("tests.json").to_str().unwrap_or_default(),
                "--findings",
                fixture_dir.join("findings.json").to_str().unwrap_or_default(),
                "--report-out",
                report_out.to_str().unwrap_or_default(),
            ])
            .output()
            .with_context(|| format!("Failed to run greenlight on fixture '{}'", fixture_name))?;

        // Exit 2 means the unit failed validation; the report is still written.
        let code = output.status.code().unwrap_or(-1);
        if code != 0 && code != 2 {
            errors.push(format!(
                "fixture '{}': greenlight exited with {:?}: {}",
                fixture_name,
                code,
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        if !report_out.exists() {
            errors.push(format!(
                "fixture '{}': no report output generated",
                fixture_name
            ));
            continue;
        }

        let report_content = fs::read_to_string(&report_out)?;
        let report_value: serde_json::Value = serde_json::from_str(&report_content)
            .with_context(|| format!("Failed to parse report for fixture '{}'", fixture_name))?;

        let normalized_report = normalize_nondeterministic(report_value);
        let normalized_golden = normalize_nondeterministic(golden_value);

        if normalized_report != normalized_golden {
            errors.push(format!(
                "fixture '{}': output differs from golden file expected.report.json",
                fixture_name
            ));
        } else {
            println!("  ✓ fixture '{}' matches golden report", fixture_name);
        }
        checked += 1;
    }

    if checked == 0 {
        bail!("No golden fixtures found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nFixture check errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Fixture check failed with {} errors", errors.len());
    }

    println!("\n✓ All {} golden fixtures match!", checked);
    Ok(())
}

/// Validate that all status and reason identifiers have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let identifiers = greenlight_types::explain::all_identifiers();

    let mut errors = Vec::new();

    for id in identifiers {
        match greenlight_types::explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Identifier '{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Identifier '{}' has empty description", id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Identifier '{}' has empty remediation", id));
                }
            }
            None => {
                errors.push(format!("Identifier '{}' has no explanation", id));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} identifiers have explanations", identifiers.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  check-fixtures    Run the greenlight binary against golden fixtures");
    eprintln!("  explain-coverage  Validate all status and reason codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
