//! CLI entry point for greenlight.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `greenlight-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use greenlight_app::{
    parse_report_json, run_annotations, run_explain, run_markdown, run_validate, status_exit_code,
    to_renderable, write_report, write_text, ExplainOutput, ValidateInput,
};
use greenlight_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "greenlight",
    version,
    about = "Validation and health scoring for PR/issue units of work"
)]
struct Cli {
    /// Path to greenlight config TOML.
    #[arg(long, default_value = "greenlight.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a unit of work and write the validation report.
    Validate {
        /// Identity of the unit of work, e.g. "owner/repo#42".
        #[arg(long)]
        unit: String,

        /// Path to the checklist document (JSON array).
        #[arg(long)]
        checklist: Utf8PathBuf,

        /// Path to the test-result document (JSON array).
        #[arg(long)]
        tests: Option<Utf8PathBuf>,

        /// Path to the findings document (JSON array).
        #[arg(long)]
        findings: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/greenlight/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/greenlight/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/greenlight/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/greenlight/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit (default 10, per GHA best practices).
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a status or diagnostic reason code with remediation guidance.
    Explain {
        /// The status (e.g., "unit.validated") or reason (e.g., "unknown_test_ref") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate {
            ref unit,
            ref checklist,
            ref tests,
            ref findings,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_validate(
            &cli,
            unit,
            checklist,
            tests.as_deref(),
            findings.as_deref(),
            report_out,
            write_markdown,
            markdown_out,
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_validate(
    cli: &Cli,
    unit: &str,
    checklist: &camino::Utf8Path,
    tests: Option<&camino::Utf8Path>,
    findings: Option<&camino::Utf8Path>,
    report_out: &camino::Utf8Path,
    write_markdown: bool,
    markdown_out: &camino::Utf8Path,
) -> anyhow::Result<()> {
    // Load config if present; missing file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let overrides = Overrides {
        profile: cli.profile.clone(),
    };

    let output = run_validate(ValidateInput {
        unit_id: unit,
        config_text: &cfg_text,
        overrides,
        checklist,
        test_results: tests,
        findings,
    })?;

    write_report(report_out, &output.report).context("write report json")?;

    if write_markdown {
        let renderable = to_renderable(&output.report);
        let md = run_markdown(&renderable);
        write_text(markdown_out, &md).context("write markdown")?;
    }

    let code = status_exit_code(output.report.status);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = run_markdown(&renderable);

    if let Some(out_path) = output {
        write_text(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let annotations = run_annotations(&renderable, max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", greenlight_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", greenlight_app::format_not_found(&identifier, available));
            std::process::exit(1);
        }
    }
}
