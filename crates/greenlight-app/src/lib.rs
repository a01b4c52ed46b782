//! Use case orchestration for greenlight.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, inputs, lifecycle, and render layers. It is intentionally thin
//! and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod render;
mod report;
mod validate;

pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{run_annotations, run_markdown, write_report, write_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use validate::{run_validate, status_exit_code, ValidateInput, ValidateOutput};
