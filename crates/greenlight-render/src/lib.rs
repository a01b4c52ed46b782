//! Rendering utilities for CI surfaces (Markdown, GitHub annotations).
//!
//! Renderers work on a small view model decoupled from the protocol types,
//! so rendering never depends on envelope evolution.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableChecklist, RenderableData, RenderableFinding, RenderableGroup, RenderableReport,
    RenderableSeverity, RenderableStatus,
};
