//! Stateful validation lifecycle: one supersedable cached result per unit of
//! work, with a revalidation protocol that is safe to re-run.
//!
//! The pure evaluation lives in `greenlight-domain`; this crate owns the
//! mapping from unit id to cached [`ValidationResult`] and enforces the
//! single-flight rule: at most one in-flight computation per unit, with no
//! global lock across units.

#![forbid(unsafe_code)]

mod error;
mod registry;

pub use error::LifecycleError;
pub use registry::{LifecycleState, Registry, ValidationResult};
