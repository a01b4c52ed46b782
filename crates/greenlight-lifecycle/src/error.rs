use greenlight_types::{ids, UnitId};
use thiserror::Error;

/// Recoverable lifecycle conditions. None of these should terminate the
/// caller; they are reported, never silently dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// No validation state exists for the unit. Distinct from an empty but
    /// valid result: "no data yet" is not "empty and validated".
    #[error("no validation state for unit '{0}'")]
    NotFound(UnitId),

    /// A validate/revalidate request arrived while the same unit was already
    /// computing. Requests are rejected rather than queued.
    #[error("a computation is already in progress for unit '{0}'")]
    ComputationInProgress(UnitId),
}

impl LifecycleError {
    /// Stable reason code for error payloads.
    pub fn reason(&self) -> &'static str {
        match self {
            LifecycleError::NotFound(_) => ids::REASON_UNIT_NOT_FOUND,
            LifecycleError::ComputationInProgress(_) => ids::REASON_COMPUTATION_IN_PROGRESS,
        }
    }
}
