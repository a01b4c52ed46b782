use crate::error::LifecycleError;
use greenlight_domain::model::UnitInputs;
use greenlight_domain::policy::ScorePolicy;
use greenlight_domain::{evaluate, Outcome};
use greenlight_types::{
    AuditReport, ChecklistSummary, Diagnostics, OverallStatus, UnitId,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use time::OffsetDateTime;

/// Lifecycle state of a unit's validation.
///
/// Terminal-looking states are not absorbing: new evidence always moves
/// `Validated`/`Failed`/`Pending` to `Stale`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Unvalidated,
    Computing,
    Validated,
    Failed,
    Pending,
    Stale,
}

/// The cached outcome of running the engine once for a unit of work.
///
/// Superseded, never mutated: a recomputation stores a fresh value and the
/// prior one becomes unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub unit_id: UnitId,
    pub checklist_summary: ChecklistSummary,
    pub overall_status: OverallStatus,
    pub health_score: u8,
    pub audit_report: AuditReport,
    pub diagnostics: Diagnostics,
    pub inputs_fingerprint: String,
    pub computed_at: OffsetDateTime,
}

#[derive(Debug)]
struct UnitSlot {
    inputs: UnitInputs,
    state: LifecycleState,
    result: Option<ValidationResult>,
}

impl UnitSlot {
    fn empty() -> Self {
        UnitSlot {
            inputs: UnitInputs::default(),
            state: LifecycleState::Unvalidated,
            result: None,
        }
    }
}

/// Per-unit validation store.
///
/// Each unit's state sits behind its own mutex; the outer map lock is held
/// only for slot lookup/insert, so computations for different units never
/// serialize against each other.
#[derive(Debug)]
pub struct Registry {
    policy: ScorePolicy,
    units: Mutex<BTreeMap<UnitId, Arc<Mutex<UnitSlot>>>>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(ScorePolicy::default())
    }
}

impl Registry {
    pub fn new(policy: ScorePolicy) -> Self {
        Registry {
            policy,
            units: Mutex::new(BTreeMap::new()),
        }
    }

    /// First (or fresh) computation for a unit: store its inputs and run the
    /// engine.
    pub fn validate(
        &self,
        unit_id: &UnitId,
        inputs: UnitInputs,
    ) -> Result<ValidationResult, LifecycleError> {
        let slot = self.slot_or_insert(unit_id);
        let mut guard = try_lock_slot(&slot, unit_id)?;
        guard.inputs = inputs;
        Ok(self.compute_locked(unit_id, &mut guard))
    }

    /// Re-run the engine against the unit's currently stored inputs.
    ///
    /// Idempotent: unchanged inputs yield the same summary, status, score,
    /// and fingerprint (only `computed_at` moves).
    pub fn revalidate(&self, unit_id: &UnitId) -> Result<ValidationResult, LifecycleError> {
        let slot = self.slot(unit_id)?;
        let mut guard = try_lock_slot(&slot, unit_id)?;
        Ok(self.compute_locked(unit_id, &mut guard))
    }

    /// Mark the cached result stale without discarding it, so callers can
    /// keep showing the last-known result while a recomputation is pending.
    pub fn invalidate(&self, unit_id: &UnitId) -> Result<(), LifecycleError> {
        let slot = self.slot(unit_id)?;
        let mut guard = lock_slot(&slot);
        if guard.result.is_some() {
            guard.state = LifecycleState::Stale;
        }
        Ok(())
    }

    /// Replace the unit's stored inputs (new test results or findings
    /// arrived, or the checklist itself changed) and mark any cached result
    /// stale. Creates the unit if it does not exist yet.
    pub fn update_inputs(&self, unit_id: &UnitId, inputs: UnitInputs) {
        let slot = self.slot_or_insert(unit_id);
        let mut guard = lock_slot(&slot);
        guard.inputs = inputs;
        if guard.result.is_some() {
            guard.state = LifecycleState::Stale;
        }
    }

    /// Read the cached result without recomputation.
    pub fn get_result(&self, unit_id: &UnitId) -> Result<ValidationResult, LifecycleError> {
        let slot = self.slot(unit_id)?;
        let guard = lock_slot(&slot);
        guard
            .result
            .clone()
            .ok_or_else(|| LifecycleError::NotFound(unit_id.clone()))
    }

    pub fn state(&self, unit_id: &UnitId) -> Result<LifecycleState, LifecycleError> {
        let slot = self.slot(unit_id)?;
        let guard = lock_slot(&slot);
        Ok(guard.state)
    }

    fn compute_locked(
        &self,
        unit_id: &UnitId,
        guard: &mut MutexGuard<'_, UnitSlot>,
    ) -> ValidationResult {
        guard.state = LifecycleState::Computing;

        let Outcome {
            checklist,
            status,
            health_score,
            audit,
            diagnostics,
            fingerprint,
        } = evaluate(&guard.inputs, &self.policy);

        let result = ValidationResult {
            unit_id: unit_id.clone(),
            checklist_summary: checklist,
            overall_status: status,
            health_score,
            audit_report: audit,
            diagnostics,
            inputs_fingerprint: fingerprint,
            computed_at: OffsetDateTime::now_utc(),
        };

        guard.state = match status {
            OverallStatus::Validated => LifecycleState::Validated,
            OverallStatus::Failed => LifecycleState::Failed,
            OverallStatus::Pending => LifecycleState::Pending,
        };
        guard.result = Some(result.clone());
        result
    }

    fn slot(&self, unit_id: &UnitId) -> Result<Arc<Mutex<UnitSlot>>, LifecycleError> {
        let units = self
            .units
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        units
            .get(unit_id)
            .cloned()
            .ok_or_else(|| LifecycleError::NotFound(unit_id.clone()))
    }

    fn slot_or_insert(&self, unit_id: &UnitId) -> Arc<Mutex<UnitSlot>> {
        let mut units = self
            .units
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        units
            .entry(unit_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(UnitSlot::empty())))
            .clone()
    }

    /// Run `f` while holding the unit's slot lock. Test hook for exercising
    /// the single-flight rejection path deterministically.
    #[cfg(test)]
    fn while_slot_held<T>(&self, unit_id: &UnitId, f: impl FnOnce() -> T) -> T {
        let slot = self.slot_or_insert(unit_id);
        let _guard = lock_slot(&slot);
        f()
    }
}

fn lock_slot(slot: &Arc<Mutex<UnitSlot>>) -> MutexGuard<'_, UnitSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn try_lock_slot<'a>(
    slot: &'a Arc<Mutex<UnitSlot>>,
    unit_id: &UnitId,
) -> Result<MutexGuard<'a, UnitSlot>, LifecycleError> {
    match slot.try_lock() {
        Ok(guard) => Ok(guard),
        Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => {
            Err(LifecycleError::ComputationInProgress(unit_id.clone()))
        }
    }
}
