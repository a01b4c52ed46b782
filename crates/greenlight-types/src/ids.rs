//! Stable identifiers for status and diagnostic reason codes.
//!
//! Statuses use a dotted namespace. Reasons are short snake_case
//! discriminators emitted in diagnostics and error payloads.

// Derived checklist item statuses
pub const STATUS_ITEM_PENDING: &str = "item.pending";
pub const STATUS_ITEM_PASSED: &str = "item.passed";
pub const STATUS_ITEM_FAILED: &str = "item.failed";
pub const STATUS_ITEM_SKIPPED: &str = "item.skipped";

// Derived overall statuses
pub const STATUS_UNIT_VALIDATED: &str = "unit.validated";
pub const STATUS_UNIT_FAILED: &str = "unit.failed";
pub const STATUS_UNIT_PENDING: &str = "unit.pending";

// Diagnostic reasons
pub const REASON_UNKNOWN_TEST_REF: &str = "unknown_test_ref";
pub const REASON_MALFORMED_RECORD: &str = "malformed_record";

// Lifecycle conditions
pub const REASON_COMPUTATION_IN_PROGRESS: &str = "computation_in_progress";
pub const REASON_UNIT_NOT_FOUND: &str = "unit_not_found";
