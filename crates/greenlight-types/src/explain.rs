//! Explain registry for status and diagnostic reason codes.
//!
//! Maps the stable identifiers in [`crate::ids`] to human-readable
//! explanations so callers (and the CLI `explain` command) can surface what a
//! derived status means and what to do about it.

use crate::ids;

/// Explanation entry for a status or reason code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What the code means and how it is derived.
    pub description: &'static str,
    /// What a caller can do to move the state forward.
    pub remediation: &'static str,
}

/// Look up an explanation by status or reason identifier.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::STATUS_ITEM_PENDING => Some(Explanation {
            title: "Checklist item pending",
            description: "The item has no linked tests yet, or its linked tests have not all \
                          run. An item with a linked test id that was never supplied also stays \
                          pending: missing evidence is an unresolved state, not a failure.",
            remediation: "Link the item to automated tests and run them, then revalidate.",
        }),
        ids::STATUS_ITEM_PASSED => Some(Explanation {
            title: "Checklist item passed",
            description: "Every test referenced by the item ran and passed.",
            remediation: "Nothing to do.",
        }),
        ids::STATUS_ITEM_FAILED => Some(Explanation {
            title: "Checklist item failed",
            description: "At least one test referenced by the item failed or errored.",
            remediation: "Fix the failing tests and revalidate the unit.",
        }),
        ids::STATUS_ITEM_SKIPPED => Some(Explanation {
            title: "Checklist item skipped",
            description: "The checklist-generation service waived this criterion. Skipped items \
                          count in the summary but never block validation.",
            remediation: "Regenerate the checklist if the criterion should apply again.",
        }),
        ids::STATUS_UNIT_VALIDATED => Some(Explanation {
            title: "Unit validated",
            description: "All required checklist items passed and no finding has critical \
                          severity.",
            remediation: "Nothing to do. New evidence can still move the unit to stale.",
        }),
        ids::STATUS_UNIT_FAILED => Some(Explanation {
            title: "Unit failed validation",
            description: "At least one required checklist item failed, or at least one finding \
                          has critical severity.",
            remediation: "Fix failing required items and resolve critical findings, then \
                          revalidate.",
        }),
        ids::STATUS_UNIT_PENDING => Some(Explanation {
            title: "Unit pending",
            description: "Neither the validated nor the failed conditions hold: some required \
                          items are still unresolved and no blocking finding exists.",
            remediation: "Provide test evidence for the remaining required items.",
        }),
        ids::REASON_UNKNOWN_TEST_REF => Some(Explanation {
            title: "Unknown test reference",
            description: "A checklist item linked a test id that was not present in the supplied \
                          test results. The item degrades to pending; the computation continues.",
            remediation: "Check the linkage ids emitted by the test-execution service.",
        }),
        ids::REASON_MALFORMED_RECORD => Some(Explanation {
            title: "Malformed input record",
            description: "An input record could not be decoded. It is skipped and counted in \
                          diagnostics; one bad record never blocks validation of the rest.",
            remediation: "Inspect the diagnostics counts in the report data and fix the producer.",
        }),
        ids::REASON_COMPUTATION_IN_PROGRESS => Some(Explanation {
            title: "Computation in progress",
            description: "A validate or revalidate request arrived while the same unit was \
                          already computing. Requests are rejected rather than queued.",
            remediation: "Retry once the in-flight computation finishes.",
        }),
        ids::REASON_UNIT_NOT_FOUND => Some(Explanation {
            title: "Unit not found",
            description: "No validation state exists for the requested unit id. This is distinct \
                          from an empty-but-valid result.",
            remediation: "Call validate with the unit's inputs first.",
        }),
        _ => None,
    }
}

/// List all known identifiers, for CLI discovery output.
pub fn all_identifiers() -> &'static [&'static str] {
    &[
        ids::STATUS_ITEM_PENDING,
        ids::STATUS_ITEM_PASSED,
        ids::STATUS_ITEM_FAILED,
        ids::STATUS_ITEM_SKIPPED,
        ids::STATUS_UNIT_VALIDATED,
        ids::STATUS_UNIT_FAILED,
        ids::STATUS_UNIT_PENDING,
        ids::REASON_UNKNOWN_TEST_REF,
        ids::REASON_MALFORMED_RECORD,
        ids::REASON_COMPUTATION_IN_PROGRESS,
        ids::REASON_UNIT_NOT_FOUND,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_resolves() {
        for id in all_identifiers() {
            assert!(lookup_explanation(id).is_some(), "missing explanation: {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("no.such.code").is_none());
    }
}
