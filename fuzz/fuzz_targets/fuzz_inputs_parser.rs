//! Fuzz target for input document parsing.
//!
//! Goal: The parsers should **never panic** on any input.
//! They may return errors or degrade records into diagnostics,
//! but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_inputs_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (input documents must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Checklist document parsing - should never panic
        let _ = greenlight_inputs::fuzz::parse_checklist_text(text);

        // Test-result document parsing - should never panic
        let _ = greenlight_inputs::fuzz::parse_test_results_text(text);

        // Findings document parsing - should never panic
        let _ = greenlight_inputs::fuzz::parse_findings_text(text);
    }
});
