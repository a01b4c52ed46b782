//! Fuzz target for greenlight.toml config parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (greenlight.toml must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Config parsing - should never panic
        if let Ok(cfg) = greenlight_settings::parse_config_toml(text) {
            // Resolution must also hold up under arbitrary parsed configs
            let _ = greenlight_settings::resolve_config(cfg, Default::default());
        }
    }
});
