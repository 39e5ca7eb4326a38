//! Fuzz target for the envelope parser on the import path.
//!
//! Feeds arbitrary strings to `Envelope::from_json` and the shape check.
//! Must never panic, and anything accepted must have passed `validate`.
//!
//! # Usage
//!
//! ```sh
//! cargo +nightly install cargo-fuzz
//!
//! # Run from the securevault-vault crate directory:
//! cd crates/securevault-vault
//! cargo +nightly fuzz run envelope_parse -- -max_len=8192
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use securevault_crypto_core::envelope::Envelope;
use securevault_crypto_core::validate::validate;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let accepted = Envelope::from_json(s).is_ok();
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(s) {
            assert!(!accepted || validate(&value));
        }
    }
});
