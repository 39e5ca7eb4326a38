//! Fuzz target for decrypted payload parsing.
//!
//! Feeds arbitrary strings to `parse_entries`. Must never panic.
//!
//! # Usage
//!
//! ```sh
//! cd crates/securevault-vault
//! cargo +nightly fuzz run entries_payload -- -max_len=65536
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(entries) = securevault_vault::parse_entries(s) {
            let _ = securevault_vault::serialize_entries(&entries);
        }
    }
});
