//! Secrets never appear in `Debug`/`Display` output.

use secrecy::ExposeSecret;
use securevault_crypto_core::envelope::{decrypt, encrypt};
use securevault_crypto_core::kdf::{derive_key, KeyPurpose};
use securevault_crypto_core::memory::{SecretBuffer, SecretBytes};

#[test]
fn derived_key_debug_hides_bytes() {
    let key = derive_key(b"masked", &[7u8; 16], KeyPurpose::Encrypt).unwrap();
    assert_eq!(format!("{key:?}"), "DerivedKey(encrypt, ***)");
}

#[test]
fn secret_containers_are_masked() {
    let buffer = SecretBuffer::new(b"hunter2");
    assert!(!format!("{buffer:?}").contains("hunter2"));
    assert!(!format!("{buffer}").contains("hunter2"));

    let bytes = SecretBytes::new(*b"hunter2!");
    assert_eq!(format!("{bytes:?}"), "SecretBytes<8>(***)");
}

#[test]
fn decrypted_plaintext_debug_is_redacted() {
    let envelope = encrypt("my-bank-pin-0000", "Redact-Me-99").unwrap();
    let plaintext = decrypt(&envelope, "Redact-Me-99").unwrap();
    assert!(!format!("{plaintext:?}").contains("my-bank-pin"));
    assert_eq!(plaintext.expose_secret(), "my-bank-pin-0000");
}

#[test]
fn envelope_debug_contains_no_plaintext() {
    let envelope = encrypt("plaintext-marker", "Envelope-Pass-1").unwrap();
    let debug = format!("{envelope:?}");
    assert!(!debug.contains("plaintext-marker"));
    assert!(!debug.contains("Envelope-Pass-1"));
}
