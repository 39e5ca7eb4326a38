//! Salt and nonce are fresh on every encryption.

use std::collections::HashSet;

use rand::rngs::OsRng;
use securevault_crypto_core::envelope::{encrypt, EnvelopeMaterial};

#[test]
fn ten_thousand_materials_never_collide() {
    let mut salts = HashSet::new();
    let mut nonces = HashSet::new();
    for _ in 0..10_000 {
        let material = EnvelopeMaterial::generate(&mut OsRng).unwrap();
        assert!(salts.insert(material.salt), "salt collision");
        assert!(nonces.insert(material.nonce), "nonce collision");
    }
}

#[test]
fn repeated_encryptions_use_fresh_salt_and_iv() {
    let mut salts = HashSet::new();
    let mut nonces = HashSet::new();
    for _ in 0..20 {
        let envelope = encrypt("same payload", "same password").unwrap();
        assert!(salts.insert(envelope.salt));
        assert!(nonces.insert(envelope.nonce));
    }
}
