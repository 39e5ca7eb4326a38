//! AES-256-GCM known-answer vectors from the NIST GCM specification
//! (test cases 13 and 14: all-zero key and IV).

use data_encoding::HEXLOWER;
use securevault_crypto_core::kdf::{DerivedKey, KeyPurpose};
use securevault_crypto_core::memory::SecretBytes;
use securevault_crypto_core::symmetric::{open, seal, TAG_LEN};
use securevault_crypto_core::CryptoError;

const ZERO_NONCE: [u8; 12] = [0; 12];

fn zero_key(purpose: KeyPurpose) -> DerivedKey {
    DerivedKey::new(SecretBytes::new([0; 32]), purpose)
}

#[test]
fn case_13_empty_plaintext() {
    let sealed = seal(&zero_key(KeyPurpose::Encrypt), &ZERO_NONCE, b"").unwrap();
    assert_eq!(sealed.len(), TAG_LEN);
    assert_eq!(HEXLOWER.encode(&sealed), "530f8afbc74536b9a963b4f1c4cb738b");
}

#[test]
fn case_14_one_zero_block() {
    let sealed = seal(&zero_key(KeyPurpose::Encrypt), &ZERO_NONCE, &[0u8; 16]).unwrap();
    let (ciphertext, tag) = sealed.split_at(16);
    assert_eq!(HEXLOWER.encode(ciphertext), "cea7403d4d606b6e074ec5d3baf39d18");
    assert_eq!(HEXLOWER.encode(tag), "d0d1c8a799996bf0265b98b5d48ab919");
}

#[test]
fn case_14_opens_to_zero_block() {
    let sealed = HEXLOWER
        .decode(b"cea7403d4d606b6e074ec5d3baf39d18d0d1c8a799996bf0265b98b5d48ab919")
        .unwrap();
    let plaintext = open(&zero_key(KeyPurpose::Decrypt), &ZERO_NONCE, &sealed).unwrap();
    assert_eq!(plaintext.expose(), &[0u8; 16]);
}

#[test]
fn case_13_with_flipped_tag_fails() {
    let mut sealed = HEXLOWER.decode(b"530f8afbc74536b9a963b4f1c4cb738b").unwrap();
    sealed[0] ^= 0x80;
    assert!(matches!(
        open(&zero_key(KeyPurpose::Decrypt), &ZERO_NONCE, &sealed),
        Err(CryptoError::Decryption)
    ));
}
