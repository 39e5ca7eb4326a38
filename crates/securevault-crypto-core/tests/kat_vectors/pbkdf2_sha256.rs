//! PBKDF2-HMAC-SHA256 known-answer vectors (RFC 7914 §11 style, 32-byte dkLen).

use data_encoding::HEXLOWER;
use securevault_crypto_core::kdf::{derive_key, KeyPurpose, PBKDF2_ITERATIONS};

fn pbkdf2(password: &[u8], salt: &[u8], rounds: u32) -> String {
    let mut out = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(password, salt, rounds, &mut out);
    HEXLOWER.encode(&out)
}

#[test]
fn one_iteration() {
    assert_eq!(
        pbkdf2(b"password", b"salt", 1),
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
    );
}

#[test]
fn two_iterations() {
    assert_eq!(
        pbkdf2(b"password", b"salt", 2),
        "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
    );
}

#[test]
fn four_thousand_ninety_six_iterations() {
    assert_eq!(
        pbkdf2(b"password", b"salt", 4096),
        "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
    );
}

#[test]
fn derive_key_uses_the_fixed_iteration_count() {
    let salt = *b"0123456789abcdef";
    let key = derive_key(b"correct horse", &salt, KeyPurpose::Encrypt).unwrap();
    assert_eq!(
        HEXLOWER.encode(key.expose()),
        pbkdf2(b"correct horse", &salt, PBKDF2_ITERATIONS)
    );
    assert_ne!(
        HEXLOWER.encode(key.expose()),
        pbkdf2(b"correct horse", &salt, PBKDF2_ITERATIONS - 1)
    );
}
