//! AES-256-GCM authenticated encryption.
//!
//! This module provides:
//! - [`seal`]: encrypt plaintext under an `Encrypt` key and caller-supplied nonce
//! - [`open`]: authenticate and decrypt under a `Decrypt` key
//!
//! Output convention is `ciphertext || tag`, the same concatenation WebCrypto
//! and Java JCE emit, so the envelope `data` field is interoperable.
//! No associated data is used.

use ring::aead;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::kdf::{DerivedKey, KeyPurpose};
use crate::memory::SecretBuffer;

/// AES-256-GCM nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

fn aead_key(key: &DerivedKey) -> Result<aead::LessSafeKey, ()> {
    let unbound = aead::UnboundKey::new(&aead::AES_256_GCM, key.expose()).map_err(|_| ())?;
    Ok(aead::LessSafeKey::new(unbound))
}

/// Encrypt `plaintext` and return `ciphertext || tag`.
///
/// The nonce must never repeat for the same key. Envelopes satisfy this by
/// deriving a fresh key from a fresh salt for every seal.
///
/// # Errors
///
/// Returns `CryptoError::Encryption` if the key was derived for decryption
/// or the underlying seal fails.
pub fn seal(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if key.purpose() != KeyPurpose::Encrypt {
        return Err(CryptoError::Encryption(format!(
            "key derived for {} cannot seal",
            key.purpose().as_str()
        )));
    }

    let less_safe_key = aead_key(key)
        .map_err(|()| CryptoError::Encryption("failed to create AES-256-GCM key".into()))?;

    let mut in_out = Vec::with_capacity(plaintext.len().saturating_add(TAG_LEN));
    in_out.extend_from_slice(plaintext);

    if less_safe_key
        .seal_in_place_append_tag(
            aead::Nonce::assume_unique_for_key(*nonce),
            aead::Aad::empty(),
            &mut in_out,
        )
        .is_err()
    {
        in_out.zeroize();
        return Err(CryptoError::Encryption(
            "AES-256-GCM encryption failed".into(),
        ));
    }

    Ok(in_out)
}

/// Authenticate and decrypt `ciphertext || tag`.
///
/// The intermediate buffer is zeroized once the plaintext has been copied
/// into the returned [`SecretBuffer`].
///
/// # Errors
///
/// Returns `CryptoError::Decryption` on tag mismatch, truncated input, or a
/// key that was not derived for decryption.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext_and_tag: &[u8],
) -> Result<SecretBuffer, CryptoError> {
    if key.purpose() != KeyPurpose::Decrypt || ciphertext_and_tag.len() < TAG_LEN {
        return Err(CryptoError::Decryption);
    }

    let less_safe_key = aead_key(key).map_err(|()| CryptoError::Decryption)?;

    let mut buf = ciphertext_and_tag.to_vec();
    let result = less_safe_key
        .open_in_place(
            aead::Nonce::assume_unique_for_key(*nonce),
            aead::Aad::empty(),
            &mut buf,
        )
        .map(|plaintext| SecretBuffer::new(plaintext))
        .map_err(|_| CryptoError::Decryption);

    buf.zeroize();
    result
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
