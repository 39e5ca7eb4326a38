//! PBKDF2-HMAC-SHA256 key derivation.
//!
//! This module provides:
//! - [`derive_key`]: derive a 256-bit AES key from a password + 16-byte salt
//! - [`derive_key_from_slice`]: same, for salts that arrive as untrusted slices
//! - [`DerivedKey`]: the key handle, restricted to one [`KeyPurpose`]
//!
//! # Fixed Parameters
//!
//! Hash, iteration count and output length are constants of envelope
//! format version 1. They are never read from the envelope: a change
//! requires a new format version.

use std::fmt;

use crate::error::CryptoError;
use crate::memory::SecretBytes;

/// PBKDF2 iteration count for format version 1.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What a derived key may be used for.
///
/// Both purposes use the identical derivation; the purpose only limits
/// which AEAD operation accepts the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPurpose {
    /// Sealing a new envelope.
    Encrypt,
    /// Opening an existing envelope.
    Decrypt,
}

impl KeyPurpose {
    /// Lowercase name, used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

/// A 256-bit key bound to a single purpose.
///
/// Not `Clone`, not serializable; the bytes are wiped on drop.
pub struct DerivedKey {
    bytes: SecretBytes<KEY_LEN>,
    purpose: KeyPurpose,
}

impl DerivedKey {
    /// Wrap existing key material. Used by known-answer tests and by
    /// callers that hold a raw AES key.
    #[must_use]
    pub const fn new(bytes: SecretBytes<KEY_LEN>, purpose: KeyPurpose) -> Self {
        Self { bytes, purpose }
    }

    /// The operation this key is allowed to perform.
    #[must_use]
    pub const fn purpose(&self) -> KeyPurpose {
        self.purpose
    }

    /// Raw key bytes for the AEAD primitive.
    #[must_use]
    pub const fn expose(&self) -> &[u8; KEY_LEN] {
        self.bytes.expose()
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey({}, ***)", self.purpose.as_str())
    }
}

// ---------------------------------------------------------------------------
// Core KDF
// ---------------------------------------------------------------------------

/// Derive a 256-bit key from `password` and `salt`.
///
/// Accepts any password, including the empty one: strength policy is the
/// caller's concern.
///
/// # Errors
///
/// Infallible for a well-formed salt; the `Result` keeps the signature
/// aligned with [`derive_key_from_slice`].
pub fn derive_key(
    password: &[u8],
    salt: &[u8; SALT_LEN],
    purpose: KeyPurpose,
) -> Result<DerivedKey, CryptoError> {
    let mut key = SecretBytes::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(password, salt, PBKDF2_ITERATIONS, key.expose_mut());
    Ok(DerivedKey::new(key, purpose))
}

/// Derive a key from a salt of unchecked length.
///
/// # Errors
///
/// Returns `CryptoError::KeyDerivation` if the salt is not exactly
/// [`SALT_LEN`] bytes.
pub fn derive_key_from_slice(
    password: &[u8],
    salt: &[u8],
    purpose: KeyPurpose,
) -> Result<DerivedKey, CryptoError> {
    let salt: &[u8; SALT_LEN] = salt.try_into().map_err(|_| {
        CryptoError::KeyDerivation(format!(
            "invalid salt length: {} bytes (expected {SALT_LEN})",
            salt.len()
        ))
    })?;
    derive_key(password, salt, purpose)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
