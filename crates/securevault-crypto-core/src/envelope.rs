//! Password-protected, self-describing envelope (format version 1).
//!
//! This module provides:
//! - [`encrypt`] / [`encrypt_with_rng`]: seal a text payload under a password
//! - [`decrypt`]: recover the payload, or fail with a single collapsed error
//! - [`Envelope`]: the persisted JSON object
//!
//! # Wire Format
//!
//! ```text
//! { "data": "<base64>", "iv": "<base64>", "salt": "<base64>", "version": 1 }
//! ```
//!
//! - **data**: AES-256-GCM `ciphertext || tag`
//! - **iv**: 12-byte nonce
//! - **salt**: 16-byte PBKDF2 salt
//! - **version**: only `1` is defined; anything else is rejected
//!
//! # Security Properties
//!
//! - Salt and nonce are fresh per call, so every call derives a fresh key
//!   and a (key, nonce) pair can never repeat
//! - Decryption failures do not reveal whether the password or the data was
//!   at fault
//! - Untrusted JSON goes through [`validate`](crate::validate::validate)
//!   and the version gate before any key derivation

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use zeroize::Zeroize;

use crate::codec;
use crate::error::CryptoError;
use crate::kdf::{self, KeyPurpose, SALT_LEN};
use crate::memory::SecretBuffer;
use crate::rng;
use crate::symmetric::{self, NONCE_LEN};
use crate::validate::validate;

/// The only envelope format version this build reads and writes.
pub const FORMAT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A versioned, password-protected payload. Everything needed to attempt
/// decryption except the password.
///
/// Built once per export and never mutated.
#[must_use = "an envelope must be persisted or it is lost"]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Base64 of `ciphertext || tag`.
    #[serde(rename = "data")]
    pub ciphertext: String,
    /// Base64 of the 12-byte nonce.
    #[serde(rename = "iv")]
    pub nonce: String,
    /// Base64 of the 16-byte salt.
    pub salt: String,
    /// Format version.
    pub version: u32,
}

/// Per-encryption random inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeMaterial {
    /// PBKDF2 salt.
    pub salt: [u8; SALT_LEN],
    /// AES-GCM nonce.
    pub nonce: [u8; NONCE_LEN],
}

impl EnvelopeMaterial {
    /// Draw a fresh salt and nonce from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::RandomnessUnavailable` if the generator fails.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, CryptoError> {
        Ok(Self {
            salt: rng::random_array(rng)?,
            nonce: rng::random_array(rng)?,
        })
    }
}

impl Envelope {
    /// Parse an envelope from untrusted JSON text.
    ///
    /// # Errors
    ///
    /// - `CryptoError::MalformedEnvelope` if the text is not JSON or fails
    ///   the structural check
    /// - `CryptoError::UnsupportedVersion` if the version is not
    ///   [`FORMAT_VERSION`]
    pub fn from_json(text: &str) -> Result<Self, CryptoError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CryptoError::MalformedEnvelope(format!("invalid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Convert an already parsed JSON value into an envelope.
    ///
    /// # Errors
    ///
    /// Same as [`Envelope::from_json`], minus the syntax error case.
    pub fn from_value(value: Value) -> Result<Self, CryptoError> {
        if !validate(&value) {
            return Err(CryptoError::MalformedEnvelope(
                "expected string fields data, iv, salt and an integer version".into(),
            ));
        }

        // Integers beyond i64 are certainly not a version we know.
        let version = value
            .get("version")
            .and_then(Value::as_i64)
            .unwrap_or(i64::MAX);
        check_version(version)?;

        serde_json::from_value(value)
            .map_err(|e| CryptoError::MalformedEnvelope(format!("envelope decode failed: {e}")))
    }

    /// Serialize to the single-object JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Encryption` if serialization fails.
    pub fn to_json(&self) -> Result<String, CryptoError> {
        serde_json::to_string(self)
            .map_err(|e| CryptoError::Encryption(format!("envelope serialization failed: {e}")))
    }
}

/// Accept only versions this build explicitly handles.
fn check_version(version: i64) -> Result<u32, CryptoError> {
    if version == i64::from(FORMAT_VERSION) {
        Ok(FORMAT_VERSION)
    } else {
        Err(CryptoError::UnsupportedVersion(version))
    }
}

// ---------------------------------------------------------------------------
// Encryption
// ---------------------------------------------------------------------------

/// Encrypt `plaintext` under `password` using the OS CSPRNG.
///
/// Two calls with the same inputs never produce the same envelope.
///
/// # Errors
///
/// See [`encrypt_with_rng`].
pub fn encrypt(plaintext: &str, password: &str) -> Result<Envelope, CryptoError> {
    encrypt_with_rng(&mut OsRng, plaintext, password)
}

/// Encrypt `plaintext` under `password`, drawing salt and nonce from `rng`.
///
/// # Errors
///
/// - `CryptoError::RandomnessUnavailable` if `rng` fails
/// - `CryptoError::KeyDerivation` / `CryptoError::Encryption` if a
///   primitive rejects its inputs
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    plaintext: &str,
    password: &str,
) -> Result<Envelope, CryptoError> {
    let material = EnvelopeMaterial::generate(rng)?;
    seal_with_material(&material, plaintext, password)
}

/// Seal with explicit salt and nonce. The caller guarantees freshness.
pub(crate) fn seal_with_material(
    material: &EnvelopeMaterial,
    plaintext: &str,
    password: &str,
) -> Result<Envelope, CryptoError> {
    let key = kdf::derive_key(password.as_bytes(), &material.salt, KeyPurpose::Encrypt)?;
    let sealed = symmetric::seal(&key, &material.nonce, plaintext.as_bytes())?;

    Ok(Envelope {
        ciphertext: codec::encode(&sealed),
        nonce: codec::encode(&material.nonce),
        salt: codec::encode(&material.salt),
        version: FORMAT_VERSION,
    })
}

// ---------------------------------------------------------------------------
// Decryption
// ---------------------------------------------------------------------------

/// Decrypt `envelope` with `password`.
///
/// The version is checked first. After that, malformed base64, a bad salt
/// or nonce length, a wrong password, tampered data and non-UTF-8 plaintext
/// all produce the same `CryptoError::Decryption`.
///
/// # Errors
///
/// - `CryptoError::UnsupportedVersion` if `envelope.version` is unknown
/// - `CryptoError::Decryption` for every other failure
pub fn decrypt(envelope: &Envelope, password: &str) -> Result<SecretString, CryptoError> {
    check_version(i64::from(envelope.version))?;

    let plaintext = open_payload(envelope, password).ok_or(CryptoError::Decryption)?;

    match String::from_utf8(plaintext.expose().to_vec()) {
        Ok(text) => Ok(SecretString::from(text)),
        Err(e) => {
            e.into_bytes().zeroize();
            Err(CryptoError::Decryption)
        }
    }
}

/// Decode, derive and open. `None` on any failure; the cause is dropped.
fn open_payload(envelope: &Envelope, password: &str) -> Option<SecretBuffer> {
    let salt = codec::decode(&envelope.salt).ok()?;
    let nonce = codec::decode_array::<NONCE_LEN>(&envelope.nonce).ok()?;
    let ciphertext = codec::decode(&envelope.ciphertext).ok()?;

    let key = kdf::derive_key_from_slice(password.as_bytes(), &salt, KeyPurpose::Decrypt).ok()?;
    symmetric::open(&key, &nonce, &ciphertext).ok()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
