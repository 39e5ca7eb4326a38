//! Cryptographic error types for `securevault-crypto-core`.

use thiserror::Error;

/// Errors produced by envelope, key derivation and password operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS CSPRNG could not produce bytes. Nothing can proceed without it.
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// PBKDF2 rejected its inputs (wrong salt length, zero-length output).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// AES-256-GCM sealing failed, or a key was used against its purpose.
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Wrong password, corrupted or tampered envelope.
    ///
    /// Deliberately carries no detail: decoding, derivation and
    /// authentication failures all surface as this one variant.
    #[error("decryption failed")]
    Decryption,

    /// The candidate envelope failed structural validation.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The envelope declares a format version this build does not handle.
    #[error("unsupported envelope version: {0}")]
    UnsupportedVersion(i64),

    /// The generator policy cannot be satisfied (length out of range).
    #[error("password generation error: {0}")]
    PasswordGeneration(String),
}
