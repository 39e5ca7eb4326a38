//! `securevault-crypto-core` - Password-based envelope encryption for SecureVault.
//!
//! This crate is the audit target: zero I/O, zero logging, zero async.
//! Export flow: strength gate → PBKDF2 → AES-256-GCM → base64 → [`Envelope`].
//! Import flow: [`validate`] → version gate → base64 → PBKDF2 → AES-256-GCM.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;
pub mod rng;

pub mod codec;
pub mod kdf;
pub mod symmetric;

pub mod envelope;
pub mod validate;

pub mod password;
pub mod strength;

pub use envelope::{decrypt, encrypt, encrypt_with_rng, Envelope, EnvelopeMaterial, FORMAT_VERSION};
pub use error::CryptoError;
pub use kdf::{derive_key, derive_key_from_slice, DerivedKey, KeyPurpose, PBKDF2_ITERATIONS};
pub use memory::{SecretBuffer, SecretBytes};
pub use password::{
    generate, generate_with_rng, GeneratorPolicy, DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH,
};
pub use strength::{evaluate, StrengthLevel, StrengthReport};
pub use validate::validate;
