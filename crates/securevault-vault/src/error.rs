//! Vault error types for `securevault-vault`.

use securevault_crypto_core::CryptoError;
use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Errors produced by export and import operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Cryptographic operation failed (delegated from crypto-core).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// An export or import was attempted without a password.
    #[error("password is empty")]
    EmptyPassword,

    /// The export password scored below the configured minimum.
    #[error("export password is too weak ({label})")]
    WeakPassword {
        /// Strength label of the rejected password.
        label: &'static str,
    },

    /// Import candidate exceeds the configured size limit.
    #[error("file size {size} bytes exceeds maximum {limit} bytes")]
    FileTooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Maximum allowed size in bytes.
        limit: u64,
    },

    /// Decrypted payload is not a list of entries.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultError {
    /// Message suitable for showing to the person at the keyboard.
    ///
    /// A wrong password and a corrupted file read the same. A payload that
    /// decrypts but does not hold entries gets its own message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Crypto(CryptoError::Decryption) => {
                "Import failed. Check your password and file.".into()
            }
            Self::Crypto(CryptoError::MalformedEnvelope(_)) => {
                "Invalid file format. This is not a SecureVault export.".into()
            }
            Self::Crypto(CryptoError::UnsupportedVersion(v)) => {
                format!("Unsupported export version ({v}). Update SecureVault and try again.")
            }
            Self::Crypto(CryptoError::RandomnessUnavailable(_)) => {
                "Secure random number generator unavailable.".into()
            }
            Self::Crypto(_) => "Encryption failed.".into(),
            Self::EmptyPassword => "Please enter a password.".into(),
            Self::WeakPassword { label } => format!(
                "Your password is {label}. Choose a stronger password to protect your export."
            ),
            Self::FileTooLarge { limit, .. } => {
                format!("File is too large (max {} MB).", limit.saturating_div(MIB))
            }
            Self::InvalidPayload(_) => "File contains invalid password data.".into(),
            Self::Io(e) => format!("File error: {e}"),
        }
    }
}
