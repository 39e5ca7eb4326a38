//! Encrypted import of password entries.
//!
//! Checks run cheapest first: empty password, size, envelope shape and
//! version, then key derivation and decryption, then payload parsing.
//! Nothing expensive happens for input that fails an earlier check.

use std::fs;
use std::io::Read;
use std::path::Path;

use secrecy::ExposeSecret;
use securevault_crypto_core::envelope::{self, Envelope};
use securevault_crypto_core::CryptoError;

use crate::entries::{self, PasswordEntry};
use crate::error::VaultError;
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

/// Parameters for an import.
pub struct ImportRequest<'a> {
    /// Raw bytes of the candidate file.
    pub contents: &'a [u8],
    /// Password the export was sealed with.
    pub password: &'a str,
    /// Supplies the import size limit.
    pub settings: &'a Settings,
}

/// Entries recovered from an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// Entries in payload order, each with a freshly generated id.
    pub entries: Vec<PasswordEntry>,
    /// Number of entries recovered.
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Open an export and recover its entries.
///
/// # Errors
///
/// - [`VaultError::EmptyPassword`] if the password is empty
/// - [`VaultError::FileTooLarge`] if the input exceeds
///   `settings.max_import_bytes`
/// - [`VaultError::Crypto`] with `MalformedEnvelope`, `UnsupportedVersion`
///   or `Decryption`
/// - [`VaultError::InvalidPayload`] if the decrypted text is not a list
///   of entries
pub fn import_entries(request: &ImportRequest<'_>) -> Result<ImportResult, VaultError> {
    if request.password.is_empty() {
        return Err(VaultError::EmptyPassword);
    }

    let size = u64::try_from(request.contents.len()).unwrap_or(u64::MAX);
    check_size(size, request.settings)?;

    let text = std::str::from_utf8(request.contents)
        .map_err(|_| CryptoError::MalformedEnvelope("file is not UTF-8 text".into()))?;
    let parsed = Envelope::from_json(text)?;

    let plaintext = envelope::decrypt(&parsed, request.password)?;
    let mut imported = entries::parse_entries(plaintext.expose_secret())?;
    drop(plaintext);

    for entry in &mut imported {
        entry.id = entries::generate_entry_id();
    }

    let count = imported.len();
    tracing::info!(entries = count, bytes = size, version = parsed.version, "import opened");

    Ok(ImportResult {
        entries: imported,
        count,
    })
}

/// Read an import candidate from disk, refusing oversize files up front.
///
/// The reported length is checked first, then the read itself is capped
/// at the limit, so pipes and device files that report no length are
/// bounded too.
///
/// # Errors
///
/// - [`VaultError::FileTooLarge`] if the file's length or the bytes read
///   exceed the limit
/// - [`VaultError::Io`] if the file cannot be read
pub fn read_import_file(path: &Path, settings: &Settings) -> Result<Vec<u8>, VaultError> {
    let size = fs::metadata(path)?.len();
    check_size(size, settings)?;
    let contents = read_bounded(fs::File::open(path)?, settings)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "import file read");
    Ok(contents)
}

/// Read at most one byte past the limit, then apply the size check to
/// what actually arrived.
fn read_bounded<R: Read>(reader: R, settings: &Settings) -> Result<Vec<u8>, VaultError> {
    let mut contents = Vec::new();
    reader
        .take(settings.max_import_bytes.saturating_add(1))
        .read_to_end(&mut contents)?;
    check_size(u64::try_from(contents.len()).unwrap_or(u64::MAX), settings)?;
    Ok(contents)
}

fn check_size(size: u64, settings: &Settings) -> Result<(), VaultError> {
    if size > settings.max_import_bytes {
        tracing::warn!(size, limit = settings.max_import_bytes, "import rejected: too large");
        return Err(VaultError::FileTooLarge {
            size,
            limit: settings.max_import_bytes,
        });
    }
    Ok(())
}
