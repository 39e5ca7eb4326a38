//! Encrypted export of password entries.
//!
//! Entries are serialized to JSON, sealed into a password envelope, and
//! rendered as the single-object envelope JSON that `import` accepts.

use std::path::{Path, PathBuf};

use securevault_crypto_core::envelope;
use securevault_crypto_core::strength;

use crate::entries::{self, PasswordEntry};
use crate::error::VaultError;
use crate::settings::Settings;

const FILE_PREFIX: &str = "secure_vault_export_";

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

/// Parameters for an export.
pub struct ExportRequest<'a> {
    /// Entries to export, in order.
    pub entries: &'a [PasswordEntry],
    /// Export password chosen by the user.
    pub password: &'a str,
    /// Proceed even if `password` scores below `settings.min_export_score`.
    pub allow_weak_password: bool,
    /// Supplies the minimum export score.
    pub settings: &'a Settings,
}

/// A sealed export, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Suggested file name, `secure_vault_export_<millis>.json`.
    pub file_name: String,
    /// Envelope JSON.
    pub contents: String,
    /// Number of entries sealed inside.
    pub entry_count: usize,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Seal `request.entries` under `request.password`.
///
/// # Errors
///
/// - [`VaultError::EmptyPassword`] if the password is empty
/// - [`VaultError::WeakPassword`] if it is below the configured minimum
///   and no override was given
/// - [`VaultError::Crypto`] if encryption fails
pub fn export_entries(request: &ExportRequest<'_>) -> Result<ExportResult, VaultError> {
    if request.password.is_empty() {
        return Err(VaultError::EmptyPassword);
    }

    let report = strength::evaluate(request.password);
    if !report.is_acceptable(request.settings.min_export_score) {
        if !request.allow_weak_password {
            return Err(VaultError::WeakPassword {
                label: report.label,
            });
        }
        tracing::warn!(
            score = report.score,
            min_score = request.settings.min_export_score,
            "exporting with a weak password"
        );
    }

    let payload = entries::serialize_entries(request.entries)?;
    let sealed = envelope::encrypt(&payload, request.password)?;
    let contents = sealed.to_json()?;

    let entry_count = request.entries.len();
    tracing::info!(
        entries = entry_count,
        bytes = contents.len(),
        version = sealed.version,
        "export sealed"
    );

    Ok(ExportResult {
        file_name: format!("{FILE_PREFIX}{}.json", entries::now_millis()),
        contents,
        entry_count,
    })
}

/// Write `export` into `dir` under its file name.
///
/// # Errors
///
/// Returns [`VaultError::Io`] if the directory is missing or the write
/// fails.
pub fn write_export(dir: &Path, export: &ExportResult) -> Result<PathBuf, VaultError> {
    let path = crate::write_atomic(dir, &export.file_name, export.contents.as_bytes())?;
    tracing::debug!(path = %path.display(), "export written");
    Ok(path)
}
