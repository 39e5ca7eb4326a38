//! Export command.
//!
//! Reads a plaintext JSON list of entries, seals it under the export
//! password, and writes `secure_vault_export_<millis>.json` into the
//! output directory.

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use securevault_vault::{export_entries, parse_entries, write_export, ExportRequest, Settings};

use super::user_error;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    /// Number of entries sealed.
    pub entry_count: usize,
    /// Where the export was written.
    pub path: PathBuf,
}

/// Seal the entries in `entries_file` and write the export into `out_dir`.
///
/// # Errors
///
/// Returns a user-facing message if the entries file cannot be read or
/// parsed, the password is empty or too weak, or the write fails.
pub fn export_vault(
    entries_file: &Path,
    out_dir: &Path,
    password: &SecretString,
    allow_weak: bool,
    settings: &Settings,
) -> Result<ExportResponse, String> {
    let text = fs::read_to_string(entries_file)
        .map_err(|e| format!("Cannot read {}: {e}", entries_file.display()))?;
    let entries = parse_entries(&text)
        .map_err(|e| format!("{} is not a list of entries: {e}", entries_file.display()))?;

    let export = export_entries(&ExportRequest {
        entries: &entries,
        password: password.expose_secret(),
        allow_weak_password: allow_weak,
        settings,
    })
    .map_err(|e| user_error(&e))?;

    let path = write_export(out_dir, &export).map_err(|e| user_error(&e))?;

    Ok(ExportResponse {
        entry_count: export.entry_count,
        path,
    })
}
