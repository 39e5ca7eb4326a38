//! Import command.

use std::fs;
use std::io::Write;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use securevault_vault::{
    import_entries, read_import_file, serialize_entries, ImportRequest, PasswordEntry, Settings,
};

use super::user_error;

/// Entries recovered from an export.
///
/// `Debug` comes from [`PasswordEntry`], which masks passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResponse {
    /// Number of entries recovered.
    pub count: usize,
    /// Recovered entries with fresh ids.
    pub entries: Vec<PasswordEntry>,
}

impl ImportResponse {
    /// The recovered entries as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns a message if serialization fails.
    pub fn entries_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| format!("Cannot render entries: {e}"))
    }
}

/// Open the export at `file` with `password`.
///
/// # Errors
///
/// Returns a user-facing message. Wrong password, tampering and a corrupt
/// payload all produce the same text.
pub fn import_vault(
    file: &Path,
    password: &SecretString,
    settings: &Settings,
) -> Result<ImportResponse, String> {
    let contents = read_import_file(file, settings).map_err(|e| user_error(&e))?;
    let result = import_entries(&ImportRequest {
        contents: &contents,
        password: password.expose_secret(),
        settings,
    })
    .map_err(|e| user_error(&e))?;

    Ok(ImportResponse {
        count: result.count,
        entries: result.entries,
    })
}

/// Write recovered entries to `path`, readable by the owner only.
///
/// The output holds plaintext passwords. An existing file is replaced.
///
/// # Errors
///
/// Returns a message if the file cannot be created or written.
pub fn write_entries(path: &Path, response: &ImportResponse) -> Result<(), String> {
    let json = serialize_entries(&response.entries).map_err(|e| user_error(&e))?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| format!("Cannot create {}: {e}", path.display()))?;
    file.write_all(json.as_bytes())
        .map_err(|e| format!("Cannot write {}: {e}", path.display()))?;
    tracing::debug!(entries = response.count, "import written");
    Ok(())
}
