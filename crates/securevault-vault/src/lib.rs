//! `securevault-vault` - Encrypted export and import of password entries.
//!
//! Sits between the crypto core and the command shell: applies the
//! export strength gate and the import size limit, moves entries in and
//! out of the envelope payload, and owns the on-disk settings file.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod entries;
pub mod error;
pub mod export;
pub mod import;
pub mod settings;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use entries::{generate_entry_id, now_millis, parse_entries, serialize_entries, PasswordEntry};
pub use error::VaultError;
pub use export::{export_entries, write_export, ExportRequest, ExportResult};
pub use import::{import_entries, read_import_file, ImportRequest, ImportResult};
pub use settings::Settings;

/// Write `contents` to `dir/name` via a hidden `.tmp` sibling and a rename,
/// owner-only on Unix. The temporary file is removed if any step fails.
pub(crate) fn write_atomic(dir: &Path, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(name);
    let tmp = dir.join(format!(".{name}.tmp"));

    if let Err(err) = write_then_rename(&tmp, &path, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(path)
}

fn write_then_rename(tmp: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(tmp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(tmp, path)
}
