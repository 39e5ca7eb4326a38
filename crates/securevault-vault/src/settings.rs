//! Non-sensitive settings, stored as plain JSON in the data directory.
//!
//! Nothing here is secret: export thresholds, the import size limit,
//! generator defaults and the log level.

use std::fs;
use std::path::Path;

use securevault_crypto_core::password::GeneratorPolicy;
use serde::{Deserialize, Serialize};

/// Default upper bound on an import file: 5 MiB.
pub const DEFAULT_MAX_IMPORT_BYTES: u64 = 5 * 1024 * 1024;

/// Default minimum strength score for an export password ("Fair").
pub const DEFAULT_MIN_EXPORT_SCORE: u8 = 2;

// ── Settings ───────────────────────────────────────────────────────

/// Application settings.
///
/// Persisted to `{data_dir}/settings.json`. All fields have defaults via
/// [`Default`], so partial files load cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Exports with a password scoring below this are refused unless
    /// explicitly overridden.
    #[serde(default = "default_min_export_score")]
    pub min_export_score: u8,

    /// Import candidates larger than this are rejected before parsing.
    #[serde(default = "default_max_import_bytes")]
    pub max_import_bytes: u64,

    /// Defaults for `generate`.
    #[serde(default)]
    pub generator: GeneratorPolicy,

    /// `tracing` level for the `securevault` targets.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_export_score: default_min_export_score(),
            max_import_bytes: default_max_import_bytes(),
            generator: GeneratorPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

const fn default_min_export_score() -> u8 {
    DEFAULT_MIN_EXPORT_SCORE
}
const fn default_max_import_bytes() -> u64 {
    DEFAULT_MAX_IMPORT_BYTES
}
fn default_log_level() -> String {
    "info".into()
}

// ── File I/O ───────────────────────────────────────────────────────

const SETTINGS_FILE: &str = "settings.json";

impl Settings {
    /// Load settings from `{data_dir}/settings.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing or
    /// contains invalid JSON.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        fs::read_to_string(&path).map_or_else(
            |_| Self::default(),
            |contents| serde_json::from_str(&contents).unwrap_or_default(),
        )
    }

    /// Persist settings to `{data_dir}/settings.json`.
    ///
    /// Writes to `.settings.json.tmp` then renames over the target.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the directory does not exist or the
    /// file system rejects the write/rename.
    pub fn save(&self, data_dir: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        crate::write_atomic(data_dir, SETTINGS_FILE, json.as_bytes())?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────
