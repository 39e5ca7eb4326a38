//! Password entries: the plaintext payload carried inside an export.
//!
//! The payload is a JSON array of [`PasswordEntry`] objects in camelCase.
//! Entries are opaque to the crypto layer; this module only moves them
//! between Rust values and the payload text.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VaultError;

/// A stored credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordEntry {
    /// Unique identifier (UUID v4 string). Empty when a payload omits it;
    /// import assigns a fresh one either way.
    #[serde(default)]
    pub id: String,
    /// Display name, e.g. `"GitHub"`.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation time in milliseconds since the Unix epoch. Defaults to
    /// the parse time when absent.
    #[serde(default = "now_millis")]
    pub created_at: u64,
}

impl PasswordEntry {
    /// New entry with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: generate_entry_id(),
            label: label.into(),
            username: None,
            password: None,
            url: None,
            notes: None,
            created_at: now_millis(),
        }
    }
}

impl fmt::Debug for PasswordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("url", &self.url)
            .field("notes", &self.notes.as_ref().map(|_| "***"))
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Generate a random UUID v4 string.
#[must_use]
pub fn generate_entry_id() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);

    bytes[6] = (bytes[6] & 0x0F) | 0x40; // version 4
    bytes[8] = (bytes[8] & 0x3F) | 0x80; // variant 1

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        bytes[6], bytes[7],
        bytes[8], bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    )
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Render entries as the export payload text.
///
/// # Errors
///
/// Returns [`VaultError::InvalidPayload`] if serialization fails.
pub fn serialize_entries(entries: &[PasswordEntry]) -> Result<String, VaultError> {
    serde_json::to_string(entries).map_err(|e| VaultError::InvalidPayload(e.to_string()))
}

/// Parse decrypted payload text back into entries.
///
/// # Errors
///
/// Returns [`VaultError::InvalidPayload`] unless `payload` is a JSON array
/// whose elements are all valid entries.
pub fn parse_entries(payload: &str) -> Result<Vec<PasswordEntry>, VaultError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| VaultError::InvalidPayload(e.to_string()))?;
    if !value.is_array() {
        return Err(VaultError::InvalidPayload("expected a JSON array of entries".into()));
    }
    serde_json::from_value(value).map_err(|e| VaultError::InvalidPayload(e.to_string()))
}
