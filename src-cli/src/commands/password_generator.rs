//! Password generation command.
//!
//! Stateless. Options not given on the command line fall back to
//! `Settings.generator`.

use securevault_crypto_core::password::{self, GeneratorPolicy};
use securevault_vault::Settings;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Per-invocation overrides. `None` keeps the configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratePasswordRequest {
    /// Number of characters.
    pub length: Option<usize>,
    /// Include uppercase letters (A-Z).
    pub uppercase: Option<bool>,
    /// Include lowercase letters (a-z).
    pub lowercase: Option<bool>,
    /// Include digits (0-9).
    pub digits: Option<bool>,
    /// Include symbols.
    pub symbols: Option<bool>,
}

impl GeneratePasswordRequest {
    /// Apply the overrides on top of `base`.
    #[must_use]
    pub fn resolve(&self, base: &GeneratorPolicy) -> GeneratorPolicy {
        GeneratorPolicy {
            length: self.length.unwrap_or(base.length),
            use_uppercase: self.uppercase.unwrap_or(base.use_uppercase),
            use_lowercase: self.lowercase.unwrap_or(base.use_lowercase),
            use_numbers: self.digits.unwrap_or(base.use_numbers),
            use_symbols: self.symbols.unwrap_or(base.use_symbols),
        }
    }
}

/// Generated password.
///
/// `Debug` is implemented by hand so the value never reaches a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratePasswordResult {
    pub value: String,
}

impl std::fmt::Debug for GeneratePasswordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratePasswordResult")
            .field("value", &"***")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Generate a random password.
///
/// # Errors
///
/// Returns a message if the resolved length is out of range or too short
/// for the enabled classes.
pub fn generate_password(
    request: &GeneratePasswordRequest,
    settings: &Settings,
) -> Result<GeneratePasswordResult, String> {
    let policy = request.resolve(&settings.generator);
    let value = password::generate(&policy).map_err(|e| e.to_string())?;
    tracing::debug!(length = policy.length, "password generated");
    Ok(GeneratePasswordResult { value })
}
