//! Strength check command.

use secrecy::{ExposeSecret, SecretString};
use securevault_crypto_core::strength;

/// Evaluate `password` and render the report as JSON.
///
/// # Errors
///
/// Returns a message if the report cannot be serialized.
pub fn check_strength(password: &SecretString) -> Result<String, String> {
    let report = strength::evaluate(password.expose_secret());
    tracing::debug!(score = report.score, "strength evaluated");
    serde_json::to_string_pretty(&report).map_err(|e| format!("Cannot render report: {e}"))
}
