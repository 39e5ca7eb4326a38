//! Password acquisition via the `SECUREVAULT_PASSWORD` environment variable
//! or an interactive TTY prompt.

use std::io::IsTerminal;

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroize;

/// Environment variable consulted before prompting.
pub const PASSWORD_ENV_VAR: &str = "SECUREVAULT_PASSWORD";

/// Get a password from the environment or the terminal.
///
/// Priority:
/// 1. `SECUREVAULT_PASSWORD` (for scripts and CI)
/// 2. Interactive prompt via `rpassword`, twice when `confirm` is set
///
/// # Errors
///
/// Returns a message if neither source is available, the prompt fails,
/// the confirmation does not match, or the password is empty.
pub fn read_password(label: &str, confirm: bool) -> Result<SecretString, String> {
    if let Some(password) = from_env() {
        return Ok(password);
    }

    if !std::io::stdin().is_terminal() {
        return Err(format!(
            "No password provided. Set {PASSWORD_ENV_VAR} or run interactively."
        ));
    }

    let first = prompt(label)?;
    if confirm {
        let second = prompt(&format!("Confirm {}", label.to_lowercase()))?;
        if first.expose_secret() != second.expose_secret() {
            return Err("passwords do not match".into());
        }
    }
    if first.expose_secret().is_empty() {
        return Err("empty password not allowed".into());
    }
    Ok(first)
}

fn from_env() -> Option<SecretString> {
    std::env::var(PASSWORD_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}

fn prompt(label: &str) -> Result<SecretString, String> {
    eprint!("{label}: ");
    let mut raw =
        rpassword::read_password().map_err(|e| format!("failed to read password: {e}"))?;
    let secret = SecretString::from(raw.as_str());
    raw.zeroize();
    Ok(secret)
}
