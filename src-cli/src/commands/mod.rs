//! Command handlers.
//!
//! Each handler returns a dedicated response type or a user-facing error
//! string. Domain errors are logged at debug level and rendered through
//! `VaultError::user_message`, so a wrong password and a damaged file look
//! the same to the caller.

pub mod export;
pub mod import;
pub mod password_generator;
pub mod strength;

use securevault_vault::VaultError;

/// Log `err` and turn it into the message shown to the user.
pub(crate) fn user_error(err: &VaultError) -> String {
    tracing::debug!(error = %err, "command failed");
    err.user_message()
}
