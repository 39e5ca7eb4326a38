//! Structural check for untrusted envelope candidates.
//!
//! Runs on freshly parsed import data before any key derivation. PBKDF2 is
//! expensive on purpose, so garbage must be rejected here, cheaply.

use serde_json::Value;

/// Returns `true` if `candidate` has the shape of an envelope.
///
/// Requires a JSON object whose `data`, `iv` and `salt` members are strings
/// and whose `version` member is an integer. Unknown members are ignored.
/// Base64 well-formedness and version support are checked later.
#[must_use]
pub fn validate(candidate: &Value) -> bool {
    let Value::Object(obj) = candidate else {
        return false;
    };

    let is_text = |field: &str| obj.get(field).is_some_and(Value::is_string);
    let version_is_integer = obj
        .get("version")
        .is_some_and(|v| v.is_i64() || v.is_u64());

    is_text("data") && is_text("iv") && is_text("salt") && version_is_integer
}
