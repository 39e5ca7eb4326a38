//! Cryptographic random password generation.
//!
//! [`generate`] builds a password from the character classes enabled in a
//! [`GeneratorPolicy`]. Every character is drawn uniformly from the combined
//! alphabet, then one distinct position per enabled class is overwritten
//! with a character of that class, so each enabled class is always present.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

// Character sets
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*_+-=()[]{}|;:,.<>?";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character classes to draw from, and how many characters.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorPolicy {
    /// Number of characters to produce.
    pub length: usize,
    /// Include uppercase letters (A-Z).
    pub use_uppercase: bool,
    /// Include lowercase letters (a-z).
    pub use_lowercase: bool,
    /// Include digits (0-9).
    pub use_numbers: bool,
    /// Include symbols (!@#$%^&*...).
    pub use_symbols: bool,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
        }
    }
}

impl GeneratorPolicy {
    /// Enabled character classes, in fixed order.
    fn enabled_classes(&self) -> Vec<&'static [u8]> {
        [
            (self.use_uppercase, UPPERCASE),
            (self.use_lowercase, LOWERCASE),
            (self.use_numbers, DIGITS),
            (self.use_symbols, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a password for `policy` using the OS CSPRNG.
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate(policy: &GeneratorPolicy) -> Result<String, CryptoError> {
    generate_with_rng(&mut OsRng, policy)
}

/// Generate a password for `policy`, drawing from `rng`.
///
/// With no class enabled the alphabet falls back to letters and digits and
/// no class is forced.
///
/// # Errors
///
/// Returns [`CryptoError::PasswordGeneration`] if `policy.length` is zero,
/// above [`MAX_PASSWORD_LENGTH`], or smaller than the number of enabled
/// classes. Returns [`CryptoError::RandomnessUnavailable`] if `rng` fails.
pub fn generate_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    policy: &GeneratorPolicy,
) -> Result<String, CryptoError> {
    let length = policy.length;
    if !(1..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(CryptoError::PasswordGeneration(format!(
            "length must be between 1 and {MAX_PASSWORD_LENGTH}, got {length}"
        )));
    }

    let classes = policy.enabled_classes();
    if length < classes.len() {
        return Err(CryptoError::PasswordGeneration(format!(
            "length ({length}) must be at least {} to include one character from each enabled class",
            classes.len()
        )));
    }

    let alphabet: Vec<u8> = if classes.is_empty() {
        [UPPERCASE, LOWERCASE, DIGITS].concat()
    } else {
        classes.concat()
    };

    let mut chars = Vec::with_capacity(length);
    for _ in 0..length {
        chars.push(alphabet[rng::uniform_index(rng, alphabet.len())?]);
    }

    // Partial Fisher-Yates over positions: slot i picks from the positions
    // not yet claimed, so no class can overwrite another's character.
    let mut positions: Vec<usize> = (0..length).collect();
    for (slot, class) in classes.iter().enumerate() {
        let remaining = length.saturating_sub(slot);
        let pick = slot.saturating_add(rng::uniform_index(rng, remaining)?);
        positions.swap(slot, pick);
        chars[positions[slot]] = class[rng::uniform_index(rng, class.len())?];
    }

    String::from_utf8(chars)
        .map_err(|_| CryptoError::PasswordGeneration("generated non-ASCII output".into()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
