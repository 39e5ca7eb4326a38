//! Password strength heuristics.
//!
//! [`evaluate`] is a pure function of the password: it awards one point for
//! each of length >= 8, >= 12, >= 16, a lowercase letter, an uppercase
//! letter, a digit and a symbol, then normalises the 0..=7 raw score to a
//! six-level scale.
//!
//! Feedback is computed independently of the score and can disagree with it:
//! a long all-lowercase password scores on length yet still lists the missing
//! classes.

use serde::Serialize;

/// Highest normalised score.
pub const MAX_SCORE: u8 = 5;

const FEEDBACK_LENGTH: &str = "Use at least 8 characters";
const FEEDBACK_UPPERCASE: &str = "Add uppercase letters";
const FEEDBACK_DIGIT: &str = "Add numbers";
const FEEDBACK_SYMBOL: &str = "Add special characters (!@#$%^&*)";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Six-level strength scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Map a normalised score to its level. Scores above 5 saturate.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

/// Result of [`evaluate`]. Recomputed on every change; holds no state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Normalised score, `0..=5`.
    pub score: u8,
    /// Label for `score`.
    pub label: &'static str,
    /// Unmet rules, in fixed order: length, uppercase, digit, symbol.
    pub feedback: Vec<&'static str>,
}

impl StrengthReport {
    /// Level corresponding to `score`.
    #[must_use]
    pub const fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }

    /// `true` if the score reaches `min_score`.
    #[must_use]
    pub const fn is_acceptable(&self, min_score: u8) -> bool {
        self.score >= min_score
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Score `password` and list what it is missing.
#[must_use]
pub fn evaluate(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let raw: u8 = [
        length >= 8,
        length >= 12,
        length >= 16,
        has_lower,
        has_upper,
        has_digit,
        has_symbol,
    ]
    .into_iter()
    .map(u8::from)
    .fold(0, u8::saturating_add);

    let mut feedback = Vec::new();
    if length < 8 {
        feedback.push(FEEDBACK_LENGTH);
    }
    if !has_upper {
        feedback.push(FEEDBACK_UPPERCASE);
    }
    if !has_digit {
        feedback.push(FEEDBACK_DIGIT);
    }
    if !has_symbol {
        feedback.push(FEEDBACK_SYMBOL);
    }

    let score = normalize(raw);
    StrengthReport {
        score,
        label: StrengthLevel::from_score(score).as_str(),
        feedback,
    }
}

/// `min(ceil(raw / 1.4), 5)` in integer arithmetic: `ceil(5 * raw / 7)`.
const fn normalize(raw: u8) -> u8 {
    let scaled = raw.saturating_mul(5).saturating_add(6) / 7;
    if scaled > MAX_SCORE {
        MAX_SCORE
    } else {
        scaled
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
