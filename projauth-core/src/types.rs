//! Type definitions shared across the crate
//!
//! Display codes, code lengths and the session wrappers. Session tokens and
//! passwords go through the secrecy crate so they never show up in logs or
//! debug output.

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest valid display code length
pub const MIN_CODE_LENGTH: usize = 1;

/// Largest code length accepted from configuration
pub const MAX_CONFIG_CODE_LENGTH: usize = 64;

/// Default regeneration period in seconds
pub const DEFAULT_PERIOD_SECS: u32 = 30;

/// Number of digits in a display code
///
/// Construction clamps to [`MIN_CODE_LENGTH`], so a `CodeLength` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct CodeLength(usize);

impl CodeLength {
    /// Create a code length, clamping values below 1 up to 1
    pub fn new(digits: usize) -> Self {
        Self(digits.max(MIN_CODE_LENGTH))
    }

    /// Create a code length from a signed request
    ///
    /// Zero and negative requests clamp to the minimum rather than failing.
    pub fn clamped(requested: i64) -> Self {
        if requested < MIN_CODE_LENGTH as i64 {
            Self(MIN_CODE_LENGTH)
        } else {
            Self::new(usize::try_from(requested).unwrap_or(usize::MAX))
        }
    }

    /// Create a code length from user input, clamped into
    /// `MIN_CODE_LENGTH..=MAX_CONFIG_CODE_LENGTH`
    pub fn bounded(requested: i64) -> Self {
        let capped = Self::clamped(requested);
        Self(capped.0.min(MAX_CONFIG_CODE_LENGTH))
    }

    /// Number of digits
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for CodeLength {
    fn default() -> Self {
        TokenLengthPreset::default().length()
    }
}

impl From<usize> for CodeLength {
    fn from(digits: usize) -> Self {
        Self::new(digits)
    }
}

impl From<CodeLength> for usize {
    fn from(length: CodeLength) -> Self {
        length.0
    }
}

impl From<TokenLengthPreset> for CodeLength {
    fn from(preset: TokenLengthPreset) -> Self {
        preset.length()
    }
}

impl fmt::Display for CodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named code lengths offered to the user
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenLengthPreset {
    /// 4 digits
    Short,
    /// 6 digits
    #[default]
    Medium,
    /// 8 digits
    Long,
    /// 10 digits
    Extended,
}

impl TokenLengthPreset {
    /// All presets in ascending length order
    pub const ALL: [TokenLengthPreset; 4] = [
        TokenLengthPreset::Short,
        TokenLengthPreset::Medium,
        TokenLengthPreset::Long,
        TokenLengthPreset::Extended,
    ];

    /// Code length for this preset
    pub fn length(self) -> CodeLength {
        match self {
            TokenLengthPreset::Short => CodeLength(4),
            TokenLengthPreset::Medium => CodeLength(6),
            TokenLengthPreset::Long => CodeLength(8),
            TokenLengthPreset::Extended => CodeLength(10),
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            TokenLengthPreset::Short => "short",
            TokenLengthPreset::Medium => "medium",
            TokenLengthPreset::Long => "long",
            TokenLengthPreset::Extended => "extended",
        }
    }
}

impl FromStr for TokenLengthPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(TokenLengthPreset::Short),
            "medium" => Ok(TokenLengthPreset::Medium),
            "long" => Ok(TokenLengthPreset::Long),
            "extended" => Ok(TokenLengthPreset::Extended),
            other => Err(format!("Unknown token length preset: {}", other)),
        }
    }
}

impl fmt::Display for TokenLengthPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The numeric code currently shown to the user
///
/// Always made of ASCII digits. Purely cosmetic, so unlike session tokens it
/// is not wrapped in a secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayCode(String);

impl DisplayCode {
    pub(crate) fn new(digits: String) -> Self {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits)
    }

    /// The digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no digits (never true for generated codes)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DisplayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper for the mock session token
#[derive(Clone, Debug)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    /// Create a new SessionToken from a token string
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    /// Expose the token value (use with caution!)
    ///
    /// Only call this when writing the token to the local store.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// Profile of the signed-in user, stored as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An active mock session
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: SessionToken,
}
