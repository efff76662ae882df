use std::fmt;

use serde::{Deserialize, Serialize};

/// A generated secret value: a random character credential or an accepted
/// passphrase. Immutable once produced; "regenerate" always means a new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Strength bucket for an entropy estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrengthLabel {
    None,
    VeryWeak,
    Weak,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Human-readable form shown next to the strength meter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "None",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entropy estimate for a credential: heuristic bit count plus its label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntropyScore {
    pub bits: u32,
    pub label: StrengthLabel,
}

/// A saved vault entry. The secret is stored obfuscated and only turned back
/// into plaintext on an explicit reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
    pub id: String,
    /// Stable identifier of the owning account; also the obfuscation key source.
    pub account_id: String,
    pub display_name: String,
    pub username: Option<String>,
    pub obfuscated_secret: String,
    pub created_at: i64,
    pub updated_at: i64,
}
