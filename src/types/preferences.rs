use serde::{Deserialize, Serialize};

use super::policy::GenerationPolicy;

/// Persisted generator controls.
///
/// Mirrors the dials a user can set: random-credential policy plus the
/// passphrase word count. Values loaded from disk are clamped into the
/// supported ranges rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorPreferences {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
    pub passphrase_words: u32,
}

impl GeneratorPreferences {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 64;
    pub const MIN_WORDS: u32 = 1;
    pub const MAX_WORDS: u32 = 10;

    /// Returns a copy with out-of-range values pulled into the supported
    /// ranges.
    pub fn clamped(mut self) -> Self {
        self.length = self.length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
        self.passphrase_words = self
            .passphrase_words
            .clamp(Self::MIN_WORDS, Self::MAX_WORDS);
        self
    }

    /// The generation policy these preferences describe.
    pub fn policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.length,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            digits: self.digits,
            symbols: self.symbols,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}

impl Default for GeneratorPreferences {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
            passphrase_words: 3,
        }
    }
}
