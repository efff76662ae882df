//! Passphrase denylist for Keyhaven.
//!
//! Forbidden-substring screen applied to every candidate passphrase before
//! it is offered to the user.

/// Tokens rejected by the default denylist. Includes the product name so a
/// generated phrase never advertises where it came from.
const DEFAULT_TOKENS: [&str; 7] = [
    "password", "qwerty", "123456", "admin", "login", "test", "keyhaven",
];

/// Case-insensitive forbidden-substring matcher.
#[derive(Debug, Clone)]
pub struct Denylist {
    tokens: Vec<String>,
}

impl Denylist {
    /// Builds a denylist from custom tokens. Matching ignores case.
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// True if any token occurs anywhere in the phrase. A single match
    /// rejects the whole phrase.
    pub fn is_blocked(&self, phrase: &str) -> bool {
        let lowered = phrase.to_lowercase();
        self.tokens.iter().any(|token| lowered.contains(token))
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(&DEFAULT_TOKENS)
    }
}
