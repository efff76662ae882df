use serde::{Deserialize, Serialize};

/// Character-class policy for random credential generation.
///
/// Each flag enables one character class in the effective alphabet. A policy
/// with every class disabled resolves to an empty alphabet and generates an
/// empty credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop visually confusable characters (I, l, 1, O, 0) from the alphabet.
    pub exclude_ambiguous: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}
