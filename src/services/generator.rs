//! Credential Generator for Keyhaven.
//!
//! Produces random character credentials from a class policy, drawing from
//! the system CSPRNG.

use ring::rand::{SecureRandom, SystemRandom};

use crate::types::credential::Credential;
use crate::types::policy::GenerationPolicy;

/// Class alphabets, concatenated in this order when enabled.
const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_CHARS: &str = "0123456789";
const SYMBOL_CHARS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Characters dropped when the policy excludes ambiguous glyphs.
const AMBIGUOUS_CHARS: [char; 5] = ['I', 'l', '1', 'O', '0'];

/// Trait defining credential generation.
pub trait CredentialGeneratorTrait {
    /// Generates a credential of exactly `policy.length` characters. A
    /// policy whose alphabet resolves empty yields an empty credential.
    fn generate(&self, policy: &GenerationPolicy) -> Credential;
}

/// Resolves a policy to its effective alphabet: enabled class ranges in
/// fixed order (lowercase, uppercase, digits, symbols), minus the ambiguous
/// characters when excluded.
pub fn resolve_alphabet(policy: &GenerationPolicy) -> Vec<char> {
    let mut charset = String::new();
    if policy.lowercase {
        charset.push_str(LOWERCASE_CHARS);
    }
    if policy.uppercase {
        charset.push_str(UPPERCASE_CHARS);
    }
    if policy.digits {
        charset.push_str(DIGIT_CHARS);
    }
    if policy.symbols {
        charset.push_str(SYMBOL_CHARS);
    }

    if policy.exclude_ambiguous {
        charset
            .chars()
            .filter(|c| !AMBIGUOUS_CHARS.contains(c))
            .collect()
    } else {
        charset.chars().collect()
    }
}

/// Credential generator backed by the system CSPRNG.
pub struct CredentialGenerator {
    rng: SystemRandom,
}

impl CredentialGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Draws `count` independent u32 values from the CSPRNG.
    fn random_u32s(&self, count: usize) -> Vec<u32> {
        let mut bytes = vec![0u8; count * 4];
        self.rng
            .fill(&mut bytes)
            .expect("Failed to generate random bytes");
        bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }
}

impl Default for CredentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialGeneratorTrait for CredentialGenerator {
    fn generate(&self, policy: &GenerationPolicy) -> Credential {
        let alphabet = resolve_alphabet(policy);
        if alphabet.is_empty() || policy.length == 0 {
            return Credential::new("");
        }

        // Each character is an independent u32 draw reduced modulo the
        // alphabet size. With at most 91 characters the deviation from
        // uniform is below 2^-25 per character.
        let value: String = self
            .random_u32s(policy.length)
            .iter()
            .map(|v| alphabet[*v as usize % alphabet.len()])
            .collect();
        Credential::new(value)
    }
}
