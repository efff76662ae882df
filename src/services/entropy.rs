//! Entropy Estimator for Keyhaven.
//!
//! Charset-size heuristic: detect which character classes a credential uses,
//! sum fixed per-class alphabet sizes, and report
//! `floor(length * log2(charset_size))` bits. The figure is an upper bound
//! that assumes uniform random draws; it sees no patterns or dictionary
//! words.

use crate::types::credential::{EntropyScore, StrengthLabel};

/// Per-class alphabet sizes used by the heuristic.
const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 33;

/// Bit count treated as a full strength meter.
const METER_CEILING_BITS: u32 = 128;

/// Estimated entropy of a credential in whole bits.
///
/// Character classes are detected, not counted: one digit anywhere adds the
/// full digit alphabet to the charset. Anything outside ASCII alphanumerics
/// counts as the symbol class. An empty credential scores zero.
pub fn calculate_entropy(credential: &str) -> u32 {
    if credential.is_empty() {
        return 0;
    }

    let mut charset_size = 0u32;
    if credential.chars().any(|c| c.is_ascii_lowercase()) {
        charset_size += LOWERCASE_SIZE;
    }
    if credential.chars().any(|c| c.is_ascii_uppercase()) {
        charset_size += UPPERCASE_SIZE;
    }
    if credential.chars().any(|c| c.is_ascii_digit()) {
        charset_size += DIGIT_SIZE;
    }
    if credential.chars().any(|c| !c.is_ascii_alphanumeric()) {
        charset_size += SYMBOL_SIZE;
    }

    let length = credential.chars().count() as f64;
    (length * f64::from(charset_size).log2()).floor() as u32
}

/// Maps a bit estimate to its strength bucket. Thresholds are inclusive at
/// the lower bound: 40 bits is already Weak, 80 bits already Very Strong.
pub fn strength_label(bits: u32) -> StrengthLabel {
    match bits {
        0 => StrengthLabel::None,
        1..=39 => StrengthLabel::VeryWeak,
        40..=59 => StrengthLabel::Weak,
        60..=79 => StrengthLabel::Strong,
        _ => StrengthLabel::VeryStrong,
    }
}

/// Scores a credential: bit estimate plus its label.
pub fn score(credential: &str) -> EntropyScore {
    let bits = calculate_entropy(credential);
    EntropyScore {
        bits,
        label: strength_label(bits),
    }
}

/// Meter fill percentage for a bit estimate, saturating at
/// [`METER_CEILING_BITS`].
pub fn strength_percent(bits: u32) -> u8 {
    (bits.min(METER_CEILING_BITS) * 100 / METER_CEILING_BITS) as u8
}
