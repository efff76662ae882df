//! Unit tests for the Credential Generator.
//!
//! Tests policy resolution, length handling, class restriction, ambiguous
//! character exclusion, and the empty-alphabet edge case.

use keyhaven::services::generator::{
    resolve_alphabet, CredentialGenerator, CredentialGeneratorTrait,
};
use keyhaven::types::policy::GenerationPolicy;

fn policy(
    length: usize,
    lowercase: bool,
    uppercase: bool,
    digits: bool,
    symbols: bool,
) -> GenerationPolicy {
    GenerationPolicy {
        length,
        lowercase,
        uppercase,
        digits,
        symbols,
        exclude_ambiguous: false,
    }
}

// ─── Length ───

#[test]
fn test_generate_default_policy_length() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&GenerationPolicy::default());
    assert_eq!(credential.char_count(), 16);
}

#[test]
fn test_generate_custom_length() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(32, true, true, true, false));
    assert_eq!(credential.char_count(), 32);
}

#[test]
fn test_generate_length_one() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(1, true, true, true, true));
    assert_eq!(credential.char_count(), 1);
}

#[test]
fn test_generate_zero_length() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(0, true, true, true, true));
    assert!(credential.is_empty());
}

// ─── Class restriction ───

#[test]
fn test_generate_only_lowercase() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(20, true, false, false, false));
    assert_eq!(credential.char_count(), 20);
    assert!(credential.as_str().chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn test_generate_only_uppercase() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(20, false, true, false, false));
    assert!(credential.as_str().chars().all(|c| c.is_ascii_uppercase()));
}

#[test]
fn test_generate_only_digits() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(10, false, false, true, false));
    assert_eq!(credential.char_count(), 10);
    assert!(credential.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_generate_only_symbols() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(10, false, false, false, true));
    assert!(credential
        .as_str()
        .chars()
        .all(|c| !c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_letters_and_digits_never_contains_symbols() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(64, true, true, true, false));
    assert!(credential.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

// ─── Empty alphabet ───

#[test]
fn test_all_classes_disabled_yields_empty_credential() {
    let generator = CredentialGenerator::new();
    let credential = generator.generate(&policy(12, false, false, false, false));
    assert!(credential.is_empty());
    assert_eq!(credential.char_count(), 0);
}

// ─── Ambiguous exclusion ───

#[test]
fn test_exclude_ambiguous_removes_confusable_glyphs() {
    let generator = CredentialGenerator::new();
    let policy = GenerationPolicy {
        length: 64,
        exclude_ambiguous: true,
        ..GenerationPolicy::default()
    };
    let credential = generator.generate(&policy);
    for c in ['I', 'l', '1', 'O', '0'] {
        assert!(
            !credential.as_str().contains(c),
            "credential should not contain {:?}",
            c
        );
    }
}

#[test]
fn test_exclude_ambiguous_shrinks_alphabet_by_five() {
    let with = resolve_alphabet(&GenerationPolicy {
        exclude_ambiguous: false,
        ..GenerationPolicy::default()
    });
    let without = resolve_alphabet(&GenerationPolicy {
        exclude_ambiguous: true,
        ..GenerationPolicy::default()
    });
    assert_eq!(without.len(), with.len() - 5);
}

// ─── Alphabet resolution ───

#[test]
fn test_alphabet_concatenation_order() {
    let alphabet: String = resolve_alphabet(&policy(1, true, true, true, false))
        .into_iter()
        .collect();
    assert!(alphabet.starts_with("abcdefghijklmnopqrstuvwxyz"));
    assert!(alphabet.ends_with("0123456789"));
}

#[test]
fn test_alphabet_empty_when_all_disabled() {
    assert!(resolve_alphabet(&policy(16, false, false, false, false)).is_empty());
}

#[test]
fn test_generated_characters_come_from_alphabet() {
    let generator = CredentialGenerator::new();
    let policy = policy(64, true, false, true, true);
    let alphabet = resolve_alphabet(&policy);
    let credential = generator.generate(&policy);
    for c in credential.as_str().chars() {
        assert!(alphabet.contains(&c), "unexpected character {:?}", c);
    }
}

// ─── Randomness ───

#[test]
fn test_generate_uniqueness() {
    let generator = CredentialGenerator::new();
    let policy = policy(20, true, true, true, true);
    let pw1 = generator.generate(&policy);
    let pw2 = generator.generate(&policy);
    // Two random credentials should almost certainly differ
    assert_ne!(pw1, pw2);
}

#[test]
fn test_long_sample_uses_most_of_the_alphabet() {
    let generator = CredentialGenerator::new();
    let policy = policy(2000, true, true, true, true);
    let alphabet = resolve_alphabet(&policy);
    let credential = generator.generate(&policy);

    let used: std::collections::HashSet<char> = credential.as_str().chars().collect();
    // With 2000 draws over 91 characters, a large majority of the alphabet
    // shows up unless the draws are badly skewed.
    assert!(
        used.len() > alphabet.len() / 2,
        "only {} of {} characters appeared",
        used.len(),
        alphabet.len()
    );
}
