//! Property-based tests for credential generation.
//!
//! These tests verify that generated credentials honor the policy's length
//! and character classes for arbitrary policies.

use keyhaven::services::generator::{
    resolve_alphabet, CredentialGenerator, CredentialGeneratorTrait,
};
use keyhaven::types::policy::GenerationPolicy;
use proptest::prelude::*;

fn arb_policy() -> impl Strategy<Value = GenerationPolicy> {
    (
        0usize..=64,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(length, lowercase, uppercase, digits, symbols, exclude_ambiguous)| {
                GenerationPolicy {
                    length,
                    lowercase,
                    uppercase,
                    digits,
                    symbols,
                    exclude_ambiguous,
                }
            },
        )
}

// **Property 1: Generated length matches the policy**
//
// *For any* policy, the generated credential SHALL have exactly
// `policy.length` characters when the resolved alphabet is non-empty, and
// zero characters otherwise.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn generated_length_matches_policy(policy in arb_policy()) {
        let generator = CredentialGenerator::new();
        let credential = generator.generate(&policy);

        let expected = if resolve_alphabet(&policy).is_empty() {
            0
        } else {
            policy.length
        };
        prop_assert_eq!(
            credential.char_count(),
            expected,
            "wrong length for policy {:?}",
            policy
        );
    }
}

// **Property 2: Every character comes from the resolved alphabet**
//
// *For any* policy, every character of the generated credential SHALL be a
// member of the alphabet the policy resolves to.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn generated_characters_are_members_of_the_alphabet(policy in arb_policy()) {
        let generator = CredentialGenerator::new();
        let alphabet = resolve_alphabet(&policy);
        let credential = generator.generate(&policy);

        for c in credential.as_str().chars() {
            prop_assert!(
                alphabet.contains(&c),
                "character {:?} outside alphabet for policy {:?}",
                c,
                policy
            );
        }
    }
}

// **Property 3: Ambiguous exclusion is absolute**
//
// *For any* policy with `exclude_ambiguous` set, the generated credential
// SHALL contain none of the confusable glyphs I, l, 1, O, 0.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn excluded_ambiguous_characters_never_appear(
        length in 1usize..=64,
        lowercase in any::<bool>(),
        uppercase in any::<bool>(),
        digits in any::<bool>(),
        symbols in any::<bool>(),
    ) {
        let policy = GenerationPolicy {
            length,
            lowercase,
            uppercase,
            digits,
            symbols,
            exclude_ambiguous: true,
        };
        let generator = CredentialGenerator::new();
        let credential = generator.generate(&policy);

        for c in ['I', 'l', '1', 'O', '0'] {
            prop_assert!(
                !credential.as_str().contains(c),
                "ambiguous character {:?} in {:?}",
                c,
                credential
            );
        }
    }
}
