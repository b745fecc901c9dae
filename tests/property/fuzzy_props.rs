//! Edit distance and similarity, checked against strsim as an oracle.

use calcsearch::{calculate_similarity, fuzzy_match, levenshtein, levenshtein_within, similar_at};
use proptest::prelude::*;

/// Short strings over a small alphabet, Turkish letters included, so that
/// random pairs are often close.
fn short_word() -> impl Strategy<Value = String> {
    "[abcçğıiöşü ]{0,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: distance agrees with strsim (both count chars, not bytes).
    #[test]
    fn prop_levenshtein_matches_oracle(a in short_word(), b in short_word()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: the bounded check agrees with the full distance at every bound.
    #[test]
    fn prop_levenshtein_within_agrees(a in short_word(), b in short_word(), k in 0usize..12) {
        prop_assert_eq!(levenshtein_within(&a, &b, k), levenshtein(&a, &b) <= k);
    }

    /// Property: similarity lies in [0, 1], is symmetric, and is 1 only for equal strings.
    #[test]
    fn prop_similarity_bounds(a in short_word(), b in short_word()) {
        let s = calculate_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert_eq!(s, calculate_similarity(&b, &a));
        prop_assert_eq!(s == 1.0, a == b);
    }

    /// Property: the early-exit threshold check gives the same answer as the full similarity.
    #[test]
    fn prop_similar_at_agrees(a in short_word(), b in short_word(), t in 0.0f64..=1.0) {
        prop_assert_eq!(similar_at(&a, &b, t), calculate_similarity(&a, &b) >= t);
    }

    /// Property: a query contained in the target always fuzzy-matches.
    #[test]
    fn prop_substring_always_matches(
        prefix in short_word(),
        query in "[abcçğıiöşü]{1,5}",
        suffix in short_word(),
        t in 0.0f64..=1.0,
    ) {
        let target = format!("{}{}{}", prefix, query, suffix);
        prop_assert!(fuzzy_match(&query, &target, t));
    }

    /// Property: fuzzy matching ignores case.
    #[test]
    fn prop_fuzzy_match_case_insensitive(a in "[a-z ]{1,10}", b in "[a-z ]{1,10}") {
        prop_assert_eq!(
            fuzzy_match(&a, &b, 0.7),
            fuzzy_match(&a.to_uppercase(), &b, 0.7)
        );
    }
}
