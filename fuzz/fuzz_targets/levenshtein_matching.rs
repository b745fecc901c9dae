// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Verifies that the bounded distance check agrees with the full one and that
//! similarity stays in [0, 1] and is symmetric. Fuzzy ranking is built on
//! these; if they disagree, a typo matches in one place and not another.

#![no_main]

use arbitrary::Arbitrary;
use calcsearch::{calculate_similarity, levenshtein, levenshtein_within, similar_at};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max_distance: u8,
    /// Threshold in hundredths
    threshold: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(50).collect();
    let b: String = input.b.chars().take(50).collect();
    let k = input.max_distance as usize % 64;
    let t = (input.threshold % 101) as f64 / 100.0;

    let d = levenshtein(&a, &b);
    assert_eq!(d, levenshtein(&b, &a), "distance not symmetric");
    assert!(d <= a.chars().count().max(b.chars().count()));
    assert_eq!(levenshtein_within(&a, &b, k), d <= k, "bounded check disagrees at k={}", k);

    let s = calculate_similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    assert_eq!(similar_at(&a, &b, t), s >= t, "threshold check disagrees at t={}", t);
});
