// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity scores and the threshold rule the ranker applies.
//!
//! Similarity is `1 - distance / longer_len`, so it lands in `[0, 1]` and
//! reads as "fraction of the longer string that survived". Two empty strings
//! are identical (1.0).
//!
//! `fuzzy_match` layers three checks, cheapest first:
//!
//! ```text
//! whole query is a substring of target   → match
//! similarity(query, target) ≥ t          → match
//! every query word ~ some target word    → match
//!   (word prefix, or word similarity ≥ t)
//! ```

use super::levenshtein::{levenshtein, levenshtein_within};
use crate::utils::{char_len, fold_case};

/// `1 - levenshtein(a, b) / max(len(a), len(b))`, counted in chars.
///
/// Case-sensitive: fold both sides first if that matters.
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    let longer = char_len(a).max(char_len(b));
    if longer == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longer as f64
}

/// Largest edit distance `d` with `1 - d / longer >= threshold`.
///
/// Evaluated with the same float expression as `calculate_similarity`, so a
/// bounded check agrees with the unbounded one at every threshold.
fn max_edits(longer: usize, threshold: f64) -> usize {
    let estimate = ((1.0 - threshold) * longer as f64).floor().max(0.0) as usize;
    let mut d = (estimate + 2).min(longer);
    while d > 0 && 1.0 - d as f64 / (longer as f64) < threshold {
        d -= 1;
    }
    d
}

/// Is `calculate_similarity(a, b) >= threshold`?
///
/// Same answer as computing the similarity, but the bounded DP bails out as
/// soon as the threshold is out of reach.
pub fn similar_at(a: &str, b: &str, threshold: f64) -> bool {
    let longer = char_len(a).max(char_len(b));
    if longer == 0 {
        return 1.0 >= threshold;
    }
    // NaN compares false against every similarity
    if threshold > 1.0 || threshold.is_nan() {
        return false;
    }
    levenshtein_within(a, b, max_edits(longer, threshold))
}

/// Fuzzy match on inputs that are already case-folded.
///
/// The ranker folds every field once per record and calls this directly.
pub(crate) fn fuzzy_match_folded(query: &str, target: &str, threshold: f64) -> bool {
    if target.contains(query) {
        return true;
    }
    if similar_at(query, target, threshold) {
        return true;
    }

    let target_words: Vec<&str> = target.split_whitespace().collect();
    if target_words.is_empty() {
        return false;
    }
    query.split_whitespace().all(|query_word| {
        target_words
            .iter()
            .any(|word| word.starts_with(query_word) || similar_at(query_word, word, threshold))
    })
}

/// Does `query` fuzzily match `target` at `threshold`? Case-insensitive.
///
/// A whole-query substring short-circuits everything. Otherwise the strings
/// must be similar as a whole, or every query word must prefix-match or be
/// similar to some word of the target.
///
/// # Example
///
/// ```
/// use calcsearch::fuzzy_match;
///
/// assert!(fuzzy_match("calorei", "Calorie", 0.7));
/// assert!(fuzzy_match("body fat", "Body Fat Percentage", 0.7));
/// assert!(fuzzy_match("bdy percntage", "Body Fat Percentage", 0.7));
/// assert!(!fuzzy_match("pregnancy", "BMI Calculator", 0.7));
/// ```
pub fn fuzzy_match(query: &str, target: &str, threshold: f64) -> bool {
    fuzzy_match_folded(&fold_case(query), &fold_case(target), threshold)
}
