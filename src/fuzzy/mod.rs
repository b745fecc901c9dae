// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: plain Levenshtein distance, and the similarity/threshold
//! rules the ranker uses to decide whether "calorei" is close enough to
//! "calorie". Both count Unicode scalar values, never bytes, so Turkish
//! letters cost one edit like any other.

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
