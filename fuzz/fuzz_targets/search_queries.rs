// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search over the sample registry.
//!
//! Any UTF-8 query in any locale must return a ranked, deduplicated list of
//! positive scores, and never panic.

#![no_main]

use arbitrary::Arbitrary;
use calcsearch::{testing::sample_catalog, Catalog, Locale};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    turkish: bool,
    limit: u8,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

fuzz_target!(|input: SearchInput| {
    // Cap length to avoid timeouts in the quadratic edit distance
    let query: String = input.query.chars().take(64).collect();
    let locale = if input.turkish { Locale::Tr } else { Locale::En };
    let catalog = CATALOG.get_or_init(sample_catalog);

    let results = catalog.search(&query, locale);

    if query.trim().is_empty() {
        assert!(results.is_empty(), "blank query returned results");
    }
    let mut seen = HashSet::new();
    for result in &results {
        assert!(result.score > 0.0, "non-positive score for {}", result.id());
        assert!(seen.insert(result.id()), "duplicate id {}", result.id());
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order");
    }

    let total = results.len();
    let groups = catalog.group_by_category(results, locale);
    assert_eq!(groups.iter().map(|g| g.results.len()).sum::<usize>(), total);

    let limit = input.limit as usize;
    let out = catalog.suggestions(&query, locale, limit);
    assert!(out.len() <= limit);
});
