// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record deduplication for search.
//!
//! A calculator should appear at most once in search results. The registry is
//! supposed to have unique ids, but it is assembled from two translation
//! files and a merge slip can repeat an entry. Rather than letting both copies
//! score (and possibly outrank each other), the ranker keeps the first record
//! for each id and ignores the rest.
//!
//! **Invariant**: each record id appears at most once in search results.
//!
//! **Verified by**: `prop_no_duplicate_ids_in_results` (tests/property/search_results.rs)

use crate::types::CalculatorRecord;
use std::collections::HashSet;

/// First record for each id, in catalog order.
pub fn unique_by_id(records: &[CalculatorRecord]) -> Vec<&CalculatorRecord> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|&record| seen.insert(record.id.as_str()))
        .collect()
}

/// Ids that occur more than once, each reported once, in first-repeat order.
pub fn duplicate_ids(records: &[CalculatorRecord]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut reported: HashSet<&str> = HashSet::new();
    records
        .iter()
        .map(|record| record.id.as_str())
        .filter(|&id| !seen.insert(id) && reported.insert(id))
        .collect()
}
