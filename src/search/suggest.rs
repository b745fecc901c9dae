// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions for the search box.
//!
//! Prefix-only and deliberately dumb: the dropdown under the input shows
//! titles and keywords that start with what the user has typed so far. Fuzzy
//! ranking is `search`'s job.

use crate::locale::Locale;
use crate::types::CalculatorRecord;
use crate::utils::{fold_case, normalize_query};
use std::collections::HashSet;

/// Up to `limit` distinct titles/keywords starting with `query`.
///
/// Candidates are visited in catalog order, each record offering its title in
/// `locale` and then its keywords. Matching is case-insensitive; the returned
/// strings keep their original casing. Distinctness is by exact string, so
/// "BMI" and "bmi" are two suggestions.
pub fn suggestions(
    records: &[CalculatorRecord],
    query: &str,
    locale: Locale,
    limit: usize,
) -> Vec<String> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };
    if limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(limit);

    let candidates = records.iter().flat_map(|record| {
        record
            .title
            .get(locale)
            .into_iter()
            .chain(record.keywords.iter())
    });

    for candidate in candidates {
        if fold_case(candidate).starts_with(&query) && seen.insert(candidate.as_str()) {
            out.push(candidate.clone());
            if out.len() == limit {
                break;
            }
        }
    }

    out
}
