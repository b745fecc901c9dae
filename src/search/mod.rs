// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search entry points: rank a catalog for a query.
//!
//! `search` is the whole pipeline in one call:
//!
//! ```text
//! normalize query ──▶ drop duplicate ids ──▶ score every record ──▶ stable sort
//!   (blank → [])        (first one wins)      (score 0 → dropped)   (ties keep
//!                                                                  catalog order)
//! ```
//!
//! Every call is a pure function of its inputs. Nothing is cached between
//! calls, so concurrent searches over the same catalog are fine.

pub mod dedup;
pub mod group;
pub mod highlight;
pub mod suggest;

use crate::locale::Locale;
use crate::popularity::{PopularitySource, RecordFlags};
use crate::scoring::ranking::{compare_results, Scorer};
use crate::scoring::SearchOptions;
use crate::types::{CalculatorRecord, Category, RankedResult};
use crate::utils::normalize_query;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank `records` for `query` in `locale` with default weights.
///
/// No category table is consulted, so the category rule never fires; use
/// `search_with` (or `Catalog::search`) to include category names.
///
/// # Example
///
/// ```
/// use calcsearch::{search, Locale, testing::make_record};
///
/// let records = vec![
///     make_record("bmi", "health", "BMI Calculator", "VKİ Hesaplama"),
///     make_record("water", "health", "Water Intake", "Su Tüketimi"),
/// ];
/// let results = search(&records, "bmi", Locale::En);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id(), "bmi");
/// ```
pub fn search<'a>(
    records: &'a [CalculatorRecord],
    query: &str,
    locale: Locale,
) -> Vec<RankedResult<'a>> {
    search_with(
        records,
        &[],
        query,
        locale,
        &SearchOptions::default(),
        &RecordFlags,
    )
}

/// Rank `records` with an explicit category table, options and popularity source.
pub fn search_with<'a>(
    records: &'a [CalculatorRecord],
    categories: &[Category],
    query: &str,
    locale: Locale,
    options: &SearchOptions,
    popularity: &dyn PopularitySource,
) -> Vec<RankedResult<'a>> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };

    let scorer = Scorer::new(&query, locale, &options.weights, categories, popularity);
    let candidates = dedup::unique_by_id(records);

    let mut results = score_all(&scorer, &candidates);
    // sort_by is stable: equal scores keep catalog order
    results.sort_by(compare_results);
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    debug!(
        query = %query,
        %locale,
        candidates = candidates.len(),
        hits = results.len(),
        "search"
    );
    results
}

/// Score every candidate, keeping catalog order.
#[cfg(feature = "parallel")]
fn score_all<'a>(scorer: &Scorer<'_>, candidates: &[&'a CalculatorRecord]) -> Vec<RankedResult<'a>> {
    // rayon's collect keeps input order, so the stable sort still sees catalog order
    candidates
        .par_iter()
        .filter_map(|&record| scorer.score(record))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a>(scorer: &Scorer<'_>, candidates: &[&'a CalculatorRecord]) -> Vec<RankedResult<'a>> {
    candidates
        .iter()
        .filter_map(|&record| scorer.score(record))
        .collect()
}
