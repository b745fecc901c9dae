// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-record scoring and result ordering.
//!
//! A `Scorer` is built once per search call: it holds the folded query, the
//! locale, the weights, the locale's category names and the popularity
//! source. Scoring a record reads those and the record, nothing else, so
//! records can be scored in any order (or in parallel) with the same result.
//!
//! Evaluation order, which is also the order of `matched_fields`:
//!
//! ```text
//! title        exact → starts with → contains → fuzzy   (first hit only)
//! description  contains → fuzzy                        (first hit only)
//! keywords     for each: exact → contains → fuzzy      (first hit per keyword)
//! category     name contains
//! bonuses      popular, featured                       (always)
//! ```

use crate::fuzzy::fuzzy_match_folded;
use crate::locale::Locale;
use crate::popularity::PopularitySource;
use crate::scoring::Weights;
use crate::types::{CalculatorRecord, Category, CategoryId, MatchedField, RankedResult};
use crate::utils::fold_case;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Running total for one record.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    fields: Vec<MatchedField>,
}

impl Tally {
    #[inline]
    fn add(&mut self, field: MatchedField, points: f64) {
        self.score += points;
        self.fields.push(field);
    }
}

/// Scores records against one query.
pub struct Scorer<'a> {
    query: &'a str,
    locale: Locale,
    weights: &'a Weights,
    /// Folded category names for `locale`.
    category_names: HashMap<&'a CategoryId, String>,
    popularity: &'a dyn PopularitySource,
}

impl<'a> Scorer<'a> {
    /// `query` must already be trimmed and case-folded (see `normalize_query`).
    pub fn new(
        query: &'a str,
        locale: Locale,
        weights: &'a Weights,
        categories: &'a [Category],
        popularity: &'a dyn PopularitySource,
    ) -> Self {
        let category_names = categories
            .iter()
            .filter_map(|category| {
                category
                    .name
                    .get(locale)
                    .map(|name| (&category.id, fold_case(name)))
            })
            .collect();
        Self {
            query,
            locale,
            weights,
            category_names,
            popularity,
        }
    }

    /// Score one record. `None` when the total is zero.
    ///
    /// Bonuses count on their own: a popular record scores its bonus for any
    /// non-blank query.
    pub fn score<'r>(&self, record: &'r CalculatorRecord) -> Option<RankedResult<'r>> {
        let w = self.weights;
        let query = self.query;
        let mut tally = Tally::default();

        let title = fold_case(record.title.text(self.locale));
        if !title.is_empty() {
            if title == query {
                tally.add(MatchedField::TitleExact, w.title_exact);
            } else if title.starts_with(query) {
                tally.add(MatchedField::TitleStart, w.title_start);
            } else if title.contains(query) {
                tally.add(MatchedField::Title, w.title_contains);
            } else if fuzzy_match_folded(query, &title, w.title_fuzzy_threshold) {
                tally.add(MatchedField::TitleFuzzy, w.title_fuzzy);
            }
        }

        let description = fold_case(record.description.text(self.locale));
        if !description.is_empty() {
            if description.contains(query) {
                tally.add(MatchedField::Description, w.description_contains);
            } else if fuzzy_match_folded(query, &description, w.description_fuzzy_threshold) {
                tally.add(MatchedField::DescriptionFuzzy, w.description_fuzzy);
            }
        }

        for keyword in &record.keywords {
            let keyword = fold_case(keyword);
            if keyword.is_empty() {
                continue;
            }
            if keyword == query {
                tally.add(MatchedField::KeywordExact, w.keyword_exact);
            } else if keyword.contains(query) {
                tally.add(MatchedField::Keyword, w.keyword_contains);
            } else if fuzzy_match_folded(query, &keyword, w.keyword_fuzzy_threshold) {
                tally.add(MatchedField::KeywordFuzzy, w.keyword_fuzzy);
            }
        }

        if self
            .category_names
            .get(&record.category)
            .is_some_and(|name| name.contains(query))
        {
            tally.add(MatchedField::Category, w.category);
        }

        if self.popularity.is_popular(record) {
            tally.add(MatchedField::Popular, w.popular);
        }
        if record.featured {
            tally.add(MatchedField::Featured, w.featured);
        }

        (tally.score > 0.0).then(|| RankedResult {
            record,
            score: tally.score,
            matched_fields: tally.fields,
        })
    }
}

/// Order results best-first by score.
///
/// Equal scores compare `Equal`, so a stable sort keeps catalog order for
/// ties. NaN (only reachable through hostile custom weights) sorts as equal.
pub fn compare_results(a: &RankedResult<'_>, b: &RankedResult<'_>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}
