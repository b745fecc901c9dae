// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind search ranking.
//!
//! # Default point values
//!
//! | Heuristic              | Points | Notes                                  |
//! |------------------------|--------|----------------------------------------|
//! | title exact            | 100    | the four title rules are exclusive     |
//! | title starts with      | 80     |                                        |
//! | title contains         | 60     |                                        |
//! | title fuzzy (≥ 0.7)    | 40     |                                        |
//! | description contains   | 30     | exclusive with description fuzzy       |
//! | description fuzzy (≥ 0.6) | 15  |                                        |
//! | keyword exact          | 50     | per keyword, one rule each             |
//! | keyword contains       | 25     |                                        |
//! | keyword fuzzy (≥ 0.7)  | 12     |                                        |
//! | category name contains | 20     |                                        |
//! | popular                | 5      | only on records that matched text      |
//! | featured               | 3      | only on records that matched text      |
//!
//! The gaps matter for one property: an exact title beats a title substring
//! when everything else is equal (100 > 60). Custom weights that break that
//! ordering are accepted; the ranker just sums whatever it is given.

use serde::{Deserialize, Serialize};

pub const TITLE_EXACT_SCORE: f64 = 100.0;
pub const TITLE_START_SCORE: f64 = 80.0;
pub const TITLE_CONTAINS_SCORE: f64 = 60.0;
pub const TITLE_FUZZY_SCORE: f64 = 40.0;

pub const DESCRIPTION_CONTAINS_SCORE: f64 = 30.0;
pub const DESCRIPTION_FUZZY_SCORE: f64 = 15.0;

pub const KEYWORD_EXACT_SCORE: f64 = 50.0;
pub const KEYWORD_CONTAINS_SCORE: f64 = 25.0;
pub const KEYWORD_FUZZY_SCORE: f64 = 12.0;

pub const CATEGORY_SCORE: f64 = 20.0;

pub const POPULAR_BONUS: f64 = 5.0;
pub const FEATURED_BONUS: f64 = 3.0;

/// Minimum similarity for a fuzzy title match.
pub const TITLE_FUZZY_THRESHOLD: f64 = 0.7;
/// Descriptions are long and loosely worded, so the bar is lower.
pub const DESCRIPTION_FUZZY_THRESHOLD: f64 = 0.6;
pub const KEYWORD_FUZZY_THRESHOLD: f64 = 0.7;

/// Point values and fuzzy thresholds used by the ranker.
///
/// Deserializes from a partial JSON object; missing fields keep their
/// defaults, so `{"popular": 0}` switches off only the popularity bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weights {
    pub title_exact: f64,
    pub title_start: f64,
    pub title_contains: f64,
    pub title_fuzzy: f64,
    pub description_contains: f64,
    pub description_fuzzy: f64,
    pub keyword_exact: f64,
    pub keyword_contains: f64,
    pub keyword_fuzzy: f64,
    pub category: f64,
    pub popular: f64,
    pub featured: f64,
    pub title_fuzzy_threshold: f64,
    pub description_fuzzy_threshold: f64,
    pub keyword_fuzzy_threshold: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title_exact: TITLE_EXACT_SCORE,
            title_start: TITLE_START_SCORE,
            title_contains: TITLE_CONTAINS_SCORE,
            title_fuzzy: TITLE_FUZZY_SCORE,
            description_contains: DESCRIPTION_CONTAINS_SCORE,
            description_fuzzy: DESCRIPTION_FUZZY_SCORE,
            keyword_exact: KEYWORD_EXACT_SCORE,
            keyword_contains: KEYWORD_CONTAINS_SCORE,
            keyword_fuzzy: KEYWORD_FUZZY_SCORE,
            category: CATEGORY_SCORE,
            popular: POPULAR_BONUS,
            featured: FEATURED_BONUS,
            title_fuzzy_threshold: TITLE_FUZZY_THRESHOLD,
            description_fuzzy_threshold: DESCRIPTION_FUZZY_THRESHOLD,
            keyword_fuzzy_threshold: KEYWORD_FUZZY_THRESHOLD,
        }
    }
}

/// Everything a single search call can be configured with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub weights: Weights,
    /// Keep only the best `limit` results. `None` keeps them all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}
