// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the calculator catalog and its search results.
//!
//! Records come from the site's calculator registry and are read-only here.
//! Results borrow the record they describe, so a search never clones the
//! catalog; it only allocates the score and the list of matched fields.
//!
//! # Invariants
//!
//! - **CalculatorRecord**: `id` is unique within a catalog, and `title` has
//!   non-empty text for every supported locale. `Catalog::validate` reports
//!   violations; the ranker tolerates them (missing text simply never matches).
//!
//! - **RankedResult**: `score > 0`. Zero-score records never become results.

use crate::locale::Localized;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a calculator category (`"health"`, `"pregnancy"`, ...).
///
/// Categories are data, not an enum: the registry owns the list and the
/// localized names, so a new category needs no code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId(id.to_string())
    }
}

// =============================================================================
// CATALOG TYPES
// =============================================================================

/// A calculator category with its display name in every locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: Localized<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Localized<String>>,
}

/// One calculator page as the search box sees it.
///
/// `keywords` are locale-agnostic: the registry lists English and Turkish
/// terms side by side, and both participate whichever locale is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRecord {
    pub id: String,
    pub category: CategoryId,
    pub title: Localized<String>,
    #[serde(default)]
    pub description: Localized<String>,
    /// Absent in the registry means no keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub featured: bool,
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Which heuristic contributed to a result's score.
///
/// The four title variants are mutually exclusive per record; every other
/// variant can appear alongside them. Keyword tags may repeat, once per
/// contributing keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchedField {
    TitleExact,
    TitleStart,
    Title,
    TitleFuzzy,
    Description,
    DescriptionFuzzy,
    KeywordExact,
    Keyword,
    KeywordFuzzy,
    Category,
    Popular,
    Featured,
}

impl MatchedField {
    /// Tag string, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::TitleExact => "title-exact",
            MatchedField::TitleStart => "title-start",
            MatchedField::Title => "title",
            MatchedField::TitleFuzzy => "title-fuzzy",
            MatchedField::Description => "description",
            MatchedField::DescriptionFuzzy => "description-fuzzy",
            MatchedField::KeywordExact => "keyword-exact",
            MatchedField::Keyword => "keyword",
            MatchedField::KeywordFuzzy => "keyword-fuzzy",
            MatchedField::Category => "category",
            MatchedField::Popular => "popular",
            MatchedField::Featured => "featured",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that scored above zero for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<'a> {
    #[serde(flatten)]
    pub record: &'a CalculatorRecord,
    pub score: f64,
    pub matched_fields: Vec<MatchedField>,
}

impl RankedResult<'_> {
    #[inline]
    pub fn id(&self) -> &str {
        &self.record.id
    }
}
