// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog invariant checks.
//!
//! The ranker copes with a messy registry (duplicates are skipped, missing
//! text never matches), so these are reported, not raised. `inspect` prints
//! them and loading logs them.

use crate::locale::Locale;
use crate::search::dedup::duplicate_ids;
use crate::types::{CalculatorRecord, Category, CategoryId};
use std::collections::HashSet;
use thiserror::Error;

/// One broken invariant in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("calculator id '{id}' appears more than once")]
    DuplicateRecordId { id: String },

    #[error("calculator '{id}' has no {locale} title")]
    MissingTitle { id: String, locale: Locale },

    #[error("calculator '{id}' refers to unknown category '{category}'")]
    UnknownCategory { id: String, category: CategoryId },

    #[error("category id '{id}' appears more than once")]
    DuplicateCategoryId { id: CategoryId },

    #[error("category '{id}' has no {locale} name")]
    MissingCategoryName { id: CategoryId, locale: Locale },
}

/// Every invariant violation, records first, in catalog order.
pub fn validate(records: &[CalculatorRecord], categories: &[Category]) -> Vec<CatalogIssue> {
    let mut issues: Vec<CatalogIssue> = duplicate_ids(records)
        .into_iter()
        .map(|id| CatalogIssue::DuplicateRecordId { id: id.to_string() })
        .collect();

    let known: HashSet<&CategoryId> = categories.iter().map(|c| &c.id).collect();

    for record in records {
        for locale in Locale::ALL {
            if record.title.text(locale).trim().is_empty() {
                issues.push(CatalogIssue::MissingTitle {
                    id: record.id.clone(),
                    locale,
                });
            }
        }
        if !known.contains(&record.category) {
            issues.push(CatalogIssue::UnknownCategory {
                id: record.id.clone(),
                category: record.category.clone(),
            });
        }
    }

    let mut seen: HashSet<&CategoryId> = HashSet::new();
    for category in categories {
        if !seen.insert(&category.id) {
            issues.push(CatalogIssue::DuplicateCategoryId {
                id: category.id.clone(),
            });
        }
        for locale in Locale::ALL {
            if category.name.text(locale).trim().is_empty() {
                issues.push(CatalogIssue::MissingCategoryName {
                    id: category.id.clone(),
                    locale,
                });
            }
        }
    }

    issues
}
