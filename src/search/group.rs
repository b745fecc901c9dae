// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping ranked results under category headings.
//!
//! The results dropdown shows "Health", "Pregnancy", ... sections. Groups
//! appear in the order their first result appears, and each group keeps the
//! ranked order of its members, so the best hit of the best group stays on top.

use crate::locale::Locale;
use crate::types::{Category, CategoryId, RankedResult};
use serde::Serialize;
use std::collections::HashMap;

/// Heading for results whose category is missing from the table.
pub fn uncategorized_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Uncategorized",
        Locale::Tr => "Kategorisiz",
    }
}

/// Results sharing one category display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub name: String,
    pub results: Vec<RankedResult<'a>>,
}

/// Partition `results` by the locale's category display name.
///
/// Never drops a result: a category id with no table entry, or with no name
/// in `locale`, lands in the `uncategorized_label(locale)` group.
pub fn group_by_category<'a>(
    results: Vec<RankedResult<'a>>,
    categories: &[Category],
    locale: Locale,
) -> Vec<CategoryGroup<'a>> {
    let names: HashMap<&CategoryId, &str> = categories
        .iter()
        .filter_map(|category| {
            category
                .name
                .get(locale)
                .map(|name| (&category.id, name.as_str()))
        })
        .collect();

    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();

    for result in results {
        let name = names
            .get(&result.record.category)
            .copied()
            .unwrap_or_else(|| uncategorized_label(locale));

        let slot = match slot_by_name.get(name) {
            Some(&slot) => slot,
            None => {
                slot_by_name.insert(name.to_string(), groups.len());
                groups.push(CategoryGroup {
                    name: name.to_string(),
                    results: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[slot].results.push(result);
    }

    groups
}
