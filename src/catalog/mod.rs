// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The calculator catalog: records plus the category table.
//!
//! Loaded once per session and never mutated afterwards. Loading checks the
//! registry's invariants and logs what it finds, but only refuses files it
//! cannot read at all (I/O, bad JSON, unknown format version); a duplicate
//! id or a missing translation should not take the search box down.

mod manifest;
mod validate;

pub use manifest::{CatalogFile, CATALOG_VERSION};
pub use validate::{validate, CatalogIssue};

use crate::error::CatalogError;
use crate::locale::Locale;
use crate::popularity::{PopularitySource, RecordFlags};
use crate::scoring::SearchOptions;
use crate::search::group::{group_by_category, CategoryGroup};
use crate::search::suggest::suggestions;
use crate::search::search_with;
use crate::types::{CalculatorRecord, Category, CategoryId, RankedResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<CalculatorRecord>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog in memory. No validation; call `validate` if needed.
    pub fn new(records: Vec<CalculatorRecord>, categories: Vec<Category>) -> Self {
        Self {
            records,
            categories,
        }
    }

    /// Build from an already-parsed registry file.
    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        if file.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: file.version,
                expected: CATALOG_VERSION,
            });
        }
        let catalog = Self::new(file.calculators, file.categories);
        for issue in catalog.validate() {
            warn!(%issue, "catalog invariant violated");
        }
        debug!(
            calculators = catalog.records.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_file(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_file(serde_json::from_reader(reader)?)
    }

    /// Read a registry JSON file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The registry representation, for writing back out.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            version: CATALOG_VERSION,
            categories: self.categories.clone(),
            calculators: self.records.clone(),
        }
    }

    pub fn records(&self) -> &[CalculatorRecord] {
        &self.records
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        validate(&self.records, &self.categories)
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    /// First record with this id.
    pub fn get(&self, id: &str) -> Option<&CalculatorRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    /// Display name of a category in `locale`, if the table has one.
    pub fn category_name(&self, id: &CategoryId, locale: Locale) -> Option<&str> {
        self.category(id)
            .and_then(|category| category.name.get(locale))
            .map(String::as_str)
    }

    /// Records in a category, catalog order.
    pub fn in_category<'a>(
        &'a self,
        id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a CalculatorRecord> + 'a {
        self.records.iter().filter(move |record| &record.category == id)
    }

    /// Up to `limit` records flagged popular, catalog order.
    pub fn popular(&self, limit: usize) -> Vec<&CalculatorRecord> {
        self.records.iter().filter(|r| r.popular).take(limit).collect()
    }

    /// Up to `limit` records flagged featured, catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&CalculatorRecord> {
        self.records.iter().filter(|r| r.featured).take(limit).collect()
    }

    /// Other calculators from the same category: popular ones first, then
    /// the rest, each part in catalog order. Empty for an unknown id.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&CalculatorRecord> {
        let Some(anchor) = self.get(id) else {
            return Vec::new();
        };
        let mut siblings: Vec<&CalculatorRecord> = self
            .in_category(&anchor.category)
            .filter(|record| record.id != anchor.id)
            .collect();
        // Stable: popularity only reorders across the flag boundary
        siblings.sort_by_key(|record| !record.popular);
        siblings.truncate(limit);
        siblings
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Rank the catalog for `query` with default options.
    pub fn search(&self, query: &str, locale: Locale) -> Vec<RankedResult<'_>> {
        self.search_with(query, locale, &SearchOptions::default(), &RecordFlags)
    }

    pub fn search_with(
        &self,
        query: &str,
        locale: Locale,
        options: &SearchOptions,
        popularity: &dyn PopularitySource,
    ) -> Vec<RankedResult<'_>> {
        search_with(
            &self.records,
            &self.categories,
            query,
            locale,
            options,
            popularity,
        )
    }

    pub fn suggestions(&self, query: &str, locale: Locale, limit: usize) -> Vec<String> {
        suggestions(&self.records, query, locale, limit)
    }

    pub fn group_by_category<'a>(
        &self,
        results: Vec<RankedResult<'a>>,
        locale: Locale,
    ) -> Vec<CategoryGroup<'a>> {
        group_by_category(results, &self.categories, locale)
    }
}
