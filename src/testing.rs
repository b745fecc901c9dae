//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::locale::Localized;
use crate::types::{CalculatorRecord, Category, CategoryId};

/// The registry shipped in `data/catalog.sample.json`.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../data/catalog.sample.json");

/// Create a calculator record with titles and nothing else.
///
/// Description and keywords are empty, flags are off, so the only thing that
/// can match is the title (and the category name, if a table is supplied).
pub fn make_record(id: &str, category: &str, title_en: &str, title_tr: &str) -> CalculatorRecord {
    CalculatorRecord {
        id: id.to_string(),
        category: CategoryId::new(category),
        title: Localized::new(title_en.to_string(), title_tr.to_string()),
        description: Localized::default(),
        keywords: vec![],
        popular: false,
        featured: false,
    }
}

/// Create a calculator record with descriptions and keywords.
pub fn make_record_full(
    id: &str,
    category: &str,
    title: (&str, &str),
    description: (&str, &str),
    keywords: &[&str],
) -> CalculatorRecord {
    CalculatorRecord {
        id: id.to_string(),
        category: CategoryId::new(category),
        title: title.into(),
        description: description.into(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        popular: false,
        featured: false,
    }
}

/// Create a category with English and Turkish names.
pub fn make_category(id: &str, name_en: &str, name_tr: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: Localized::new(name_en.to_string(), name_tr.to_string()),
        description: None,
    }
}

/// Parse the bundled sample registry.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE_CATALOG_JSON).expect("sample catalog must parse")
}
