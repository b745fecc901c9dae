//! Locale-aware fuzzy search over a bilingual calculator catalog.
//!
//! The site has a few hundred health and fitness calculators, each with an
//! English and a Turkish title, description and keyword list. This crate ranks
//! them for whatever the user typed into the search box.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  catalog/    │───▶│  search/     │───▶│  group,      │
//! │ (registry,   │    │ (normalize,  │    │  suggest,    │
//! │  validation) │    │  dedup, sort)│    │  highlight   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!                            │
//!                            ▼
//!               ┌─────────────────────────┐
//!               │ scoring/  +  fuzzy/     │
//!               │ (weights, per-record    │
//!               │  rules, edit distance)  │
//!               └─────────────────────────┘
//! ```
//!
//! Every search is a pure function of (query, locale, catalog): no caches,
//! no global state, safe to call from several threads at once.
//!
//! # Usage
//!
//! ```
//! use calcsearch::{highlight_match, Catalog, Locale};
//!
//! let catalog = Catalog::from_json_str(calcsearch::testing::SAMPLE_CATALOG_JSON)?;
//! let results = catalog.search("bmi", Locale::En);
//! assert_eq!(results[0].id(), "bmi");
//!
//! let title = results[0].record.title.text(Locale::En);
//! let marked = highlight_match(title, "bmi");
//! assert!(marked.starts_with("<mark"));
//! # Ok::<(), calcsearch::CatalogError>(())
//! ```

// Module declarations
pub mod catalog;
mod error;
pub mod fuzzy;
mod locale;
pub mod popularity;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{Catalog, CatalogFile, CatalogIssue, CATALOG_VERSION};
pub use error::CatalogError;
pub use fuzzy::{calculate_similarity, fuzzy_match, levenshtein, levenshtein_within, similar_at};
pub use locale::{Locale, LocaleError, Localized};
pub use popularity::{PopularitySource, RecordFlags, ViewCounts};
pub use scoring::ranking::{compare_results, Scorer};
pub use scoring::{SearchOptions, Weights};
pub use search::group::{group_by_category, uncategorized_label, CategoryGroup};
pub use search::highlight::{highlight_match, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use search::suggest::suggestions;
pub use search::{search, search_with};
pub use types::{CalculatorRecord, Category, CategoryId, MatchedField, RankedResult};
pub use utils::normalize_query;
