//! WebAssembly bindings for the calculator search box.
//!
//! The page loads the registry JSON once, builds a `CalcSearcher`, and calls
//! it on every (debounced) keystroke. Debouncing stays on the JS side.

use crate::catalog::Catalog;
use crate::locale::Locale;
use crate::popularity::RecordFlags;
use crate::scoring::SearchOptions;
use crate::search::highlight::highlight_match;
use crate::types::MatchedField;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    id: &'a str,
    category: &'a str,
    title: &'a str,
    description: &'a str,
    score: f64,
    matched_fields: &'a [MatchedField],
}

fn parse_locale(tag: &str) -> Result<Locale, JsValue> {
    tag.parse::<Locale>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-accessible searcher over one catalog.
#[wasm_bindgen]
pub struct CalcSearcher {
    catalog: Catalog,
}

#[wasm_bindgen]
impl CalcSearcher {
    /// Build from the registry JSON (same format as `catalog.sample.json`).
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str) -> Result<CalcSearcher, JsValue> {
        let catalog =
            Catalog::from_json_str(catalog_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(CalcSearcher { catalog })
    }

    /// Number of calculators in the catalog.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.catalog.len()
    }

    /// Ranked results as an array of plain objects. `limit = 0` means no limit.
    pub fn search(&self, query: &str, locale: &str, limit: usize) -> Result<JsValue, JsValue> {
        let locale = parse_locale(locale)?;
        let options = SearchOptions {
            limit: (limit > 0).then_some(limit),
            ..SearchOptions::default()
        };
        let results = self
            .catalog
            .search_with(query, locale, &options, &RecordFlags);

        let output: Vec<SearchResultOutput<'_>> = results
            .iter()
            .map(|result| SearchResultOutput {
                id: &result.record.id,
                category: result.record.category.as_str(),
                title: result.record.title.text(locale),
                description: result.record.description.text(locale),
                score: result.score,
                matched_fields: &result.matched_fields,
            })
            .collect();

        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Autocomplete strings for the dropdown.
    pub fn suggestions(&self, query: &str, locale: &str, limit: usize) -> Result<JsValue, JsValue> {
        let locale = parse_locale(locale)?;
        let out = self.catalog.suggestions(query, locale, limit);
        to_value(&out).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `text` with every occurrence of `query` wrapped in `<mark>`.
    pub fn highlight(&self, text: &str, query: &str) -> String {
        highlight_match(text, query).into_owned()
    }
}
