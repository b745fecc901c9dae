// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk registry format.
//!
//! ```json
//! {
//!   "version": 1,
//!   "categories": [{"id": "health", "name": {"en": "Health", "tr": "Sağlık"}}],
//!   "calculators": [{"id": "bmi", "category": "health", "title": {...}, ...}]
//! }
//! ```

use crate::types::{CalculatorRecord, Category};
use serde::{Deserialize, Serialize};

/// Registry format version this build reads and writes.
pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub version: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub calculators: Vec<CalculatorRecord>,
}
