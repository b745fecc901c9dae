// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for registry parsing.
//!
//! Arbitrary bytes either fail with a `CatalogError` or yield a catalog that
//! validates and searches without panicking.

#![no_main]

use calcsearch::{Catalog, Locale};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(catalog) = Catalog::from_reader(data) else {
        return;
    };
    let _ = catalog.validate();
    for locale in Locale::ALL {
        let results = catalog.search("a", locale);
        let _ = catalog.group_by_category(results, locale);
    }
});
