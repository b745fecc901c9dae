// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for match highlighting.
//!
//! Arbitrary queries (regex metacharacters included) must never panic, and
//! stripping the markers must give back the input text.

#![no_main]

use arbitrary::Arbitrary;
use calcsearch::{highlight_match, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    // A '<' in the input could join with a marker and make stripping ambiguous
    if input.text.contains('<') {
        return;
    }
    let out = highlight_match(&input.text, &input.query);
    let stripped = out.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "");
    assert_eq!(stripped, input.text);
});
