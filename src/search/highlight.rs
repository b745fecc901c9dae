// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for result titles and snippets.
//!
//! The query is escaped before it becomes a pattern, so "c++" or "1.5" match
//! literally. The output is markup for the results list; `text` is inserted
//! as-is, so callers escape untrusted text before highlighting it.

use regex::{Captures, RegexBuilder};
use std::borrow::Cow;

pub const HIGHLIGHT_OPEN: &str = r#"<mark class="bg-yellow-200 text-neutral-900">"#;
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of `query` in `<mark>` tags.
///
/// Matched text keeps its original casing. The query is trimmed first, the
/// same way `search` treats it, so `"bmi "` marks every "bmi". A blank query
/// returns `text` unchanged (and unallocated).
///
/// # Example
///
/// ```
/// use calcsearch::highlight_match;
///
/// assert_eq!(
///     highlight_match("BMI Calculator", "bmi"),
///     r#"<mark class="bg-yellow-200 text-neutral-900">BMI</mark> Calculator"#
/// );
/// ```
pub fn highlight_match<'t>(text: &'t str, query: &str) -> Cow<'t, str> {
    let query = query.trim();
    if query.is_empty() {
        return Cow::Borrowed(text);
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        // Only reachable for queries over the regex size limit
        Err(_) => return Cow::Borrowed(text),
    };

    pattern.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
    })
}
