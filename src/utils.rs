//! Utility functions for string processing.

/// Fold a string for case-insensitive comparison.
///
/// Full Unicode lowercase, so Turkish titles compare the same way the
/// browser's `toLowerCase()` does: "VÜCUT" → "vücut", "İndeks" → "i̇ndeks".
/// No diacritic stripping: "kilo" and "kiló" are different words here.
#[inline]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Prepare a raw query for matching: trim, then fold case.
///
/// Returns `None` for empty or all-whitespace input, which every search
/// entry point treats as "no query, no results".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_case(trimmed))
    }
}

/// Number of Unicode scalar values (not bytes).
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
