// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the calcsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `CALCSEARCH_THEME` first (for explicit control), then `COLORFGBG` (set by
//! some terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY
//! stdout, so piping results into a file gives plain text.

use calcsearch::{
    highlight_match, Catalog, CatalogIssue, CategoryGroup, Locale, RankedResult,
    HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN,
};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via CALCSEARCH_THEME
    if let Ok(theme) = std::env::var("CALCSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);    // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);  // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);    // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);    // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);     // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);      // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);    // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);   // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);    // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);     // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);   // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off.
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Highlight `query` inside `text` for the terminal.
///
/// Reuses the HTML highlighter and swaps its markers for ANSI codes, so the
/// terminal shows exactly what the site would mark.
pub fn terminal_highlight(text: &str, query: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let open = format!("{}{}", BOLD, YELLOW());
    highlight_match(text, query)
        .replace(HIGHLIGHT_OPEN, &open)
        .replace(HIGHLIGHT_CLOSE, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

fn result_rows(results: &[RankedResult<'_>], query: &str, locale: Locale) {
    for (rank, result) in results.iter().enumerate() {
        let title = terminal_highlight(result.record.title.text(locale), query);
        let score = themed(GREEN, &[BOLD], &format!("{:>6.1}", result.score));
        row(&format!(" {:>2}. {} {}", rank + 1, score, title));

        let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        let meta = format!("{} · {}", result.record.id, fields.join(", "));
        row(&format!("            {}", themed(GRAY, &[DIM], &meta)));
    }
}

pub fn print_results(results: &[RankedResult<'_>], query: &str, locale: Locale) {
    section_top(&format!("\"{}\" ({}) · {} results", query, locale, results.len()));
    if results.is_empty() {
        row(&themed(GRAY, &[DIM], " no matches"));
    }
    result_rows(results, query, locale);
    section_bot();
}

pub fn print_groups(groups: &[CategoryGroup<'_>], query: &str, locale: Locale) {
    if groups.is_empty() {
        section_top(&format!("\"{}\" ({})", query, locale));
        row(&themed(GRAY, &[DIM], " no matches"));
        section_bot();
        return;
    }
    for group in groups {
        section_top(&format!("{} · {}", group.name, group.results.len()));
        result_rows(&group.results, query, locale);
        section_bot();
    }
}

pub fn print_suggestions(suggestions: &[String], query: &str) {
    section_top(&format!("suggestions for \"{}\"", query));
    if suggestions.is_empty() {
        row(&themed(GRAY, &[DIM], " none"));
    }
    for suggestion in suggestions {
        row(&format!(" {}", terminal_highlight(suggestion, query)));
    }
    section_bot();
}

pub fn print_inspect(path: &str, catalog: &Catalog, issues: &[CatalogIssue]) {
    section_top(path);
    row(&format!(
        " calculators  {}",
        themed(BLUE, &[BOLD], &catalog.len().to_string())
    ));
    row(&format!(
        " categories   {}",
        themed(BLUE, &[BOLD], &catalog.categories().len().to_string())
    ));
    row(&format!(" popular      {}", catalog.popular(usize::MAX).len()));
    row(&format!(" featured     {}", catalog.featured(usize::MAX).len()));
    section_bot();

    section_top("categories");
    for category in catalog.categories() {
        let count = catalog.in_category(&category.id).count();
        let names: Vec<String> = Locale::ALL
            .iter()
            .map(|&locale| format!("{}: {}", locale, category.name.text(locale)))
            .collect();
        row(&format!(" {:<12} {:>3}  {}", category.id, count, names.join(" · ")));
    }
    section_bot();

    section_top("validation");
    if issues.is_empty() {
        row(&format!(" {}", themed(GREEN, &[BOLD], "✓ no issues")));
    }
    for issue in issues {
        row(&format!(" {} {}", themed(RED, &[BOLD], "✗"), issue));
    }
    section_bot();
}
