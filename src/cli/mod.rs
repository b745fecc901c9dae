// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the calcsearch command-line interface.
//!
//! Four subcommands: `search` ranks a catalog for a query, `suggest` lists
//! autocomplete strings, `highlight` shows the markup the site would render,
//! and `inspect` summarizes and validates a registry file.

pub mod display;

use calcsearch::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "calcsearch",
    about = "Fuzzy search over the calculator catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank calculators for a query
    Search {
        /// Path to the catalog registry (JSON)
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Locale whose titles and descriptions are matched (en, tr)
        #[arg(short = 'L', long, default_value = "en")]
        locale: Locale,

        /// Maximum number of results (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Group results under category headings
        #[arg(long)]
        group: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON file with search options (weights, limit); missing fields use defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List autocomplete suggestions for a prefix
    Suggest {
        /// Path to the catalog registry (JSON)
        catalog: PathBuf,

        /// What the user has typed so far
        prefix: String,

        /// Locale whose titles are offered (en, tr)
        #[arg(short = 'L', long, default_value = "en")]
        locale: Locale,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Print `text` with every occurrence of `query` marked up
    Highlight {
        /// Text to mark up
        text: String,

        /// Substring to highlight (case-insensitive, literal)
        query: String,
    },

    /// Summarize a catalog registry and report invariant violations
    Inspect {
        /// Path to the catalog registry (JSON)
        catalog: PathBuf,
    },
}
