use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::Path;

use calcsearch::{highlight_match, Catalog, Locale, RecordFlags, SearchOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            catalog,
            query,
            locale,
            limit,
            group,
            json,
            config,
        } => run_search(&catalog, &query, locale, limit, group, json, config.as_deref()),
        Commands::Suggest {
            catalog,
            prefix,
            locale,
            limit,
        } => run_suggest(&catalog, &prefix, locale, limit),
        Commands::Highlight { text, query } => {
            println!("{}", highlight_match(&text, &query));
            Ok(())
        }
        Commands::Inspect { catalog } => run_inspect(&catalog),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so `--json` output stays machine-readable.
/// Level comes from `CALCSEARCH_LOG` (e.g. `calcsearch=debug`), default `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CALCSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Search options from an optional JSON file, with `--limit` taking precedence.
fn load_options(config: Option<&Path>, limit: Option<usize>) -> Result<SearchOptions, Box<dyn Error>> {
    let mut options = match config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
            let options: SearchOptions = serde_json::from_str(&raw)
                .map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
            debug!(path = %path.display(), "loaded search options");
            options
        }
        None => SearchOptions::default(),
    };
    if limit.is_some() {
        options.limit = limit;
    }
    Ok(options)
}

fn run_search(
    catalog_path: &Path,
    query: &str,
    locale: Locale,
    limit: Option<usize>,
    group: bool,
    json: bool,
    config: Option<&Path>,
) -> CliResult {
    let catalog = Catalog::load(catalog_path)?;
    let options = load_options(config, limit)?;
    let results = catalog.search_with(query, locale, &options, &RecordFlags);

    match (group, json) {
        (true, true) => {
            let groups = catalog.group_by_category(results, locale);
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        (true, false) => {
            let groups = catalog.group_by_category(results, locale);
            display::print_groups(&groups, query, locale);
        }
        (false, true) => println!("{}", serde_json::to_string_pretty(&results)?),
        (false, false) => display::print_results(&results, query, locale),
    }
    Ok(())
}

fn run_suggest(catalog_path: &Path, prefix: &str, locale: Locale, limit: usize) -> CliResult {
    let catalog = Catalog::load(catalog_path)?;
    let suggestions = catalog.suggestions(prefix, locale, limit);
    display::print_suggestions(&suggestions, prefix);
    Ok(())
}

fn run_inspect(catalog_path: &Path) -> CliResult {
    let catalog = Catalog::load(catalog_path)?;
    let issues = catalog.validate();
    display::print_inspect(&catalog_path.display().to_string(), &catalog, &issues);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(format!("{} catalog issue(s) found", issues.len()).into())
    }
}
