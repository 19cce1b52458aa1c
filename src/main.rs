//! Entry point for mapsize.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Set up logging to stderr.
//! 3. Load category identifiers (built-in defaults plus the optional file).
//! 4. Parse the map file, then print the size and category reports.
//!
//! Error handling is done via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use mapsize::analysis::Analysis;
use mapsize::category::Categories;
use mapsize::config::Config;
use mapsize::source::MapSource;

fn main() -> Result<()> {
    let config = Config::parse();

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let categories = Categories::load_or_defaults(&config.categories);

    let source = MapSource::open(&config.map_file)?;
    let analysis = Analysis::from_source(&source)
        .with_context(|| format!("failed to parse {}", config.map_file.display()))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    analysis
        .write_report(&categories, config.min_size, &mut out)
        .context("failed to write report")?;
    out.flush()?;
    Ok(())
}
