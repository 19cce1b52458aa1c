//! Configuration module.
//!
//! This module defines the command-line interface (CLI) using `clap`.
//! It handles the map file path, the size threshold and the category file.

use clap::Parser;
use std::path::PathBuf;

use crate::category::DEFAULT_CATEGORY_FILE;
use crate::report::DEFAULT_MIN_SIZE;

/// Shows how much each object file contributes to a linked binary.
///
/// Reads a linker map file (as written by `ld -map` / Xcode's "Write Link Map
/// File") and prints object files sorted by size, then grouped by category.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Linker map file
    #[arg(value_name = "MAP_FILE")]
    pub map_file: PathBuf,

    /// Omit object files contributing fewer bytes than this (0 keeps all)
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: u64,

    /// File with one category substring per line
    #[arg(long, default_value = DEFAULT_CATEGORY_FILE)]
    pub categories: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: String,
}
