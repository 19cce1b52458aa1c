//! Link map size analyzer.
//!
//! Breaks a linked binary's size down by the object files that contributed
//! to it, using the linker's map file. It is organized into several modules:
//! - `config`: CLI configuration.
//! - `source`: Reading the map file into lines.
//! - `parser`: File-table parsing and symbol-table scanning.
//! - `object`: Per-object-file size records.
//! - `report`: Sorting, thresholding and row output.
//! - `category`: Bucketing records by name substrings.
//! - `analysis`: The end-to-end pipeline.

pub mod analysis;
pub mod category;
pub mod config;
pub mod error;
pub mod object;
pub mod parser;
pub mod report;
pub mod source;
