//! Error types.
//!
//! Everything except `CategoryFile` aborts the run. `CategoryFile` is caught by
//! `Categories::load_or_defaults` and turned into a warning.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot open map file {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_no}: object file index '{text}' is not a decimal integer")]
    MalformedIndex { line_no: usize, text: String },

    #[error("line {line_no}: '{token}' is not a hexadecimal value")]
    MalformedHex { line_no: usize, token: String },

    #[error("line {line_no}: symbol references unknown object file [{index}]")]
    MalformedSymbolReference { line_no: usize, index: u32 },

    #[error("cannot read category file {path}: {source}")]
    CategoryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
