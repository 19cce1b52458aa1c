//! Line source.
//!
//! The map file is mapped into memory once and decoded into owned text. Link
//! maps routinely carry non-UTF-8 bytes inside string-literal symbol names, so
//! decoding is lossy rather than fallible.

use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::{MapError, Result};

/// The full text of a map file.
pub struct MapSource {
    text: String,
}

impl MapSource {
    /// Reads the whole file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let not_found = |source: std::io::Error| MapError::InputNotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(not_found)?;
        let len = file.metadata().map_err(not_found)?.len();
        if len == 0 {
            return Ok(Self::from_text(String::new()));
        }
        // SAFETY: the mapping is only read while decoding below and dropped
        // before this function returns.
        let mmap = unsafe { Mmap::map(&file) }.map_err(not_found)?;
        let text = String::from_utf8_lossy(&mmap).into_owned();
        tracing::debug!("read {} bytes from {}", mmap.len(), path.display());
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Lines in file order with trailing whitespace (including `\r`) removed.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().map(str::trim_end).collect()
    }
}
