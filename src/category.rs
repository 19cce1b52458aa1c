//! Categorization.
//!
//! Groups object files into buckets by looking for configured substrings in
//! their declared names, e.g. every file under `/Pods/`. Identifiers are tried
//! in configured order and the first one found wins. Files that match nothing
//! land in a catch-all bucket.

use indexmap::IndexSet;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{MapError, Result};
use crate::object::ObjectFileRecord;
use crate::report::write_rows;

/// Category file read from the working directory when none is given.
pub const DEFAULT_CATEGORY_FILE: &str = "categories.txt";

/// Identifiers that are always present, ahead of any loaded from a file.
pub const DEFAULT_IDENTIFIERS: &[&str] =
    &["linker synthesized", "/Pods/", ".framework/", "libswift"];

/// Lines this short or shorter in a category file are ignored.
const MIN_IDENTIFIER_LEN: usize = 2;

/// Ordered, deduplicated list of category identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    identifiers: IndexSet<String>,
}

impl Categories {
    /// An empty list. Every record goes to the catch-all bucket.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut categories = Self::empty();
        for identifier in DEFAULT_IDENTIFIERS {
            categories.push(*identifier);
        }
        categories
    }

    /// The defaults extended with the contents of `path`. A missing or
    /// unreadable file only logs a warning.
    pub fn load_or_defaults(path: &Path) -> Self {
        let mut categories = Self::with_defaults();
        match categories.extend_from_file(path) {
            Ok(added) => tracing::info!("loaded {} categories from {}", added, path.display()),
            Err(err) => tracing::warn!("{err}; using built-in categories"),
        }
        categories
    }

    /// Appends every identifier in `path` that isn't already present.
    /// Returns how many were added.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::CategoryFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.extend_from_lines(text.lines()))
    }

    pub fn extend_from_lines<'l>(&mut self, lines: impl IntoIterator<Item = &'l str>) -> usize {
        let mut added = 0;
        for line in lines {
            let line = line.trim_end();
            if line.chars().count() <= MIN_IDENTIFIER_LEN {
                continue;
            }
            if self.push(line) {
                added += 1;
            }
        }
        added
    }

    /// Adds an identifier at the end. Returns false if it was already present.
    pub fn push(&mut self, identifier: impl Into<String>) -> bool {
        self.identifiers.insert(identifier.into())
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    /// Position of the first identifier contained in `name`.
    pub fn position_in(&self, name: &str) -> Option<usize> {
        self.iter().position(|identifier| name.contains(identifier))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketLabel<'a> {
    Identifier(&'a str),
    CatchAll,
}

impl fmt::Display for BucketLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketLabel::Identifier(identifier) => f.write_str(identifier),
            BucketLabel::CatchAll => f.write_str("Everything else"),
        }
    }
}

/// Records sharing a category, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket<'a> {
    pub label: BucketLabel<'a>,
    pub members: Vec<&'a ObjectFileRecord>,
}

impl CategoryBucket<'_> {
    pub fn subtotal(&self) -> u64 {
        self.members.iter().map(|r| r.total_size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Category: {}", self.label)?;
        writeln!(out, "Total size: {}", self.subtotal())?;
        write_rows(out, &self.members)
    }
}

/// Splits `records` into one bucket per identifier plus a trailing catch-all.
///
/// Buckets come back in configured order and may be empty. Members keep the
/// relative order of `records`.
pub fn categorize<'a>(
    records: &[&'a ObjectFileRecord],
    categories: &'a Categories,
) -> Vec<CategoryBucket<'a>> {
    let mut buckets: Vec<CategoryBucket<'a>> = categories
        .iter()
        .map(|identifier| CategoryBucket {
            label: BucketLabel::Identifier(identifier),
            members: Vec::new(),
        })
        .chain(std::iter::once(CategoryBucket {
            label: BucketLabel::CatchAll,
            members: Vec::new(),
        }))
        .collect();
    let catch_all = buckets.len() - 1;

    for &record in records {
        let slot = categories
            .position_in(&record.declared_name)
            .unwrap_or(catch_all);
        buckets[slot].members.push(record);
    }
    buckets
}

/// Writes every non-empty bucket.
pub fn write_buckets<W: Write>(out: &mut W, buckets: &[CategoryBucket<'_>]) -> io::Result<()> {
    for bucket in buckets.iter().filter(|b| !b.is_empty()) {
        bucket.write_to(out)?;
    }
    Ok(())
}
