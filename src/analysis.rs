//! Map analysis.
//!
//! Ties the phases together:
//! 1. Parse the file table and scan the symbol table into an `ObjectFileTable`.
//! 2. Sort and filter the records into a `SizeReport`.
//! 3. Bucket the surviving records by category.
//!
//! Parsing finishes before anything is written. A malformed map never
//! produces partial output.

use std::io::{self, Write};

use crate::category::{categorize, write_buckets, Categories};
use crate::error::Result;
use crate::object::ObjectFileTable;
use crate::parser::parse_map;
use crate::report::SizeReport;
use crate::source::MapSource;

/// A fully parsed map file.
#[derive(Debug)]
pub struct Analysis {
    table: ObjectFileTable,
}

impl Analysis {
    pub fn from_source(source: &MapSource) -> Result<Self> {
        let lines = source.lines();
        let table = parse_map(&lines)?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &ObjectFileTable {
        &self.table
    }

    /// Writes the flat report followed by one section per non-empty category.
    pub fn write_report<W: Write>(
        &self,
        categories: &Categories,
        min_size: u64,
        out: &mut W,
    ) -> io::Result<()> {
        let report = SizeReport::new(&self.table, min_size);
        report.write_to(out)?;
        let buckets = categorize(&report.rows, categories);
        write_buckets(out, &buckets)
    }
}
