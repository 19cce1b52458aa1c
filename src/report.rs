//! Size report.
//!
//! Sorts object files by contributed size and writes them as CSV-style rows.

use std::io::{self, Write};

use crate::object::{ObjectFileRecord, ObjectFileTable};

/// Files contributing fewer bytes than this are left out of the report.
pub const DEFAULT_MIN_SIZE: u64 = 1024;

pub const ROW_HEADER: &str = "Size,ObjFileNo,ObjectFileName";

/// Records sorted largest first and filtered by a minimum size.
#[derive(Debug)]
pub struct SizeReport<'a> {
    /// Number of object files in the table, before filtering.
    pub object_count: usize,
    pub rows: Vec<&'a ObjectFileRecord>,
}

impl<'a> SizeReport<'a> {
    pub fn new(table: &'a ObjectFileTable, min_size: u64) -> Self {
        let sorted = sort_by_size(table);
        let total = sorted.len();
        let rows = filter_min_size(sorted, min_size);
        tracing::debug!(
            "{} of {} object files below {} bytes omitted",
            total - rows.len(),
            total,
            min_size
        );
        Self {
            object_count: table.len(),
            rows,
        }
    }

    /// Writes the count line, the header and every row.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Found {} objfiles.", self.object_count)?;
        writeln!(out)?;
        write_rows(out, &self.rows)
    }
}

/// All records ordered by `total_size`, largest first. Equal sizes keep
/// ascending index order.
pub fn sort_by_size(table: &ObjectFileTable) -> Vec<&ObjectFileRecord> {
    let mut records: Vec<_> = table.iter().collect();
    records.sort_by(|left, right| right.total_size.cmp(&left.total_size));
    records
}

/// Keeps records with `total_size >= min_size`. A `min_size` of 0 keeps all.
pub fn filter_min_size(records: Vec<&ObjectFileRecord>, min_size: u64) -> Vec<&ObjectFileRecord> {
    records
        .into_iter()
        .filter(|r| r.total_size >= min_size)
        .collect()
}

/// Writes the header followed by one `size,index,"name"` row per record.
pub fn write_rows<W: Write>(out: &mut W, records: &[&ObjectFileRecord]) -> io::Result<()> {
    writeln!(out, "{ROW_HEADER}")?;
    for record in records {
        writeln!(
            out,
            "{},{},\"{}\"",
            record.total_size, record.index, record.declared_name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u32, &str, u64)]) -> ObjectFileTable {
        let mut table = ObjectFileTable::new();
        for &(index, name, size) in entries {
            let mut record = ObjectFileRecord::new(index, name);
            record.add_size(size);
            table.insert(record);
        }
        table
    }

    #[test]
    fn rows_are_non_increasing_and_ties_follow_index() {
        let table = table(&[
            (0, "a.o", 10),
            (1, "b.o", 300),
            (2, "c.o", 10),
            (3, "d.o", 40),
        ]);
        let sorted = sort_by_size(&table);
        let indices: Vec<u32> = sorted.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 3, 0, 2]);
        assert!(sorted.windows(2).all(|w| w[0].total_size >= w[1].total_size));
    }

    #[test]
    fn threshold_splits_kept_and_omitted() {
        let table = table(&[(0, "a.o", 1023), (1, "b.o", 1024), (2, "c.o", 5000)]);
        let report = SizeReport::new(&table, DEFAULT_MIN_SIZE);
        assert_eq!(report.object_count, 3);
        assert!(report.rows.iter().all(|r| r.total_size >= DEFAULT_MIN_SIZE));
        let omitted: Vec<_> = table
            .iter()
            .filter(|r| !report.rows.iter().any(|kept| kept.index == r.index))
            .collect();
        assert_eq!(omitted.len(), 1);
        assert!(omitted.iter().all(|r| r.total_size < DEFAULT_MIN_SIZE));
    }

    #[test]
    fn zero_threshold_keeps_empty_files() {
        let table = table(&[(0, "a.o", 0), (1, "b.o", 1)]);
        assert_eq!(SizeReport::new(&table, 0).rows.len(), 2);
    }

    #[test]
    fn writes_count_header_and_quoted_rows() {
        let table = table(&[(0, "a.o", 256), (1, "dir with space/b.o", 80)]);
        let mut out = Vec::new();
        SizeReport::new(&table, 0).write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Found 2 objfiles.\n\nSize,ObjFileNo,ObjectFileName\n256,0,\"a.o\"\n80,1,\"dir with space/b.o\"\n"
        );
    }
}
