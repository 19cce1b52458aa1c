//! Object-file records.
//!
//! Tracks each object file named in the map's file table and the number of
//! bytes its symbols contribute to the linked binary.

use std::collections::BTreeMap;

/// One object file from the map's file table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectFileRecord {
    /// Index from the `[N]` prefix in the file table.
    pub index: u32,
    /// Everything after the index, e.g. `/tmp/libfoo.a(foo.o)`.
    pub declared_name: String,
    /// Sum of the sizes of all symbols attributed to this file.
    pub total_size: u64,
}

impl ObjectFileRecord {
    pub fn new(index: u32, declared_name: impl Into<String>) -> Self {
        Self {
            index,
            declared_name: declared_name.into(),
            total_size: 0,
        }
    }

    /// Adds one symbol's size. Saturates instead of wrapping.
    pub fn add_size(&mut self, size: u64) {
        self.total_size = self.total_size.saturating_add(size);
    }
}

/// All object-file records, keyed by index.
#[derive(Debug, Default, Clone)]
pub struct ObjectFileTable {
    records: BTreeMap<u32, ObjectFileRecord>,
}

impl ObjectFileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the one it replaced if the index was taken.
    pub fn insert(&mut self, record: ObjectFileRecord) -> Option<ObjectFileRecord> {
        self.records.insert(record.index, record)
    }

    pub fn get(&self, index: u32) -> Option<&ObjectFileRecord> {
        self.records.get(&index)
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut ObjectFileRecord> {
        self.records.get_mut(&index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectFileRecord> {
        self.records.values()
    }

    pub fn total_size(&self) -> u64 {
        self.iter().map(|r| r.total_size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_index_replaces_previous_record() {
        let mut table = ObjectFileTable::new();
        assert!(table.insert(ObjectFileRecord::new(3, "old.o")).is_none());
        let replaced = table.insert(ObjectFileRecord::new(3, "new.o")).unwrap();
        assert_eq!(replaced.declared_name, "old.o");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(3).unwrap().declared_name, "new.o");
    }

    #[test]
    fn add_size_saturates() {
        let mut record = ObjectFileRecord::new(0, "big.o");
        record.add_size(u64::MAX - 1);
        record.add_size(10);
        assert_eq!(record.total_size, u64::MAX);
    }
}
