//! Column-indexed record store.

use alloc::string::String;
use alloc::vec::Vec;
use quill_core::{Bytes, Error, Record, Result, RowId};
use quill_index::SortedIndex;

/// An in-memory table: a fixed column layout, an append-only record store,
/// and one sorted index per column.
///
/// Row-ids are assignment order: the n-th inserted record has id `n`, and
/// ids are never reused or compacted. Column names are lowercased at
/// creation, and every column lookup lowercases its argument, so the
/// column namespace is case-insensitive throughout.
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
    indexes: Vec<SortedIndex>,
}

impl Table {
    /// Creates an empty table with the given column layout.
    pub fn new(columns: Vec<String>) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| c.to_ascii_lowercase()).collect();
        let indexes = columns.iter().map(|_| SortedIndex::new()).collect();
        Self {
            columns,
            records: Vec::new(),
            indexes,
        }
    }

    /// Column names, lowercased, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of records, which is also the next row-id.
    pub fn len(&self) -> u64 {
        self.records.len() as u64
    }

    /// True if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the given row-id, if it exists.
    pub fn record(&self, id: RowId) -> Option<&Record> {
        self.records.get(id as usize)
    }

    /// The sorted index for column position `i`.
    pub fn index(&self, i: usize) -> &SortedIndex {
        &self.indexes[i]
    }

    /// Position of the named column; the lookup is case-insensitive.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let name = name.to_ascii_lowercase();
        self.columns.iter().position(|c| *c == name)
    }

    /// Appends a full-width record and feeds every column index.
    fn insert_record(&mut self, record: Record) -> RowId {
        debug_assert_eq!(record.len(), self.columns.len());
        let id = self.len();
        for (i, value) in record.iter().enumerate() {
            self.indexes[i].insert(value.clone(), id);
        }
        self.records.push(record);
        id
    }

    /// Inserts one record per value tuple, mapping tuple positions onto the
    /// named columns. Unnamed columns get empty values.
    ///
    /// The whole batch is validated before any record lands: an unknown
    /// column or a tuple shorter than the column list leaves the table
    /// untouched. Tuples longer than the column list have their extra
    /// values ignored. Returns the number of records inserted.
    pub fn insert_mapped(&mut self, columns: &[String], values: &[Vec<Bytes>]) -> Result<usize> {
        let mut targets = Vec::with_capacity(columns.len());
        for name in columns {
            match self.find_column(name) {
                Some(i) => targets.push(i),
                None => return Err(Error::column_not_found(name)),
            }
        }
        for tuple in values {
            if tuple.len() < targets.len() {
                return Err(Error::ragged_insert(targets.len(), tuple.len()));
            }
        }
        for tuple in values {
            let mut record: Record = (0..self.column_count()).map(|_| Bytes::new()).collect();
            for (&target, value) in targets.iter().zip(tuple) {
                record[target] = value.clone();
            }
            self.insert_record(record);
        }
        Ok(values.len())
    }

    /// Applies the assignments to the record with the given row-id, left to
    /// right. An unknown column name aborts mid-way, leaving the earlier
    /// assignments applied.
    ///
    /// Indexes are not rewritten: they keep the keys the record had at
    /// insert time. The caller must pass an id below [`Table::len`].
    pub fn update(&mut self, id: RowId, assignments: &[(String, Bytes)]) -> Result<()> {
        for (name, value) in assignments {
            let target = self
                .find_column(name)
                .ok_or_else(|| Error::column_not_found(name))?;
            self.records[id as usize][target] = value.clone();
        }
        Ok(())
    }
}
