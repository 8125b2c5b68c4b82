//! Sorted `(key, row-id)` index with binary-search range queries.

use crate::Border;
use alloc::vec::Vec;
use quill_core::{Bytes, RowId};

/// Ascending-by-key array of `(key, row-id)` pairs.
///
/// Always sorted by key; among equal keys the relative insertion order is
/// preserved, so a point query yields row-ids in insertion order.
#[derive(Clone, Debug, Default)]
pub struct SortedIndex {
    entries: Vec<(Bytes, RowId)>,
}

impl SortedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in key order.
    pub fn entries(&self) -> &[(Bytes, RowId)] {
        &self.entries
    }

    /// Appends the entry, then moves it left by adjacent swaps until order
    /// is restored. O(n) worst case per insert; stable among equal keys.
    pub fn insert(&mut self, key: Bytes, id: RowId) {
        self.entries.push((key, id));
        let mut i = self.entries.len() - 1;
        while i > 0 && self.entries[i].0 < self.entries[i - 1].0 {
            self.entries.swap(i, i - 1);
            i -= 1;
        }
    }

    /// Entries whose keys fall between `lo` and `hi`.
    ///
    /// The lower cut is the first position admissible under `lo`, the upper
    /// cut one past the last admissible under `hi`; the result is the
    /// half-open interval between them. An inverted pair of cuts yields an
    /// empty slice rather than a negative-length range.
    pub fn range(&self, lo: &Border, hi: &Border) -> &[(Bytes, RowId)] {
        let lower = if lo.inclusive {
            self.entries.partition_point(|(key, _)| *key < lo.bound)
        } else {
            self.entries.partition_point(|(key, _)| *key <= lo.bound)
        };
        let upper = if hi.inclusive {
            self.entries.partition_point(|(key, _)| *key <= hi.bound)
        } else {
            self.entries.partition_point(|(key, _)| *key < hi.bound)
        };
        &self.entries[lower..upper.max(lower)]
    }
}
