//! Row-id streams produced by selector evaluation.

use alloc::vec::Vec;
use quill_core::RowId;

/// A one-way stream of row-ids.
///
/// A cursor is a snapshot: the ids it will yield are fixed when it is
/// created and unaffected by later inserts or updates. Reading the
/// current id never consumes it; only [`Cursor::advance`] moves the
/// stream, and advancing an exhausted cursor is a no-op.
#[derive(Clone, Debug)]
pub enum Cursor {
    /// Every row-id in `next..end`, ascending. Used for selector-less
    /// scans, where the id range at creation time is the whole table.
    Scan { next: RowId, end: RowId },
    /// Ids lifted from one index range, in index order.
    Index { ids: Vec<RowId>, pos: usize },
    /// Ids from a set combination, sorted ascending.
    Set { ids: Vec<RowId>, pos: usize },
}

impl Cursor {
    /// True if the cursor still has an id to yield.
    pub fn valid(&self) -> bool {
        match self {
            Cursor::Scan { next, end } => next < end,
            Cursor::Index { ids, pos } | Cursor::Set { ids, pos } => *pos < ids.len(),
        }
    }

    /// The current row-id, or `None` once exhausted.
    pub fn row_id(&self) -> Option<RowId> {
        match self {
            Cursor::Scan { next, end } => (next < end).then_some(*next),
            Cursor::Index { ids, pos } | Cursor::Set { ids, pos } => ids.get(*pos).copied(),
        }
    }

    /// Moves past the current id. No-op when already exhausted.
    pub fn advance(&mut self) {
        match self {
            Cursor::Scan { next, end } => {
                if *next < *end {
                    *next += 1;
                }
            }
            Cursor::Index { ids, pos } | Cursor::Set { ids, pos } => {
                if *pos < ids.len() {
                    *pos += 1;
                }
            }
        }
    }

    /// Drains the remaining ids into a vector.
    pub fn collect_ids(mut self) -> Vec<RowId> {
        let mut out = Vec::new();
        while let Some(id) = self.row_id() {
            out.push(id);
            self.advance();
        }
        out
    }
}
