//! Row identity and field value types.

use alloc::vec::Vec;

/// Zero-based position of a row within its table.
///
/// Assigned once at insert and stable for the table's lifetime; ids are
/// never reused or compacted.
pub type RowId = u64;

/// A single stored field.
///
/// Fields are raw bytes rather than `String`: the statement grammar's
/// `\xHH` escapes can produce arbitrary octets, so a field is not required
/// to be valid UTF-8. Index keys compare bytewise.
pub type Bytes = Vec<u8>;

/// One table row: ordered field values, arity equal to the column count.
pub type Record = Vec<Bytes>;
