//! Error types for the quill query engine.

use alloc::string::String;
use core::fmt;

/// Result type alias for quill operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for query engine operations.
///
/// Every failure is recoverable at the statement boundary: the front end
/// reports one error line and keeps reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No grammar rule matched the input line.
    Syntax,
    /// Referenced table is not registered.
    TableNotFound { name: String },
    /// A table with this name already exists.
    DuplicateTable { name: String },
    /// Referenced column does not exist in the table.
    ColumnNotFound { column: String },
    /// No open cursor with this id.
    CursorNotFound { id: u64 },
    /// The cursor has no current row.
    CursorExhausted { id: u64 },
    /// An insert tuple has fewer values than listed columns.
    RaggedInsert { expected: usize, got: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax => write!(f, "syntax error"),
            Error::TableNotFound { name } => {
                write!(f, "table not found: {}", name)
            }
            Error::DuplicateTable { name } => {
                write!(f, "table already exists: {}", name)
            }
            Error::ColumnNotFound { column } => {
                write!(f, "unknown column: {}", column)
            }
            Error::CursorNotFound { id } => {
                write!(f, "invalid cursor id: {}", id)
            }
            Error::CursorExhausted { id } => {
                write!(f, "cursor {} is exhausted", id)
            }
            Error::RaggedInsert { expected, got } => {
                write!(f, "insert tuple has {} values for {} columns", got, expected)
            }
        }
    }
}

impl Error {
    /// Creates a table not found error.
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Error::TableNotFound { name: name.into() }
    }

    /// Creates a duplicate table error.
    pub fn duplicate_table(name: impl Into<String>) -> Self {
        Error::DuplicateTable { name: name.into() }
    }

    /// Creates a column not found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Error::ColumnNotFound { column: column.into() }
    }

    /// Creates an invalid cursor id error.
    pub fn cursor_not_found(id: u64) -> Self {
        Error::CursorNotFound { id }
    }

    /// Creates an exhausted cursor error.
    pub fn cursor_exhausted(id: u64) -> Self {
        Error::CursorExhausted { id }
    }

    /// Creates a ragged insert error.
    pub fn ragged_insert(expected: usize, got: usize) -> Self {
        Error::RaggedInsert { expected, got }
    }
}
