//! Named-table namespace.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use quill_core::{Error, Result};
use quill_storage::Table;

/// A collection of tables keyed by name.
///
/// Table names are case-sensitive; only column names within a table are
/// folded.
#[derive(Clone, Debug, Default)]
pub struct Database {
    tables: HashMap<String, Table>,
}

impl Database {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True if no table has been created.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Creates a table; the name must be unused.
    pub fn create_table(&mut self, name: &str, columns: Vec<String>) -> Result<()> {
        if self.tables.contains_key(name) {
            return Err(Error::duplicate_table(name));
        }
        self.tables.insert(name.to_string(), Table::new(columns));
        Ok(())
    }

    /// The named table.
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables.get(name).ok_or_else(|| Error::table_not_found(name))
    }

    /// The named table, mutably.
    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::table_not_found(name))
    }
}
