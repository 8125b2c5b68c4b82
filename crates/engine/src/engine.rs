//! Statement dispatch and the open-cursor registry.

use alloc::string::String;
use hashbrown::HashMap;
use quill_core::{Error, Record, Result};
use quill_parser::Statement;
use quill_query::{evaluate, Cursor};

use crate::Database;

/// Handle for an open cursor. Ids are handed out sequentially starting at
/// zero and never reused, so a stale handle fails loudly instead of
/// silently aliasing a newer cursor.
pub type CursorId = u64;

/// A registered cursor plus the table it reads from.
#[derive(Clone, Debug)]
struct OpenCursor {
    table: String,
    cursor: Cursor,
}

/// What a successfully executed statement produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A select opened this cursor.
    Cursor(CursorId),
    /// An insert into the named table completed.
    Inserted(String),
    /// The named table was created.
    Created(String),
    /// The record under a cursor's current position.
    Row(Record),
    /// A get on an exhausted cursor; not an error.
    Done,
    /// An advance succeeded.
    Advanced,
    /// An update through a cursor succeeded.
    Updated,
}

/// Executes parsed statements against a [`Database`], keeping the cursors
/// opened by selects alive across statements.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    db: Database,
    cursors: HashMap<CursorId, OpenCursor>,
    next_cursor_id: CursorId,
}

impl Engine {
    /// Creates an engine over an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying database.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Executes one statement.
    pub fn execute(&mut self, statement: Statement) -> Result<Outcome> {
        match statement {
            Statement::Select(select) => {
                let table = self.db.table(&select.table)?;
                let cursor = evaluate(table, &select.selector)?;
                let id = self.next_cursor_id;
                self.next_cursor_id += 1;
                self.cursors.insert(
                    id,
                    OpenCursor {
                        table: select.table,
                        cursor,
                    },
                );
                Ok(Outcome::Cursor(id))
            }
            Statement::Insert(insert) => {
                let table = self.db.table_mut(&insert.table)?;
                table.insert_mapped(&insert.columns, &insert.values)?;
                Ok(Outcome::Inserted(insert.table))
            }
            Statement::CreateTable(create) => {
                self.db.create_table(&create.table, create.columns)?;
                Ok(Outcome::Created(create.table))
            }
            Statement::GetCursor(id) => {
                let open = self
                    .cursors
                    .get(&id)
                    .ok_or_else(|| Error::cursor_not_found(id))?;
                let Some(row_id) = open.cursor.row_id() else {
                    return Ok(Outcome::Done);
                };
                let table = self.db.table(&open.table)?;
                // Cursors only hold ids the table has assigned, and rows
                // are never deleted.
                let record = table
                    .record(row_id)
                    .ok_or_else(|| Error::cursor_exhausted(id))?;
                Ok(Outcome::Row(record.clone()))
            }
            Statement::AdvanceCursor(id) => {
                let open = self
                    .cursors
                    .get_mut(&id)
                    .ok_or_else(|| Error::cursor_not_found(id))?;
                if !open.cursor.valid() {
                    return Err(Error::cursor_exhausted(id));
                }
                open.cursor.advance();
                Ok(Outcome::Advanced)
            }
            Statement::UpdateCursor(update) => {
                let open = self
                    .cursors
                    .get(&update.cursor_id)
                    .ok_or_else(|| Error::cursor_not_found(update.cursor_id))?;
                let row_id = open
                    .cursor
                    .row_id()
                    .ok_or_else(|| Error::cursor_exhausted(update.cursor_id))?;
                let table = self.db.table_mut(&open.table)?;
                table.update(row_id, &update.assignments)?;
                Ok(Outcome::Updated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use quill_parser::{CreateTableStatement, InsertStatement, SelectStatement, Selector};

    fn seeded() -> Engine {
        let mut engine = Engine::new();
        engine
            .execute(Statement::CreateTable(CreateTableStatement {
                table: "t".to_string(),
                columns: vec!["a".to_string()],
            }))
            .unwrap();
        engine
            .execute(Statement::Insert(InsertStatement {
                table: "t".to_string(),
                columns: vec!["a".to_string()],
                values: vec![vec![b"x".to_vec()], vec![b"y".to_vec()]],
            }))
            .unwrap();
        engine
    }

    fn select_all() -> Statement {
        Statement::Select(SelectStatement {
            table: "t".to_string(),
            selector: Selector::All,
        })
    }

    #[test]
    fn test_cursor_ids_are_sequential() {
        let mut engine = seeded();
        assert_eq!(engine.execute(select_all()).unwrap(), Outcome::Cursor(0));
        assert_eq!(engine.execute(select_all()).unwrap(), Outcome::Cursor(1));
    }

    #[test]
    fn test_get_advance_get_walks_rows() {
        let mut engine = seeded();
        engine.execute(select_all()).unwrap();
        assert_eq!(
            engine.execute(Statement::GetCursor(0)).unwrap(),
            Outcome::Row(vec![b"x".to_vec()])
        );
        assert_eq!(
            engine.execute(Statement::AdvanceCursor(0)).unwrap(),
            Outcome::Advanced
        );
        assert_eq!(
            engine.execute(Statement::GetCursor(0)).unwrap(),
            Outcome::Row(vec![b"y".to_vec()])
        );
        engine.execute(Statement::AdvanceCursor(0)).unwrap();
        assert_eq!(engine.execute(Statement::GetCursor(0)).unwrap(), Outcome::Done);
    }

    #[test]
    fn test_advance_exhausted_is_an_error() {
        let mut engine = seeded();
        engine.execute(select_all()).unwrap();
        engine.execute(Statement::AdvanceCursor(0)).unwrap();
        engine.execute(Statement::AdvanceCursor(0)).unwrap();
        let err = engine.execute(Statement::AdvanceCursor(0)).unwrap_err();
        assert!(matches!(err, Error::CursorExhausted { id: 0 }));
    }

    #[test]
    fn test_unknown_cursor() {
        let mut engine = seeded();
        assert!(matches!(
            engine.execute(Statement::GetCursor(42)).unwrap_err(),
            Error::CursorNotFound { id: 42 }
        ));
        assert!(matches!(
            engine.execute(Statement::AdvanceCursor(42)).unwrap_err(),
            Error::CursorNotFound { id: 42 }
        ));
    }

    #[test]
    fn test_update_through_cursor() {
        let mut engine = seeded();
        engine.execute(select_all()).unwrap();
        engine
            .execute(Statement::UpdateCursor(quill_parser::UpdateStatement {
                cursor_id: 0,
                assignments: vec![("a".to_string(), b"z".to_vec())],
            }))
            .unwrap();
        assert_eq!(
            engine.execute(Statement::GetCursor(0)).unwrap(),
            Outcome::Row(vec![b"z".to_vec()])
        );
    }

    #[test]
    fn test_insert_into_missing_table() {
        let mut engine = Engine::new();
        let err = engine
            .execute(Statement::Insert(InsertStatement {
                table: "nope".to_string(),
                columns: vec![],
                values: vec![],
            }))
            .unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));
    }
}
