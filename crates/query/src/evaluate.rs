//! Selector evaluation against a table.

use alloc::vec::Vec;
use hashbrown::HashSet;
use quill_core::{Error, Result, RowId};
use quill_index::Border;
use quill_parser::Selector;
use quill_storage::Table;

use crate::Cursor;

/// Evaluates a selector against the table's current contents.
///
/// The returned cursor is fully computed here: `all` captures the current
/// id range, `column = value` reads the column's index, and `and`/`or`
/// intersect or union the operand id-sets. Combined results come back in
/// ascending row-id order.
pub fn evaluate(table: &Table, selector: &Selector) -> Result<Cursor> {
    match selector {
        Selector::All => Ok(Cursor::Scan {
            next: 0,
            end: table.len(),
        }),
        Selector::Equals { column, value } => {
            let target = table
                .find_column(column)
                .ok_or_else(|| Error::column_not_found(column))?;
            let bound = Border::inclusive(value.clone());
            let ids = table
                .index(target)
                .range(&bound, &bound)
                .iter()
                .map(|(_, id)| *id)
                .collect();
            Ok(Cursor::Index { ids, pos: 0 })
        }
        Selector::And(left, right) => {
            let left = id_set(table, left)?;
            let right = id_set(table, right)?;
            Ok(set_cursor(left.intersection(&right).copied().collect()))
        }
        Selector::Or(left, right) => {
            let left = id_set(table, left)?;
            let right = id_set(table, right)?;
            Ok(set_cursor(left.union(&right).copied().collect()))
        }
    }
}

fn id_set(table: &Table, selector: &Selector) -> Result<HashSet<RowId>> {
    Ok(evaluate(table, selector)?.collect_ids().into_iter().collect())
}

fn set_cursor(ids: HashSet<RowId>) -> Cursor {
    let mut ids: Vec<RowId> = ids.into_iter().collect();
    ids.sort_unstable();
    Cursor::Set { ids, pos: 0 }
}
