//! Quill Query - selector evaluation over indexed tables.
//!
//! [`evaluate`] turns a parsed selector into a [`Cursor`]: a finished
//! row-id stream computed against the table as it stood at evaluation
//! time. Point predicates come straight from the column indexes; `and`
//! and `or` combine their operand id-sets and replay the result in
//! ascending row-id order.

#![no_std]

extern crate alloc;

mod cursor;
mod evaluate;

pub use cursor::Cursor;
pub use evaluate::evaluate;
