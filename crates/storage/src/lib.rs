//! Quill Storage - in-memory tables for the quill query engine.
//!
//! A [`Table`] is a column layout plus an append-only vector of records.
//! Every column carries a [`quill_index::SortedIndex`] that is fed on
//! insert, so point lookups by column value never scan the record store.

#![no_std]

extern crate alloc;

mod table;

pub use table::Table;
