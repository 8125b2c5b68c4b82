//! Quill Core - shared types for the quill in-memory query engine.
//!
//! This crate provides the foundation every other layer builds on:
//!
//! - `Bytes` / `Record` / `RowId`: raw field values and row identity
//! - `Error` / `Result`: error types shared by parser, storage, and engine
//!
//! # Example
//!
//! ```rust
//! use quill_core::{Bytes, Record, RowId};
//!
//! let record: Record = vec![b"1".to_vec(), b"alice".to_vec()];
//! let id: RowId = 0;
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(id, 0);
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;

pub use error::{Error, Result};
pub use row::{Bytes, Record, RowId};
