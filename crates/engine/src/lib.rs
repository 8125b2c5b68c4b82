//! Quill Engine - statement execution over an in-memory database.
//!
//! [`Database`] is the table namespace; [`Engine`] wraps one and executes
//! parsed statements against it, owning the registry of open cursors.
//! Each statement yields an [`Outcome`] that the caller renders however
//! its surface requires.

#![no_std]

extern crate alloc;

mod database;
mod engine;

pub use database::Database;
pub use engine::{CursorId, Engine, Outcome};
