//! Quill Parser - textual statement grammar for the quill query engine.
//!
//! Three layers, bottom up:
//!
//! - `combinator`: a small parser-combinator framework (pure functions from
//!   an input view to `Option<(value, rest)>`)
//! - `literal`: single- and double-quoted string literals with their
//!   distinct escape rules
//! - `grammar`: the six statement forms and the predicate grammar, built on
//!   the framework, producing the typed `ast` records
//!
//! # Example
//!
//! ```rust
//! use quill_parser::{parse_statement, Selector, Statement};
//!
//! let stmt = parse_statement(b"select * from users where name='alice';").unwrap();
//! match stmt {
//!     Statement::Select(select) => {
//!         assert_eq!(select.table, "users");
//!         assert!(matches!(select.selector, Selector::Equals { .. }));
//!     }
//!     _ => panic!("expected select"),
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod combinator;
pub mod grammar;
pub mod literal;

pub use ast::{
    CreateTableStatement, InsertStatement, SelectStatement, Selector, Statement, UpdateStatement,
};
pub use combinator::{Input, ParseResult};
pub use grammar::{parse_statement, statement};
