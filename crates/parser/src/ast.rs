//! Typed statement records and the predicate AST.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use quill_core::Bytes;

/// A row filter: the closed set of predicate shapes the grammar produces.
///
/// The tree is exclusively owned and acyclic, built once per statement and
/// immutable afterwards; evaluation is a read-only traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// No filter: every row that exists at evaluation time.
    All,
    /// `column = value`, compiled to an inclusive point range over the
    /// column's sorted index. Equality is the only comparison the grammar
    /// supports; that is a deliberate limitation.
    Equals { column: String, value: Bytes },
    /// Set intersection of both sides.
    And(Box<Selector>, Box<Selector>),
    /// Set union of both sides.
    Or(Box<Selector>, Box<Selector>),
}

/// `select * from <table> [where <selector>]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectStatement {
    pub table: String,
    pub selector: Selector,
}

/// `insert into <table> (<columns>) values (<tuple>), ...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Bytes>>,
}

/// `create table <table> (<columns>)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateTableStatement {
    pub table: String,
    pub columns: Vec<String>,
}

/// `update cursor <id> set <column>=<value>, ...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateStatement {
    pub cursor_id: u64,
    pub assignments: Vec<(String, Bytes)>,
}

/// One complete parsed statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    CreateTable(CreateTableStatement),
    GetCursor(u64),
    AdvanceCursor(u64),
    UpdateCursor(UpdateStatement),
}
