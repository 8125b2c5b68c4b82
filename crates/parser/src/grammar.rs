//! Statement and predicate grammar.
//!
//! Keywords match ASCII case-insensitively. A statement ends at the first
//! of `;`, `#`, or `-- `; trailing text after the terminator is ignored.
//! The predicate grammar is
//!
//! ```text
//! or_term  := and_term (ws1 "or" or_term)?
//! and_term := term (ws0 "and" and_term)?
//! term     := ws0 "(" or_term ws0 ")" | ws0 ident ws0 "=" ws0 string
//! ```
//!
//! so AND binds tighter than OR. The recursive descent associates to the
//! right, which is unobservable: AND and OR evaluate as associative,
//! commutative set operations.

use crate::ast::{
    CreateTableStatement, InsertStatement, SelectStatement, Selector, Statement, UpdateStatement,
};
use crate::combinator::{
    both, either, exact, map, middle, opt, right, take_while1, tuple_of, ws0, ws1, Input,
    ParseResult,
};
use crate::literal::string_literal;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// One-or-more letters or underscores.
pub fn identifier(input: Input<'_>) -> ParseResult<'_, String> {
    let (name, rest) = take_while1(|b| b.is_ascii_alphabetic() || b == b'_')(input)?;
    let name = core::str::from_utf8(name).ok()?;
    Some((String::from(name), rest))
}

/// One-or-more ASCII digits as a `u64`. A run of digits that overflows the
/// native integer is a parse failure.
pub fn number(input: Input<'_>) -> ParseResult<'_, u64> {
    let (digits, rest) = take_while1(|b| b.is_ascii_digit())(input)?;
    let digits = core::str::from_utf8(digits).ok()?;
    let value = digits.parse().ok()?;
    Some((value, rest))
}

fn statement_end(input: Input<'_>) -> ParseResult<'_, ()> {
    either(exact(";"), either(exact("#"), exact("-- ")))(input)
}

fn term(input: Input<'_>) -> ParseResult<'_, Selector> {
    let parenthesized = middle(both(ws0, exact("(")), or_term, both(ws0, exact(")")));
    if let Some(parsed) = parenthesized(input) {
        return Some(parsed);
    }

    let (_, rest) = ws0(input)?;
    let (column, rest) = identifier(rest)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = exact("=")(rest)?;
    let (_, rest) = ws0(rest)?;
    let (value, rest) = string_literal(rest)?;
    Some((Selector::Equals { column, value }, rest))
}

fn and_term(input: Input<'_>) -> ParseResult<'_, Selector> {
    let (lhs, rest) = term(input)?;
    match right(both(ws0, exact("and")), and_term)(rest) {
        Some((rhs, rest)) => Some((Selector::And(Box::new(lhs), Box::new(rhs)), rest)),
        None => Some((lhs, rest)),
    }
}

/// Entry point of the predicate grammar. The whitespace before `or` is
/// mandatory while the one before `and` is not; both quirks are part of the
/// accepted language.
pub fn or_term(input: Input<'_>) -> ParseResult<'_, Selector> {
    let (lhs, rest) = and_term(input)?;
    match right(both(ws1, exact("or")), or_term)(rest) {
        Some((rhs, rest)) => Some((Selector::Or(Box::new(lhs), Box::new(rhs)), rest)),
        None => Some((lhs, rest)),
    }
}

fn where_clause(input: Input<'_>) -> ParseResult<'_, Selector> {
    right(both(ws1, exact("where")), right(ws1, or_term))(input)
}

fn select_statement(input: Input<'_>) -> ParseResult<'_, SelectStatement> {
    let (_, rest) = ws0(input)?;
    let (_, rest) = exact("select")(rest)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = exact("*")(rest)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = exact("from")(rest)?;
    let (_, rest) = ws1(rest)?;
    let (table, rest) = identifier(rest)?;
    let (selector, rest) = opt(where_clause)(rest)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = statement_end(rest)?;
    let selector = selector.unwrap_or(Selector::All);
    Some((SelectStatement { table, selector }, rest))
}

fn insert_statement(input: Input<'_>) -> ParseResult<'_, InsertStatement> {
    let (_, rest) = ws0(input)?;
    let (_, rest) = exact("insert")(rest)?;
    let (_, rest) = ws1(rest)?;
    let (_, rest) = exact("into")(rest)?;
    let (_, rest) = ws1(rest)?;
    let (table, rest) = identifier(rest)?;
    let (_, rest) = ws0(rest)?;
    let (columns, rest) = tuple_of(identifier)(rest)?;
    let (_, rest) = ws0(rest)?;
    let (_, mut rest) = exact("values")(rest)?;

    // Zero tuples and a trailing comma are both tolerated; the list simply
    // ends at the first position where no further tuple parses.
    let mut values = Vec::new();
    loop {
        let (_, r) = ws0(rest)?;
        let Some((tuple, r)) = tuple_of(string_literal)(r) else {
            break;
        };
        values.push(tuple);
        let (_, r) = ws0(r)?;
        match r.peek() {
            Some(b',') => rest = r.advance(1),
            _ => {
                rest = r;
                break;
            }
        }
    }

    let (_, rest) = ws0(rest)?;
    let (_, rest) = statement_end(rest)?;
    Some((InsertStatement { table, columns, values }, rest))
}

fn create_table_statement(input: Input<'_>) -> ParseResult<'_, CreateTableStatement> {
    let (_, rest) = ws0(input)?;
    let (_, rest) = exact("create")(rest)?;
    let (_, rest) = ws1(rest)?;
    let (_, rest) = exact("table")(rest)?;
    let (_, rest) = ws1(rest)?;
    let (table, rest) = identifier(rest)?;
    let (_, rest) = ws0(rest)?;
    let (columns, rest) = tuple_of(identifier)(rest)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = statement_end(rest)?;
    Some((CreateTableStatement { table, columns }, rest))
}

/// `<keyword> cursor <id>` prefix shared by the three cursor statements.
fn cursor_head<'a>(keyword: &'static str) -> impl Fn(Input<'a>) -> ParseResult<'a, u64> {
    move |input| {
        let (_, rest) = ws0(input)?;
        let (_, rest) = exact(keyword)(rest)?;
        let (_, rest) = ws1(rest)?;
        let (_, rest) = exact("cursor")(rest)?;
        let (_, rest) = ws1(rest)?;
        number(rest)
    }
}

fn get_cursor(input: Input<'_>) -> ParseResult<'_, u64> {
    let (id, rest) = cursor_head("get")(input)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = statement_end(rest)?;
    Some((id, rest))
}

fn advance_cursor(input: Input<'_>) -> ParseResult<'_, u64> {
    let (id, rest) = cursor_head("advance")(input)?;
    let (_, rest) = ws0(rest)?;
    let (_, rest) = statement_end(rest)?;
    Some((id, rest))
}

fn update_cursor(input: Input<'_>) -> ParseResult<'_, UpdateStatement> {
    let (cursor_id, rest) = cursor_head("update")(input)?;
    let (_, rest) = ws1(rest)?;
    let (_, rest) = exact("set")(rest)?;
    let (_, mut rest) = ws1(rest)?;

    let mut assignments = Vec::new();
    loop {
        let (_, r) = ws0(rest)?;
        let (column, r) = identifier(r)?;
        let (_, r) = ws0(r)?;
        let (_, r) = exact("=")(r)?;
        let (_, r) = ws0(r)?;
        let (value, r) = string_literal(r)?;
        let (_, r) = ws0(r)?;
        assignments.push((column, value));
        match r.peek() {
            Some(b',') => rest = r.advance(1),
            _ => {
                rest = r;
                break;
            }
        }
    }

    let (_, rest) = ws0(rest)?;
    let (_, rest) = statement_end(rest)?;
    Some((UpdateStatement { cursor_id, assignments }, rest))
}

/// Parses one complete statement: the six forms joined by ordered choice.
pub fn statement(input: Input<'_>) -> ParseResult<'_, Statement> {
    either(
        map(select_statement, Statement::Select),
        either(
            map(get_cursor, Statement::GetCursor),
            either(
                map(advance_cursor, Statement::AdvanceCursor),
                either(
                    map(insert_statement, Statement::Insert),
                    either(
                        map(create_table_statement, Statement::CreateTable),
                        map(update_cursor, Statement::UpdateCursor),
                    ),
                ),
            ),
        ),
    )(input)
}

/// Parses one statement from a raw input line. Text after the terminator is
/// ignored; `None` means no grammar rule matched.
pub fn parse_statement(line: &[u8]) -> Option<Statement> {
    statement(Input::new(line)).map(|(parsed, _)| parsed)
}
