//! Parser-combinator framework.
//!
//! A parser is a pure function from an input view to
//! `Option<(value, rest)>`: `Some` carries the parsed value and the advanced
//! input, `None` is failure with no position advance and no partial value.
//! Combinators compose parsers by returning closures, so a grammar reads as
//! a pipeline of primitives with no shared parsing state.

use alloc::vec::Vec;

/// A cheap, copyable view into the statement text: the full buffer plus a
/// byte offset. Advancing produces a new view; the buffer is never copied.
#[derive(Clone, Copy, Debug)]
pub struct Input<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Input<'a> {
    /// Creates a view over the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Number of unconsumed bytes.
    pub fn len(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// True when all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// The next byte, if any.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// A view advanced by `n` bytes, clamped to the end of the buffer.
    pub fn advance(&self, n: usize) -> Self {
        Self {
            bytes: self.bytes,
            pos: (self.pos + n).min(self.bytes.len()),
        }
    }
}

/// Success carries the value and the rest of the input; failure is `None`.
pub type ParseResult<'a, T> = Option<(T, Input<'a>)>;

/// Whitespace per C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Greedily scans bytes satisfying `pred`. Never fails; the match may be
/// empty.
pub fn take_while<'a>(
    pred: impl Fn(u8) -> bool,
) -> impl Fn(Input<'a>) -> ParseResult<'a, &'a [u8]> {
    move |input| {
        let rest = input.rest();
        let end = rest.iter().position(|&b| !pred(b)).unwrap_or(rest.len());
        Some((&rest[..end], input.advance(end)))
    }
}

/// Like `take_while`, but fails on an empty match.
pub fn take_while1<'a>(
    pred: impl Fn(u8) -> bool,
) -> impl Fn(Input<'a>) -> ParseResult<'a, &'a [u8]> {
    let scan = take_while(pred);
    move |input| match scan(input) {
        Some((matched, rest)) if !matched.is_empty() => Some((matched, rest)),
        _ => None,
    }
}

/// Matches `literal` ASCII case-insensitively, yielding `()`.
pub fn exact<'a>(literal: &'static str) -> impl Fn(Input<'a>) -> ParseResult<'a, ()> {
    move |input| {
        let rest = input.rest();
        let lit = literal.as_bytes();
        if rest.len() >= lit.len() && rest[..lit.len()].eq_ignore_ascii_case(lit) {
            Some(((), input.advance(lit.len())))
        } else {
            None
        }
    }
}

/// Consumes exactly one byte.
pub fn any_byte(input: Input<'_>) -> ParseResult<'_, u8> {
    let byte = input.peek()?;
    Some((byte, input.advance(1)))
}

/// One-or-more whitespace bytes.
pub fn ws1(input: Input<'_>) -> ParseResult<'_, ()> {
    let (_, rest) = take_while1(is_space)(input)?;
    Some(((), rest))
}

/// Zero-or-more whitespace bytes. Never fails.
pub fn ws0(input: Input<'_>) -> ParseResult<'_, ()> {
    let (_, rest) = take_while(is_space)(input)?;
    Some(((), rest))
}

/// Ordered choice: tries `a`, and only on failure tries `b` from the
/// original position. There is no other backtracking.
pub fn either<'a, T>(
    a: impl Fn(Input<'a>) -> ParseResult<'a, T>,
    b: impl Fn(Input<'a>) -> ParseResult<'a, T>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, T> {
    move |input| a(input).or_else(|| b(input))
}

/// Runs both parsers in sequence, keeping the right value.
pub fn right<'a, A, B>(
    a: impl Fn(Input<'a>) -> ParseResult<'a, A>,
    b: impl Fn(Input<'a>) -> ParseResult<'a, B>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, B> {
    move |input| {
        let (_, rest) = a(input)?;
        b(rest)
    }
}

/// Runs both parsers in sequence, keeping the left value.
pub fn left<'a, A, B>(
    a: impl Fn(Input<'a>) -> ParseResult<'a, A>,
    b: impl Fn(Input<'a>) -> ParseResult<'a, B>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, A> {
    move |input| {
        let (value, rest) = a(input)?;
        let (_, rest) = b(rest)?;
        Some((value, rest))
    }
}

/// Runs both parsers in sequence for their syntax only.
pub fn both<'a, A, B>(
    a: impl Fn(Input<'a>) -> ParseResult<'a, A>,
    b: impl Fn(Input<'a>) -> ParseResult<'a, B>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, ()> {
    move |input| {
        let (_, rest) = a(input)?;
        let (_, rest) = b(rest)?;
        Some(((), rest))
    }
}

/// Runs three parsers in sequence, keeping the middle value.
pub fn middle<'a, A, B, C>(
    a: impl Fn(Input<'a>) -> ParseResult<'a, A>,
    b: impl Fn(Input<'a>) -> ParseResult<'a, B>,
    c: impl Fn(Input<'a>) -> ParseResult<'a, C>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, B> {
    move |input| {
        let (_, rest) = a(input)?;
        let (value, rest) = b(rest)?;
        let (_, rest) = c(rest)?;
        Some((value, rest))
    }
}

/// Makes a parser optional: failure becomes `None` at the original
/// position.
pub fn opt<'a, T>(
    parser: impl Fn(Input<'a>) -> ParseResult<'a, T>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, Option<T>> {
    move |input| match parser(input) {
        Some((value, rest)) => Some((Some(value), rest)),
        None => Some((None, input)),
    }
}

/// Applies `f` to the parsed value.
pub fn map<'a, A, B>(
    parser: impl Fn(Input<'a>) -> ParseResult<'a, A>,
    f: impl Fn(A) -> B,
) -> impl Fn(Input<'a>) -> ParseResult<'a, B> {
    move |input| {
        let (value, rest) = parser(input)?;
        Some((f(value), rest))
    }
}

/// Parses a parenthesized, comma-separated list: `(item, item, ...)`.
///
/// After each item the next non-space byte must be `,` (continue) or `)`
/// (end of list); anything else fails the whole list. At least one item is
/// required.
pub fn tuple_of<'a, T>(
    item: impl Fn(Input<'a>) -> ParseResult<'a, T>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, Vec<T>> {
    move |input| {
        let (_, mut rest) = exact("(")(input)?;
        let mut items = Vec::new();
        loop {
            let (_, r) = ws0(rest)?;
            let (value, r) = item(r)?;
            let (_, r) = ws0(r)?;
            let (separator, r) = any_byte(r)?;
            items.push(value);
            rest = r;
            match separator {
                b',' => continue,
                b')' => break,
                _ => return None,
            }
        }
        Some((items, rest))
    }
}
