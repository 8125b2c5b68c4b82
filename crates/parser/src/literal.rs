//! Quoted string literals.
//!
//! Two distinct literal forms joined by ordered choice. Single-quoted
//! strings treat a backslash as "emit the next byte verbatim"; double-quoted
//! strings additionally decode `\n`, `\t`, `\r`, `\b` and `\xHH` byte
//! escapes. Input exhausted before the closing delimiter is a parse
//! failure, not a truncated value.

use crate::combinator::{any_byte, either, Input, ParseResult};
use alloc::vec::Vec;
use quill_core::Bytes;

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parses a `delim`-quoted literal, decoding each backslash escape with
/// `esc`. Every escape emits exactly one byte.
fn quoted<'a>(
    delim: u8,
    esc: impl Fn(Input<'a>) -> ParseResult<'a, u8>,
) -> impl Fn(Input<'a>) -> ParseResult<'a, Bytes> {
    move |input| {
        let mut rest = match input.peek() {
            Some(byte) if byte == delim => input.advance(1),
            _ => return None,
        };
        let mut value = Vec::new();
        loop {
            match rest.peek() {
                None => return None,
                Some(byte) if byte == delim => return Some((value, rest.advance(1))),
                Some(b'\\') => {
                    let (byte, r) = esc(rest.advance(1))?;
                    value.push(byte);
                    rest = r;
                }
                Some(byte) => {
                    value.push(byte);
                    rest = rest.advance(1);
                }
            }
        }
    }
}

/// `'...'`: a backslash emits the following byte unchanged (so `\n` is the
/// letter `n`, and there is no hex decoding).
pub fn single_quoted(input: Input<'_>) -> ParseResult<'_, Bytes> {
    quoted(b'\'', any_byte)(input)
}

fn double_escape(input: Input<'_>) -> ParseResult<'_, u8> {
    let (byte, rest) = any_byte(input)?;
    match byte {
        b'n' => Some((b'\n', rest)),
        b't' => Some((b'\t', rest)),
        b'r' => Some((b'\r', rest)),
        b'b' => Some((0x08, rest)),
        b'x' => {
            let (hi, rest) = any_byte(rest)?;
            let (lo, rest) = any_byte(rest)?;
            Some((hex_value(hi)? * 0x10 + hex_value(lo)?, rest))
        }
        other => Some((other, rest)),
    }
}

/// `"..."`: `\n`, `\t`, `\r`, `\b` decode to their control codes, `\xHH`
/// (exactly two hex digits, either case) to that byte value, and any other
/// escaped byte emits itself.
pub fn double_quoted(input: Input<'_>) -> ParseResult<'_, Bytes> {
    quoted(b'"', double_escape)(input)
}

/// Either literal form; the single-quoted parser is tried first.
pub fn string_literal(input: Input<'_>) -> ParseResult<'_, Bytes> {
    either(single_quoted, double_quoted)(input)
}
