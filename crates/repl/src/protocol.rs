//! Response rendering for the line protocol.

use quill_core::Error;
use quill_engine::Outcome;

/// Quoted payloads stop growing after this many emitted characters.
pub const QUOTE_LIMIT: usize = 1024;

/// Renders raw bytes as a double-quoted ASCII string.
///
/// Backslash and double quote get a backslash escape, printable ASCII
/// passes through, and everything else becomes `\xHH`. Output is capped
/// at [`QUOTE_LIMIT`] emitted characters; a truncated payload ends in
/// `...` inside the quotes.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::from("\"");
    let mut emitted = 0usize;
    for &byte in bytes {
        if emitted >= QUOTE_LIMIT {
            out.push_str("...");
            break;
        }
        match byte {
            b'\\' => {
                out.push_str("\\\\");
                emitted += 2;
            }
            b'"' => {
                out.push_str("\\\"");
                emitted += 2;
            }
            0x20..=0x7e => {
                out.push(byte as char);
                emitted += 1;
            }
            _ => {
                out.push_str(&format!("\\x{byte:02x}"));
                emitted += 4;
            }
        }
    }
    out.push('"');
    out
}

/// Renders a statement outcome as one protocol line, without the newline.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Cursor(id) => format!("ok {id};"),
        Outcome::Inserted(table) => {
            let message = format!("insert into {table} completed successfully");
            format!("ok {};", quote_bytes(message.as_bytes()))
        }
        Outcome::Created(table) => {
            let message = format!("table {table} created successfully");
            format!("ok {};", quote_bytes(message.as_bytes()))
        }
        Outcome::Row(record) => {
            let fields: Vec<String> = record.iter().map(|v| quote_bytes(v)).collect();
            format!("ok {};", fields.join(" "))
        }
        Outcome::Done => String::from("done;"),
        Outcome::Advanced | Outcome::Updated => String::from("ok;"),
    }
}

/// Renders an error as one protocol line, without the newline.
pub fn render_error(error: &Error) -> String {
    format!("error {};", quote_bytes(error.to_string().as_bytes()))
}
