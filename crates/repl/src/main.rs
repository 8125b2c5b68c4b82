//! `quill` - a line-oriented front end over the query engine.
//!
//! Reads statements from stdin one line at a time, executes each against
//! a single in-process engine, and writes exactly one response line per
//! input line. Lines are byte-split on `\n`, not UTF-8 decoded, so quoted
//! values may carry arbitrary octets.

mod protocol;

use std::io::{self, BufRead, Write};

use quill_core::Error;
use quill_engine::Engine;
use quill_parser::parse_statement;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::protocol::{render, render_error};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut engine = Engine::new();

    for line in stdin.lock().split(b'\n') {
        let line = line?;
        let response = match parse_statement(&line) {
            Some(statement) => {
                debug!(?statement, "dispatch");
                match engine.execute(statement) {
                    Ok(outcome) => render(&outcome),
                    Err(err) => render_error(&err),
                }
            }
            None => render_error(&Error::Syntax),
        };
        out.write_all(response.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
    }
    Ok(())
}
