//! Report serialization.
//!
//! The report is a single JSON object (selector -> presence), serialized with
//! 4-space indentation and written to stdout followed by a newline. No other
//! output format is supported. serde_json's default pretty printer indents
//! with 2 spaces, so the formatter is configured explicitly.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::checker::ResultMap;
use crate::error::GraderError;

/// Serialize the result map as 4-space-indented JSON (no trailing newline).
pub fn render(results: &ResultMap) -> Result<Vec<u8>, GraderError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the report to stdout, newline-terminated.
pub fn print(results: &ResultMap) -> Result<(), GraderError> {
    let mut buf = render(results)?;
    buf.push(b'\n');
    let mut stdout = io::stdout().lock();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}
