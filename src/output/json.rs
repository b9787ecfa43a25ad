//! JSON renderer

use std::io::{self, Write};

use crate::tree::Entry;

/// Pretty-printed JSON (2-space indent) followed by a newline.
pub fn render(entries: &[Entry], out: &mut impl Write) -> io::Result<()> {
    let body = serde_json::to_string_pretty(entries)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", body)
}
