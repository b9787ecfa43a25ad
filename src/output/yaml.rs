//! YAML renderer

use std::io::{self, Write};

use crate::tree::Entry;

/// Block-style YAML. The serialized body already ends in a newline;
/// `writeln!` appends the trailing one the legacy output carried.
pub fn render(entries: &[Entry], out: &mut impl Write) -> io::Result<()> {
    let body =
        serde_yaml::to_string(entries).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", body)
}
