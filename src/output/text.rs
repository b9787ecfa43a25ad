//! Plain-text tree renderer

use std::io::{self, Write};
use std::path::Path;

use crate::tree::Entry;

/// Write the root path on its own line, then every entry indented two
/// spaces per depth level in traversal order.
pub fn render(entries: &[Entry], root: &Path, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", root.display())?;
    render_entries(entries, out, "  ")
}

fn render_entries(entries: &[Entry], out: &mut impl Write, indent: &str) -> io::Result<()> {
    for entry in entries {
        write!(out, "{}{}", indent, entry.name)?;
        if entry.is_dir {
            // directory wins over link: a symlinked directory renders as a
            // directory, never with the link marker
            writeln!(out, "/")?;
            render_entries(&entry.children, out, &format!("{}  ", indent))?;
        } else if entry.is_link {
            writeln!(out, "* ({})", entry.links_to)?;
        } else {
            writeln!(out)?;
        }
    }
    Ok(())
}
