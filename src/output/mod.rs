//! Output formatting for the entry tree
//!
//! Three renderers share one dispatch point, the `Format` enum. Each
//! renderer is a pure function from (entries, root path) to the output
//! sink; write failures propagate as `io::Error`.

mod json;
mod text;
mod yaml;

use std::io::{self, Write};
use std::path::Path;

use crate::tree::Entry;

/// Output format selected by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

impl Format {
    /// Map a format name to its variant. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Format::Text),
            "json" => Some(Format::Json),
            "yaml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Serialize `entries` to `out`. `root` only appears in the text
    /// renderer's header line.
    pub fn render(self, entries: &[Entry], root: &Path, out: &mut impl Write) -> io::Result<()> {
        match self {
            Format::Text => text::render(entries, root, out),
            Format::Json => json::render(entries, out),
            Format::Yaml => yaml::render(entries, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_format_names_resolve() {
        assert_eq!(Format::from_name("text"), Some(Format::Text));
        assert_eq!(Format::from_name("json"), Some(Format::Json));
        assert_eq!(Format::from_name("yaml"), Some(Format::Yaml));
    }

    #[test]
    fn unknown_format_names_rejected() {
        assert_eq!(Format::from_name("xml"), None);
        assert_eq!(Format::from_name("TEXT"), None);
        assert_eq!(Format::from_name(""), None);
    }
}
