//! gols - directory tree lister with text, JSON, and YAML output

pub mod error;
pub mod output;
pub mod tree;

pub use error::{Error, Result};
pub use output::Format;
pub use tree::{Entry, build_tree};
