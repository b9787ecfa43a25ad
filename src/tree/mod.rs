//! Directory tree model and the walk that builds it

mod entry;
mod walker;

pub use entry::Entry;
pub use walker::build_tree;
