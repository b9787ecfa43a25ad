//! Entry - the in-memory model for one filesystem node

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One node in the directory tree: a file, directory, or symlink.
///
/// Serialized field names are PascalCase in every output format
/// (`ModifiedTime`, `IsLink`, `IsDir`, `LinksTo`, `Size`, `Name`,
/// `Children`). `children` is always serialized, even when empty, so the
/// shape stays uniform across formats; it is non-empty only for
/// directories walked in recursive mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    pub modified_time: DateTime<Utc>,
    pub is_link: bool,
    pub is_dir: bool,
    /// Link target text; empty for non-links and for links whose target
    /// could not be read.
    pub links_to: String,
    /// Byte size from the directory-entry metadata. Directory sizes are the
    /// raw OS-reported entry size, never a recursive sum of children.
    pub size: u64,
    pub name: String,
    pub children: Vec<Entry>,
}
