//! Recursive directory walk that builds the Entry tree

use std::fs::{self, DirEntry};
use std::path::Path;

use chrono::{DateTime, Utc};

use super::entry::Entry;
use crate::error::{Error, Result};

/// Walk `path` and produce one `Entry` per direct child, sorted by name.
///
/// With `recursive` set, descends depth-first into every subdirectory and
/// collects each subdirectory's listing as its `children`; otherwise every
/// entry's `children` is empty. Any listing or metadata failure aborts the
/// whole build; partial trees are never returned.
///
/// There is no symlink-loop protection: a symlinked directory is descended
/// into like any other directory, so a cyclic link structure recurses
/// without bound.
pub fn build_tree(path: &Path, recursive: bool) -> Result<Vec<Entry>> {
    let listing = fs::read_dir(path).map_err(|source| Error::DirectoryRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dir_entries = Vec::new();
    for entry in listing {
        let entry = entry.map_err(|source| Error::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        dir_entries.push(entry);
    }
    // read_dir order is platform-arbitrary; sort for deterministic output
    dir_entries.sort_by_key(|e| e.file_name());

    let mut entries = Vec::with_capacity(dir_entries.len());
    for entry in &dir_entries {
        entries.push(to_entry(entry, recursive)?);
    }
    Ok(entries)
}

fn to_entry(entry: &DirEntry, recursive: bool) -> Result<Entry> {
    let path = entry.path();

    // lstat semantics: size and mtime describe the entry itself, links included
    let meta = entry.metadata().map_err(|source| Error::DirectoryRead {
        path: path.clone(),
        source,
    })?;

    let is_link = meta.file_type().is_symlink();
    let links_to = if is_link {
        read_link_target(&path)
    } else {
        String::new()
    };

    // follows symlinks, so a symlinked directory counts as a directory
    let is_dir = path.is_dir();

    let children = if is_dir && recursive {
        build_tree(&path, recursive)?
    } else {
        Vec::new()
    };

    let modified_time = meta
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::UNIX_EPOCH);

    Ok(Entry {
        modified_time,
        is_link,
        is_dir,
        links_to,
        size: meta.len(),
        name: entry.file_name().to_string_lossy().into_owned(),
        children,
    })
}

/// Best-effort readlink: a target that cannot be read yields an empty
/// string rather than aborting the walk. A dangling link still reports its
/// raw target text, since readlink does not resolve the target.
fn read_link_target(path: &Path) -> String {
    match fs::read_link(path) {
        Ok(target) => target.to_string_lossy().into_owned(),
        Err(_) => String::new(),
    }
}
