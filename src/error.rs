//! Error types for gols

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A directory listing failed, at the root or at any depth.
    /// Fatal: the build aborts rather than returning a partial tree.
    #[error("cannot read directory '{}': {}", path.display(), source)]
    DirectoryRead { path: PathBuf, source: io::Error },
}
