use std::path::PathBuf;

use thiserror::Error;

/// Failure to list the content root itself
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read content root {path}: {source}")]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a caller-supplied path was rejected
///
/// Display strings never include the resolved path, so they are safe to
/// surface to clients.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The raw path contains a `..` segment
    #[error("path contains a parent-directory segment")]
    Traversal,
    /// The canonical path lies outside the content root
    #[error("path escapes the content root")]
    OutsideRoot,
    /// Nothing exists at the path (or the root itself is missing)
    #[error("path not found")]
    NotFound,
    #[error("I/O error while resolving path: {0}")]
    Io(#[source] std::io::Error),
}

impl ResolveError {
    /// True for the containment failures that map to "access denied"
    pub fn is_denied(&self) -> bool {
        matches!(self, ResolveError::Traversal | ResolveError::OutsideRoot)
    }
}

impl From<std::io::Error> for ResolveError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ResolveError::NotFound,
            _ => ResolveError::Io(err),
        }
    }
}
