//! Containment guard for caller-supplied paths
//!
//! Every endpoint that touches the filesystem by name goes through
//! [`resolve`] before any stat or read.

use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// True if any `/` or `\` separated segment of `user_path` is `..`
pub fn has_traversal(user_path: &str) -> bool {
    user_path.split(['/', '\\']).any(|segment| segment == "..")
}

/// Resolve `user_path` against `root`, rejecting anything that escapes it
///
/// On success the returned path is canonical (symlinks resolved) and lies
/// inside the canonical root, or equals it.
pub fn resolve(root: &Path, user_path: &str) -> Result<PathBuf, ResolveError> {
    if has_traversal(user_path) {
        return Err(ResolveError::Traversal);
    }

    let canonical_root = root.canonicalize()?;
    let candidate = canonical_root.join(user_path);

    let canonical = match candidate.canonicalize() {
        Ok(path) => path,
        // A file used as a directory ("lesson.md/x") is just not there
        Err(_) if !candidate.exists() => return Err(ResolveError::NotFound),
        Err(e) => return Err(e.into()),
    };

    if !canonical.starts_with(&canonical_root) {
        tracing::warn!("Rejected path outside content root: {:?}", user_path);
        return Err(ResolveError::OutsideRoot);
    }

    Ok(canonical)
}
