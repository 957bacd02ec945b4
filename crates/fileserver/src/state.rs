//! Shared server state

use content::{ContentNode, ResolveError};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Server state; holds only the content root
///
/// Nothing else is shared between requests: the tree is scanned afresh for
/// every request that needs it.
#[derive(Clone)]
pub struct ServerState {
    content_root: Arc<PathBuf>,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    /// * `content_root` - Absolute directory holding lessons, videos and assets
    pub fn new(content_root: PathBuf) -> Self {
        Self {
            content_root: Arc::new(content_root),
        }
    }

    /// Get the content root
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Scan the content tree on the blocking pool
    pub async fn scan_tree(&self) -> crate::Result<Vec<ContentNode>> {
        let root = Arc::clone(&self.content_root);
        let tree = tokio::task::spawn_blocking(move || content::scan(&root)).await??;
        Ok(tree)
    }

    /// Scan the content tree, degrading to an empty tree on failure
    ///
    /// Used by pages, where the sidebar is decoration rather than the payload.
    pub async fn tree_or_empty(&self) -> Vec<ContentNode> {
        self.scan_tree().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to scan content tree: {}", e);
            Vec::new()
        })
    }

    /// Resolve a caller-supplied path through the containment guard
    ///
    /// # Arguments
    /// * `user_path` - Untrusted, already percent-decoded relative path
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Canonical path inside the content root
    /// * `Err(ResolveError)` - Traversal, escape, or missing path
    pub async fn resolve(&self, user_path: &str) -> Result<PathBuf, ResolveError> {
        let root = Arc::clone(&self.content_root);
        let user_path = user_path.to_string();
        tokio::task::spawn_blocking(move || content::resolve(&root, &user_path))
            .await
            .unwrap_or_else(|e| Err(ResolveError::Io(std::io::Error::other(e))))
    }
}
