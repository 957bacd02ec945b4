//! Lesson content model and filesystem access
//!
//! This crate walks a content root into an ordered tree of lessons and
//! validates caller-supplied paths so that nothing outside the root is
//! ever touched.

pub mod error;
pub mod node;
pub mod resolve;
pub mod scan;

pub use error::{ResolveError, ScanError};
pub use node::{natural_cmp, ContentNode, NodeKind};
pub use resolve::{has_traversal, resolve};
pub use scan::{scan, HIDDEN_PREFIX, RESERVED_ASSETS_DIR};
