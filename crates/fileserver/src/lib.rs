//! HTTP server for browsing lesson content
//!
//! This crate serves the content tree, rendered lesson pages, lesson assets
//! and videos from a single content root, with range request support for
//! video seeking.

pub mod config;
mod error;
mod mime;
mod pages;
pub mod responder;
mod server;
mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use mime::content_type;
pub use responder::{parse_range, serve_file, ByteRange};
pub use server::LessonServer;
pub use state::ServerState;

/// Result type alias for file server operations
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
