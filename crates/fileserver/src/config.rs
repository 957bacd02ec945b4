//! Server configuration from environment variables

use std::path::{Path, PathBuf};

/// Environment variable selecting the content root
pub const CONTENT_ROOT_VAR: &str = "CONTENT_ROOT";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Content root used when `CONTENT_ROOT` is unset, relative to the working directory
pub const DEFAULT_CONTENT_DIR: &str = "../content";

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Absolute content root directory
    pub content_root: PathBuf,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the process environment
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|e| {
            tracing::warn!("Failed to read working directory: {}", e);
            PathBuf::from(".")
        });
        Self::from_lookup(&cwd, |key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Arguments
    /// * `cwd` - Directory that relative content roots are resolved against
    /// * `lookup` - Returns the value of a variable, if set
    pub fn from_lookup<F>(cwd: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_root = match lookup(CONTENT_ROOT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => absolute(cwd, Path::new(value.trim())),
            None => absolute(cwd, Path::new(DEFAULT_CONTENT_DIR)),
        };

        let host = lookup(HOST_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid {} value {:?}, using {}",
                    PORT_VAR,
                    value,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            content_root,
            host,
            port,
        }
    }
}

/// Make `path` absolute against `cwd`, canonicalizing when it exists
fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    let joined = cwd.join(path);
    joined.canonicalize().unwrap_or(joined)
}
