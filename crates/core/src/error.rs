use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while publishing a post or rebuilding the index.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Reading or writing a file failed.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// File or directory involved in the failed operation
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// A post file could not be parsed or serialized as JSON.
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        /// File whose contents failed to (de)serialize
        path: PathBuf,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },
    /// markdown-rs refused to render the body.
    #[error("Render error: {0}")]
    Render(String),
    /// The HTML post-processing pass failed.
    #[error("HTML rewrite error: {0}")]
    Rewrite(String),
}

impl PublishError {
    /// Create an IO error tagged with the path it concerns
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a JSON error tagged with the path it concerns
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = PublishError> = std::result::Result<T, E>;
