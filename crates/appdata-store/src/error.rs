//! Error types for appdata-store

use std::path::PathBuf;

use crate::DirectoryKind;

/// Result type for appdata-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in appdata-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No base directory available for {kind}")]
    Resolve { kind: DirectoryKind },

    #[error("Filesystem refused to remove {path}")]
    Remove { path: PathBuf },

    #[error("Failed to encode value for {file_name}: {message}")]
    Encode { file_name: String, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
