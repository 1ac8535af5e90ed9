//! Error types for copycode
//!
//! Every failure is fatal to a run; variants carry the offending path so the
//! CLI can report it directly.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for copycode operations
pub type Result<T> = std::result::Result<T, CopyCodeError>;

/// Error type for copycode operations
#[derive(Error, Debug)]
pub enum CopyCodeError {
    /// Source directory does not exist
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Source directory or a file in it is not accessible
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// File content or entry name is not valid UTF-8
    #[error("Decode error: {} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    /// Any other failure while reading an input
    #[error("Read error: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be created or replaced
    #[error("Write failure: {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CopyCodeError {
    /// Classify an I/O error raised while listing the directory at `path`.
    pub fn from_listing(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => CopyCodeError::DirectoryNotFound { path },
            _ => Self::from_read(path, source),
        }
    }

    /// Classify an I/O error raised while reading the file at `path`.
    ///
    /// Invalid data becomes `Decode`; anything that is not a permission
    /// problem is a generic `Read` failure.
    pub fn from_read(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => CopyCodeError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CopyCodeError::Decode { path },
            _ => CopyCodeError::Read { path, source },
        }
    }

    /// Wrap an I/O error raised while producing the output at `path`.
    pub fn write_failure(path: impl AsRef<Path>, source: io::Error) -> Self {
        CopyCodeError::WriteFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CopyCodeError::DirectoryNotFound { .. } => "directory_not_found",
            CopyCodeError::PermissionDenied { .. } => "permission_denied",
            CopyCodeError::Decode { .. } => "decode_error",
            CopyCodeError::Read { .. } => "read_error",
            CopyCodeError::WriteFailure { .. } => "write_failure",
            CopyCodeError::Config(_) => "config_error",
            CopyCodeError::Other(_) => "other",
        }
    }
}
