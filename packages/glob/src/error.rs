//! Error types for glob resolution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur while walking or resolving globs.
#[derive(Debug, thiserror::Error)]
pub enum GlobError {
    /// The directory to walk does not exist.
    #[error("Directory not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path to walk exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Failed to list a directory.
    #[error("Failed to read directory {}: {io_error}", path.display())]
    ReadDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to get metadata for a path.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    MetadataError {
        /// The path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Directory traversal failed below the walk root.
    #[error("Failed to enumerate directory {}: {message}", path.display())]
    EnumerationError {
        /// The walk root.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The process working directory could not be determined.
    #[error("Failed to determine current directory: {0}")]
    CurrentDirError(#[source] std::io::Error),
}

impl GlobError {
    /// Whether this error means the walk root is absent or unusable as a
    /// directory, which glob resolution treats as "no matches".
    #[must_use]
    pub const fn is_missing_root(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotADirectory { .. })
    }
}
