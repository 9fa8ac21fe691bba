//! Error types for file operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during file operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// IO error during file operation.
    #[error("IO error at {}: {source}", path.display())]
    IoError {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create symlink.
    #[error("Failed to create symlink from {} to {}: {error}", target_path.display(), source_path.display())]
    SymlinkError {
        /// What the link points at.
        source_path: PathBuf,
        /// Where the link was being created.
        target_path: PathBuf,
        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// Listing a directory failed.
    #[error(transparent)]
    Glob(#[from] aria_fs_glob::GlobError),

    /// Copying or directory creation failed.
    #[error(transparent)]
    Copy(#[from] aria_fs_copy::CopyError),
}
