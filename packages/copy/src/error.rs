//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use aria_fs_glob::GlobError;

/// Errors that can occur during copy operations.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Failed to create a directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopyError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// A matched file cannot be mapped onto the destination root.
    #[error("{} is not below source root {}", path.display(), root.display())]
    OutsideSourceRoot {
        /// The matched file.
        path: PathBuf,
        /// The root it was expected to live under.
        root: PathBuf,
    },

    /// A matched file sits directly in the working directory, so there is no
    /// leading root segment to swap for the destination root.
    #[error("{} has no source root directory to rewrite", path.display())]
    NoSourceRoot {
        /// The matched file.
        path: PathBuf,
    },

    /// Failed to determine the process working directory.
    #[error("Failed to determine current directory: {0}")]
    CurrentDirError(#[source] std::io::Error),

    /// Resolving the source globs failed.
    #[error(transparent)]
    Glob(#[from] GlobError),
}
