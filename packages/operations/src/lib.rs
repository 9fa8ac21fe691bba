//! File operations for aria-fs.
//!
//! This crate is the public surface of the filesystem core:
//!
//! * Glob resolution (`glob_files`)
//! * Recursive deletion (`clean`)
//! * Glob-driven copying (`copy_files`, `copy_tree`)
//! * Directory creation (`mkdirp`)
//! * Symlink management (`symlink_dir`, `symlink_file`, `unlink_dir`, `unlink_file`)
//!
//! # Example
//!
//! ```rust,ignore
//! use aria_fs_operations::{Linker, Platform, clean, symlink_dir};
//!
//! clean("dist")?;
//! symlink_dir("packages/core", "node_modules/core")?;
//!
//! // Pick link kinds for an explicit platform instead of the host's.
//! Linker::new(Platform::Windows).symlink_dir("src", "dest")?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod clean;
mod error;
mod symlink;

pub use aria_fs_config::{LinkKind, Platform};
pub use aria_fs_copy::{
    CopyError, copy_files, copy_files_in, copy_tree, copy_tree_in, mkdirp,
};
pub use aria_fs_glob::{GlobError, glob_files, glob_files_in};
pub use clean::clean;
pub use error::OperationError;
pub use symlink::{
    LinkCreator, LinkType, Linker, NativeLinker, symlink_dir, symlink_file, unlink, unlink_dir,
    unlink_file,
};

/// Result of a single mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// A new link was created where nothing existed.
    Created,
    /// A link was created after removing whatever occupied the path.
    Replaced,
    /// The path was deleted.
    Removed,
    /// The path did not exist, nothing was done.
    Skipped,
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Replaced => write!(f, "replaced"),
            Self::Removed => write!(f, "removed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}
