//! Glob-driven parallel file copying.
//!
//! This crate provides:
//!
//! * `mkdirp` - sequential, idempotent creation of a directory and its ancestors
//! * `copy_files` - copy every match of a set of globs onto a destination root
//! * `copy_tree` - the same, rebasing matches from an explicit source root
//!
//! Matches are copied in parallel using `rayon`.
//!
//! # Example
//!
//! ```rust,ignore
//! use aria_fs_copy::copy_files;
//!
//! let copied = copy_files(["src/elements/**/*.ts", "src/elements/**/*.json"], ".tmp")?;
//! println!("{copied} files copied");
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod dir;
mod error;

pub use copy::{copy_files, copy_files_in, copy_tree, copy_tree_in};
pub use dir::mkdirp;
pub use error::CopyError;
