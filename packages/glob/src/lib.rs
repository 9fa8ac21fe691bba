//! Glob pattern resolution with parallel directory traversal.
//!
//! This crate resolves glob-strings such as `src/**/*.ts` into the set of
//! matching files:
//!
//! * Single-segment wildcard matching via `globset`
//! * Parallel directory traversal via `jwalk`
//! * Parallel resolution of multiple glob-strings via `rayon`
//!
//! Only `*`/`?` wildcards within the final segment and the `**` any-depth
//! token are meaningful. Malformed patterns match nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use aria_fs_glob::glob_files;
//!
//! let files = glob_files(["src/**/*.ts", "src/**/*.json"], false)?;
//! for file in &files {
//!     println!("{}", file.display());
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod engine;
mod entry;
mod error;
mod path;
mod pattern;
mod spec;
mod walker;

pub use engine::{glob_files, glob_files_in};
pub use entry::{DirEntry, EntryKind, read_entries};
pub use error::GlobError;
pub use path::{relative_output, relative_to, resolve};
pub use pattern::{SegmentPattern, matches};
pub use spec::GlobSpec;
pub use walker::{MatchSet, PathStyle, walk};
