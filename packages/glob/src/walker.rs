//! Parallel directory walking with file-name filtering.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{DirEntry, EntryKind};
use crate::error::GlobError;
use crate::path::relative_output;
use crate::pattern::SegmentPattern;

/// Deduplicated, ordered set of matched paths.
pub type MatchSet = BTreeSet<PathBuf>;

/// How matched paths are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle<'a> {
    /// Full path as produced by joining onto the walk root.
    Absolute,
    /// Relative to the given working directory, prefixed with `./`.
    Relative(&'a Path),
}

impl PathStyle<'_> {
    fn render(self, path: PathBuf) -> PathBuf {
        match self {
            Self::Absolute => path,
            Self::Relative(cwd) => relative_output(cwd, &path),
        }
    }
}

/// Walk `dir` and collect every file whose name matches `pattern`.
///
/// Without `recursive` only the direct children of `dir` are considered.
/// With it, subdirectories are descended concurrently on the rayon pool.
/// Symlinks are not followed: a link is neither matched nor descended
/// into, so dangling links and link cycles below `dir` are ignored.
///
/// `dir` should be absolute for [`PathStyle::Absolute`] output to be absolute.
///
/// # Errors
///
/// * `GlobError::NotFound` if `dir` does not exist
/// * `GlobError::NotADirectory` if `dir` is not a directory
/// * If any directory below `dir` cannot be enumerated
pub fn walk(
    dir: &Path,
    pattern: &SegmentPattern,
    recursive: bool,
    style: PathStyle<'_>,
) -> Result<MatchSet, GlobError> {
    log::debug!(
        "Walking {} for {:?} (recursive: {recursive})",
        dir.display(),
        pattern.as_str()
    );

    let metadata = fs::metadata(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GlobError::NotFound {
            path: dir.to_path_buf(),
        },
        _ => GlobError::MetadataError {
            path: dir.to_path_buf(),
            io_error: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(GlobError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut matches = MatchSet::new();

    for entry in jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .min_depth(1)
        .max_depth(max_depth)
    {
        let entry = entry.map_err(|e| GlobError::EnumerationError {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let entry = DirEntry {
            path: entry.path(),
            kind: EntryKind::from(entry.file_type()),
        };

        if entry.kind == EntryKind::File
            && entry.file_name().is_some_and(|name| pattern.matches(name))
        {
            log::trace!("Matched {}", entry.path.display());
            matches.insert(style.render(entry.path));
        }
    }

    log::debug!("Found {} matches under {}", matches.len(), dir.display());
    Ok(matches)
}
