//! Directory creation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::CopyError;

/// Create `path` and every missing ancestor, root first.
///
/// Existing segments are left alone, so calling this on a directory that
/// already exists creates nothing. Relative paths are resolved against the
/// process working directory.
///
/// Returns the directories that were created, outermost first.
///
/// # Errors
///
/// * If `path` cannot be made absolute
/// * If a missing segment cannot be created (for example because an
///   ancestor is a regular file)
pub fn mkdirp(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, CopyError> {
    let path = path.as_ref();
    let absolute = std::path::absolute(path).map_err(|e| CopyError::CreateDirError {
        path: path.to_path_buf(),
        io_error: e,
    })?;
    let absolute = path_clean::clean(absolute);

    let mut segments: Vec<&Path> = absolute.ancestors().collect();
    segments.reverse();

    let mut created = Vec::new();
    for segment in segments {
        if segment.as_os_str().is_empty() || segment.exists() {
            continue;
        }

        match fs::create_dir(segment) {
            Ok(()) => {
                log::trace!("Created directory {}", segment.display());
                created.push(segment.to_path_buf());
            }
            // Lost a race with another creator; fine as long as it is a directory.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && segment.is_dir() => {}
            Err(e) => {
                return Err(CopyError::CreateDirError {
                    path: segment.to_path_buf(),
                    io_error: e,
                });
            }
        }
    }

    log::debug!(
        "mkdirp {}: created {} directories",
        absolute.display(),
        created.len()
    );
    Ok(created)
}
