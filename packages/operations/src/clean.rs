//! Recursive deletion.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

use aria_fs_glob::read_entries;
use rayon::prelude::*;

use crate::OperationResult;
use crate::error::OperationError;

/// Delete `path` and everything below it.
///
/// Directories are emptied leaves-up, with the children of each level
/// removed in parallel, and then removed themselves. Files and symlinks are
/// unlinked directly; a symlink is never followed.
///
/// Returns `Skipped` if `path` does not exist, so calling this twice is
/// harmless.
///
/// # Errors
///
/// * If any entry cannot be inspected or removed. Siblings already removed
///   stay removed.
pub fn clean(path: impl AsRef<Path>) -> Result<OperationResult, OperationError> {
    let path = path.as_ref();
    log::debug!("Cleaning {}", path.display());

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Nothing to clean at {}", path.display());
            return Ok(OperationResult::Skipped);
        }
        Err(e) => {
            return Err(OperationError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if metadata.is_dir() {
        remove_tree(path)?;
    } else {
        remove_entry(path)?;
    }

    Ok(OperationResult::Removed)
}

/// Remove a directory after removing all of its children in parallel.
fn remove_tree(dir: &Path) -> Result<(), OperationError> {
    let entries = read_entries(dir)?;

    entries.par_iter().try_for_each(|entry| {
        if entry.is_dir() {
            remove_tree(&entry.path)
        } else {
            remove_entry(&entry.path)
        }
    })?;

    fs::remove_dir(dir).map_err(|e| OperationError::IoError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    log::trace!("Removed directory {}", dir.display());
    Ok(())
}

/// Remove a file or symlink.
pub(crate) fn remove_entry(path: &Path) -> Result<(), OperationError> {
    let result = fs::remove_file(path);

    // Directory symlinks and junctions are removed as directories on Windows.
    #[cfg(windows)]
    let result = result.or_else(|_| fs::remove_dir(path));

    result.map_err(|e| OperationError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::trace!("Removed {}", path.display());
    Ok(())
}
