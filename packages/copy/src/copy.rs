//! Copying glob matches onto a destination root.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use aria_fs_glob::{glob_files_in, resolve};
use rayon::prelude::*;

use crate::dir::mkdirp;
use crate::error::CopyError;

/// A single planned copy.
#[derive(Debug, Clone)]
struct FileEntry {
    /// Source path.
    source: PathBuf,
    /// Target path.
    target: PathBuf,
}

/// Copy every file matched by `patterns` onto `dest_root`.
///
/// Uses the process working directory; see [`copy_files_in`].
///
/// # Errors
///
/// * If the working directory cannot be determined
/// * See [`copy_files_in`]
pub fn copy_files<I, S>(patterns: I, dest_root: impl AsRef<Path>) -> Result<u64, CopyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cwd = env::current_dir().map_err(CopyError::CurrentDirError)?;
    copy_files_in(&cwd, patterns, dest_root)
}

/// Copy every file matched by `patterns` onto `dest_root`, relative to `cwd`.
///
/// Each match's first path segment below `cwd` (its source root) is replaced
/// by `dest_root`, so copying `src/a/b.ts` onto `out` writes `out/a/b.ts`.
/// Parent directories are created as needed and existing files are
/// overwritten. Files are copied in parallel.
///
/// Returns the number of files copied.
///
/// # Arguments
///
/// * `cwd` - Directory that relative globs and `dest_root` are resolved against
/// * `patterns` - Glob-strings selecting the files to copy
/// * `dest_root` - Directory that replaces each match's source root
///
/// # Errors
///
/// * If glob resolution fails
/// * If a match lies outside `cwd` or directly inside it
/// * If a parent directory cannot be created or a file cannot be copied
pub fn copy_files_in<I, S>(
    cwd: &Path,
    patterns: I,
    dest_root: impl AsRef<Path>,
) -> Result<u64, CopyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cwd = path_clean::clean(cwd);
    let dest_root = resolve(&cwd, dest_root);

    let entries = glob_files_in(&cwd, patterns, false)?
        .into_iter()
        .map(|source| {
            let relative = source
                .strip_prefix(&cwd)
                .map_err(|_| CopyError::OutsideSourceRoot {
                    path: source.clone(),
                    root: cwd.clone(),
                })?;

            let mut components = relative.components();
            components.next();
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                return Err(CopyError::NoSourceRoot { path: source });
            }

            let target = dest_root.join(rest);
            Ok(FileEntry { source, target })
        })
        .collect::<Result<Vec<_>, _>>()?;

    copy_entries(&entries)
}

/// Copy every file matched by `patterns` from `source_root` onto `dest_root`.
///
/// Uses the process working directory; see [`copy_tree_in`].
///
/// # Errors
///
/// * If the working directory cannot be determined
/// * See [`copy_tree_in`]
pub fn copy_tree<I, S>(
    patterns: I,
    source_root: impl AsRef<Path>,
    dest_root: impl AsRef<Path>,
) -> Result<u64, CopyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cwd = env::current_dir().map_err(CopyError::CurrentDirError)?;
    copy_tree_in(&cwd, patterns, source_root, dest_root)
}

/// Copy every file matched by `patterns` from `source_root` onto `dest_root`,
/// relative to `cwd`.
///
/// Each match is rebased by stripping `source_root` as a prefix, so copying
/// `app/src/**/*.ts` from `app` onto `out` writes `out/src/...`. Relative
/// globs and roots are resolved against `cwd`.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// * If glob resolution fails
/// * If a match does not lie below `source_root`
/// * If a parent directory cannot be created or a file cannot be copied
pub fn copy_tree_in<I, S>(
    cwd: &Path,
    patterns: I,
    source_root: impl AsRef<Path>,
    dest_root: impl AsRef<Path>,
) -> Result<u64, CopyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let source_root = resolve(cwd, source_root);
    let dest_root = resolve(cwd, dest_root);

    let entries = glob_files_in(cwd, patterns, false)?
        .into_iter()
        .map(|source| match source.strip_prefix(&source_root) {
            Ok(rest) if !rest.as_os_str().is_empty() => Ok(FileEntry {
                target: dest_root.join(rest),
                source,
            }),
            _ => Err(CopyError::OutsideSourceRoot {
                path: source,
                root: source_root.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    copy_entries(&entries)
}

/// Copy all planned entries in parallel, failing on the first error.
fn copy_entries(entries: &[FileEntry]) -> Result<u64, CopyError> {
    log::debug!("Copying {} files", entries.len());

    entries
        .par_iter()
        .try_for_each(|entry| -> Result<(), CopyError> {
            if entry.source == entry.target {
                log::trace!("Skipping copy onto itself: {}", entry.source.display());
                return Ok(());
            }

            if let Some(parent) = entry.target.parent() {
                mkdirp(parent)?;
            }

            fs::copy(&entry.source, &entry.target).map_err(|e| CopyError::FileCopyError {
                source_path: entry.source.clone(),
                target_path: entry.target.clone(),
                io_error: e,
            })?;

            log::trace!(
                "Copied {} -> {}",
                entry.source.display(),
                entry.target.display()
            );
            Ok(())
        })?;

    Ok(entries.len() as u64)
}
