//! Path resolution helpers.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `cwd` and normalize it.
///
/// Absolute paths ignore `cwd`. `.` and `..` components are collapsed
/// lexically; symlinks are not resolved.
#[must_use]
pub fn resolve(cwd: &Path, path: impl AsRef<Path>) -> PathBuf {
    path_clean::clean(cwd.join(path))
}

/// Compute `path` relative to `base`, inserting `..` where `path` leaves `base`.
///
/// Both paths are expected to be absolute and normalized.
#[must_use]
pub fn relative_to(base: &Path, path: &Path) -> PathBuf {
    let base: Vec<Component<'_>> = base.components().collect();
    let target: Vec<Component<'_>> = path.components().collect();

    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component);
    }
    relative
}

/// Render `path` relative to `cwd` with a leading `.` segment, e.g.
/// `./src/index.ts`.
#[must_use]
pub fn relative_output(cwd: &Path, path: &Path) -> PathBuf {
    Path::new(".").join(relative_to(cwd, path))
}
