//! Directory entries discovered during a walk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::GlobError;

/// Kind of a filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link (only reported when the link itself is inspected).
    Symlink,
    /// Anything else (sockets, FIFOs, devices).
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A single node found while listing or walking a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// What kind of node it is.
    pub kind: EntryKind,
}

impl DirEntry {
    /// The entry's base name.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// List the direct children of `dir` without following symlinks.
///
/// # Errors
///
/// * `GlobError::NotFound` if `dir` does not exist
/// * `GlobError::NotADirectory` if `dir` is not a directory
/// * If the directory or an entry's type cannot be read
pub fn read_entries(dir: &Path) -> Result<Vec<DirEntry>, GlobError> {
    let read_dir = fs::read_dir(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GlobError::NotFound {
            path: dir.to_path_buf(),
        },
        io::ErrorKind::NotADirectory => GlobError::NotADirectory {
            path: dir.to_path_buf(),
        },
        _ => GlobError::ReadDirError {
            path: dir.to_path_buf(),
            io_error: e,
        },
    })?;

    read_dir
        .map(|entry| {
            let entry = entry.map_err(|e| GlobError::ReadDirError {
                path: dir.to_path_buf(),
                io_error: e,
            })?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| GlobError::MetadataError {
                path: path.clone(),
                io_error: e,
            })?;
            Ok(DirEntry {
                path,
                kind: file_type.into(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_entries_kinds() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut entries = read_entries(dir.path()).unwrap();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].file_name(), Some(OsStr::new("file.txt")));
        assert!(entries[1].is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_entries_reports_symlink_itself() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        let link = entries
            .iter()
            .find(|e| e.file_name() == Some(OsStr::new("link")))
            .unwrap();

        assert_eq!(link.kind, EntryKind::Symlink);
    }

    #[test]
    fn test_read_entries_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(read_entries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_entries_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = read_entries(&dir.path().join("missing"));
        assert!(matches!(result, Err(GlobError::NotFound { .. })));
    }
}
