//! Symlink operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use aria_fs_config::{LinkKind, Platform};
use aria_fs_copy::mkdirp;

use crate::OperationResult;
use crate::clean::{clean, remove_entry};
use crate::error::OperationError;

/// Platform-level flavor of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    /// File symlink.
    File,
    /// Directory symlink.
    Dir,
    /// Windows directory junction (no elevated privileges required).
    Junction,
}

impl LinkType {
    /// Pick the link type for `kind` under `platform`'s conventions.
    ///
    /// Directory links become junctions on Windows; everything else keeps
    /// its kind.
    #[must_use]
    pub const fn resolve(kind: LinkKind, platform: Platform) -> Self {
        match (kind, platform) {
            (LinkKind::Dir, Platform::Windows) => Self::Junction,
            (LinkKind::Dir, Platform::Unix) => Self::Dir,
            (LinkKind::File, _) => Self::File,
        }
    }
}

/// Creates links on the filesystem.
pub trait LinkCreator {
    /// Create a link at `dest` pointing to `source`.
    ///
    /// # Errors
    ///
    /// * If the link cannot be created
    fn create_link(&self, source: &Path, dest: &Path, link_type: LinkType) -> io::Result<()>;
}

/// Creates links with the host's native primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLinker;

impl LinkCreator for NativeLinker {
    #[cfg(unix)]
    fn create_link(&self, source: &Path, dest: &Path, _link_type: LinkType) -> io::Result<()> {
        std::os::unix::fs::symlink(source, dest)
    }

    #[cfg(windows)]
    fn create_link(&self, source: &Path, dest: &Path, link_type: LinkType) -> io::Result<()> {
        match link_type {
            LinkType::File => std::os::windows::fs::symlink_file(source, dest),
            LinkType::Dir => std::os::windows::fs::symlink_dir(source, dest),
            LinkType::Junction => junction::create(source, dest),
        }
    }

    #[cfg(not(any(unix, windows)))]
    fn create_link(&self, _source: &Path, _dest: &Path, _link_type: LinkType) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symlinks are not supported on this platform",
        ))
    }
}

/// Creates and replaces links using an explicit platform convention.
#[derive(Debug, Clone)]
pub struct Linker<C = NativeLinker> {
    platform: Platform,
    creator: C,
}

impl Linker {
    /// Create a linker using native link primitives.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            creator: NativeLinker,
        }
    }
}

impl Default for Linker {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl<C: LinkCreator> Linker<C> {
    /// Create a linker with a custom link creator.
    #[must_use]
    pub const fn with_creator(platform: Platform, creator: C) -> Self {
        Self { platform, creator }
    }

    /// The platform convention this linker follows.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Create a link from `dest` to `source`, replacing whatever is at `dest`.
    ///
    /// Both paths are made absolute first. An existing file, link or
    /// directory tree at `dest` is removed, and `dest`'s parent directory is
    /// created if missing. The source is not required to exist.
    ///
    /// # Arguments
    ///
    /// * `source` - Path the link points to
    /// * `dest` - Path where the link is created
    /// * `kind` - Whether the link targets a file or a directory
    ///
    /// # Errors
    ///
    /// * If the existing `dest` cannot be removed
    /// * If `dest`'s parent cannot be created
    /// * If the link cannot be created
    pub fn symlink(
        &self,
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
        kind: LinkKind,
    ) -> Result<OperationResult, OperationError> {
        let source = absolute(source.as_ref())?;
        let dest = absolute(dest.as_ref())?;
        let link_type = LinkType::resolve(kind, self.platform);

        log::debug!(
            "Creating {link_type:?} link: {} -> {}",
            dest.display(),
            source.display()
        );

        let replaced = unlink(&dest)? == OperationResult::Removed;

        if let Some(parent) = dest.parent() {
            mkdirp(parent)?;
        }

        self.creator
            .create_link(&source, &dest, link_type)
            .map_err(|e| OperationError::SymlinkError {
                source_path: source.clone(),
                target_path: dest.clone(),
                error: e,
            })?;

        log::debug!("Created symlink successfully");
        Ok(if replaced {
            OperationResult::Replaced
        } else {
            OperationResult::Created
        })
    }

    /// Create a directory link. See [`Linker::symlink`].
    ///
    /// # Errors
    ///
    /// * See [`Linker::symlink`]
    pub fn symlink_dir(
        &self,
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
    ) -> Result<OperationResult, OperationError> {
        self.symlink(source, dest, LinkKind::Dir)
    }

    /// Create a file link. See [`Linker::symlink`].
    ///
    /// # Errors
    ///
    /// * See [`Linker::symlink`]
    pub fn symlink_file(
        &self,
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
    ) -> Result<OperationResult, OperationError> {
        self.symlink(source, dest, LinkKind::File)
    }
}

/// Create a directory link for the host platform.
///
/// # Errors
///
/// * See [`Linker::symlink`]
pub fn symlink_dir(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
) -> Result<OperationResult, OperationError> {
    Linker::default().symlink_dir(source, dest)
}

/// Create a file link for the host platform.
///
/// # Errors
///
/// * See [`Linker::symlink`]
pub fn symlink_file(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
) -> Result<OperationResult, OperationError> {
    Linker::default().symlink_file(source, dest)
}

/// Remove whatever is at `path`.
///
/// A directory is deleted recursively; a file or link (dangling or not) is
/// removed on its own, without touching what it points to. Returns
/// `Skipped` if nothing is there.
///
/// # Errors
///
/// * If `path` cannot be inspected or removed
pub fn unlink(path: impl AsRef<Path>) -> Result<OperationResult, OperationError> {
    let path = absolute(path.as_ref())?;

    let metadata = match fs::symlink_metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Nothing to unlink at {}", path.display());
            return Ok(OperationResult::Skipped);
        }
        Err(e) => return Err(OperationError::IoError { path, source: e }),
    };

    if metadata.is_dir() {
        log::debug!("Removing existing directory: {}", path.display());
        clean(&path)
    } else {
        log::debug!("Removing existing path: {}", path.display());
        remove_entry(&path)?;
        Ok(OperationResult::Removed)
    }
}

/// Remove a directory link or directory. See [`unlink`].
///
/// # Errors
///
/// * See [`unlink`]
pub fn unlink_dir(path: impl AsRef<Path>) -> Result<OperationResult, OperationError> {
    unlink(path)
}

/// Remove a file link or file. See [`unlink`].
///
/// # Errors
///
/// * See [`unlink`]
pub fn unlink_file(path: impl AsRef<Path>) -> Result<OperationResult, OperationError> {
    unlink(path)
}

fn absolute(path: &Path) -> Result<PathBuf, OperationError> {
    std::path::absolute(path)
        .map(path_clean::clean)
        .map_err(|e| OperationError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
}
