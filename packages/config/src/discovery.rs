//! Configuration file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "aria-fs.toml";

/// Find the configuration file in `dir`, if there is one.
#[must_use]
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        log::debug!("Found config {}", path.display());
        Some(path)
    } else {
        None
    }
}
