//! Errors raised while loading `aria-fs.toml`.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load an aria-fs configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists (or was named explicitly) but could not be read.
    #[error("Failed to read aria-fs config {}: {source}", path.display())]
    ReadError {
        /// The configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown values, e.g. `type = "junction"`.
    #[error("Failed to parse aria-fs config {}: {source}", path.display())]
    TomlParseError {
        /// The configuration file.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
