//! Configuration loading for aria-fs.
//!
//! Settings are read from an optional `aria-fs.toml` file:
//!
//! ```toml
//! [link]
//! type = "dir"
//! platform = "windows"
//!
//! [glob]
//! relative = true
//! ```
//!
//! Every key is optional. A missing file yields [`Config::default`].

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{CONFIG_FILE_NAME, discover_config};
pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{Config, GlobConfig, LinkConfig, LinkKind, Platform};

use std::path::Path;

/// Load the configuration for `dir`.
///
/// Uses `explicit` when given, otherwise the `aria-fs.toml` in `dir` if one
/// exists, otherwise the defaults.
///
/// # Errors
///
/// * If the configuration file cannot be read
/// * If the file cannot be parsed
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit.map(Path::to_path_buf).or_else(|| discover_config(dir)) {
        Some(path) => load_toml_config(&path),
        None => {
            log::debug!("No config file found in {}", dir.display());
            Ok(Config::default())
        }
    }
}
