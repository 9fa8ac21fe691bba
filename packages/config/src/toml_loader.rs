//! TOML configuration file loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Config;

/// Load a TOML configuration file.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as TOML
pub fn load_toml_config(path: &Path) -> Result<Config, ConfigError> {
    log::debug!("Loading TOML config from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::debug!("Loaded config: {config:?}");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkKind, Platform};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_toml_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[link]
type = "file"
platform = "windows"

[glob]
relative = true
"#
        )
        .unwrap();

        let config = load_toml_config(file.path()).unwrap();

        assert_eq!(config.link.kind, LinkKind::File);
        assert_eq!(config.link.platform, Some(Platform::Windows));
        assert!(config.glob.relative);
    }

    #[test]
    fn test_load_empty_toml_config() {
        let file = NamedTempFile::new().unwrap();

        let config = load_toml_config(file.path()).unwrap();

        assert_eq!(config.link.kind, LinkKind::Dir);
        assert!(config.link.platform.is_none());
        assert!(!config.glob.relative);
    }

    #[test]
    fn test_load_invalid_toml_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[link]\ntype = \"junction\"").unwrap();

        let result = load_toml_config(file.path());
        assert!(matches!(result, Err(ConfigError::TomlParseError { .. })));
    }
}
