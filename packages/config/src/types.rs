//! Configuration types for aria-fs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

/// Host platform convention used to pick link kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows: directory links are created as junctions.
    Windows,
    /// Every other platform.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Unix => write!(f, "unix"),
        }
    }
}

/// What a link points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// A file link.
    File,
    /// A directory link.
    #[default]
    Dir,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Dir => write!(f, "dir"),
        }
    }
}

/// Link settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Default kind for the `link` command.
    #[serde(default, rename = "type")]
    pub kind: LinkKind,

    /// Platform convention override. Defaults to the host platform.
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// Glob settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobConfig {
    /// Render glob matches relative to the working directory.
    #[serde(default)]
    pub relative: bool,
}

/// aria-fs configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Link settings.
    #[serde(default)]
    pub link: LinkConfig,

    /// Glob settings.
    #[serde(default)]
    pub glob: GlobConfig,
}

impl Config {
    /// Platform to use for link-kind selection.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.link.platform.unwrap_or_else(Platform::current)
    }
}
