//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use aria_fs_config::LinkKind;
use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for aria-fs.
#[derive(Debug, Parser)]
#[command(
    name = "aria-fs",
    about = "Glob, copy, clean, mkdirp and symlink helpers",
    version
)]
pub struct Args {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of ./aria-fs.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a symlink at <dest> pointing to <src>, replacing <dest>.
    Link {
        /// Path the link points to.
        src: PathBuf,
        /// Path where the link is created.
        dest: PathBuf,
        /// Type of symlink.
        #[arg(long = "type", short = 't', value_enum)]
        link_type: Option<LinkTypeArg>,
    },

    /// Remove a file, link, or directory tree.
    Unlink {
        /// Path to remove.
        path: PathBuf,
    },

    /// Create a directory and all missing parents.
    Mkdirp {
        /// Directory to create.
        dir: PathBuf,
    },

    /// Recursively delete a directory.
    Clean {
        /// Directory to delete.
        dir: PathBuf,
    },

    /// List files matching glob patterns.
    Glob {
        /// Glob patterns such as `src/**/*.ts`.
        #[arg(required = true)]
        patterns: Vec<String>,
        /// Print paths relative to the working directory.
        #[arg(long, short = 'r')]
        relative: bool,
    },

    /// Copy files matching glob patterns onto a destination root.
    Copy {
        /// Glob patterns such as `src/**/*.ts`.
        #[arg(required = true)]
        patterns: Vec<String>,
        /// Destination root directory.
        #[arg(long, short = 'd')]
        dest: PathBuf,
    },
}

/// Link type accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkTypeArg {
    /// File link.
    File,
    /// Directory link.
    Dir,
}

impl From<LinkTypeArg> for LinkKind {
    fn from(arg: LinkTypeArg) -> Self {
        match arg {
            LinkTypeArg::File => Self::File,
            LinkTypeArg::Dir => Self::Dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_with_type() {
        let args = Args::try_parse_from(["aria-fs", "link", "src", "dest", "--type", "file"]).unwrap();
        match args.command {
            Command::Link {
                src,
                dest,
                link_type,
            } => {
                assert_eq!(src, PathBuf::from("src"));
                assert_eq!(dest, PathBuf::from("dest"));
                assert_eq!(link_type, Some(LinkTypeArg::File));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_link_default_type() {
        let args = Args::try_parse_from(["aria-fs", "link", "src", "dest"]).unwrap();
        assert!(matches!(args.command, Command::Link { link_type: None, .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_link_type() {
        assert!(Args::try_parse_from(["aria-fs", "link", "a", "b", "--type", "junction"]).is_err());
    }

    #[test]
    fn test_parse_glob_patterns() {
        let args =
            Args::try_parse_from(["aria-fs", "glob", "src/**/*.ts", "src/*.json", "-r"]).unwrap();
        match args.command {
            Command::Glob { patterns, relative } => {
                assert_eq!(patterns, vec!["src/**/*.ts", "src/*.json"]);
                assert!(relative);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_copy_requires_dest() {
        assert!(Args::try_parse_from(["aria-fs", "copy", "src/**/*.ts"]).is_err());
        let args = Args::try_parse_from(["aria-fs", "copy", "src/**/*.ts", "--dest", "out"]).unwrap();
        assert!(matches!(args.command, Command::Copy { .. }));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["aria-fs", "clean", "dist", "-v", "--config", "x.toml"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(args.command, Command::Clean { .. }));
    }

    #[test]
    fn test_link_type_conversion() {
        assert_eq!(LinkKind::from(LinkTypeArg::Dir), LinkKind::Dir);
        assert_eq!(LinkKind::from(LinkTypeArg::File), LinkKind::File);
    }
}
