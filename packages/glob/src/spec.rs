//! Parsing glob-strings into walk specifications.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{MAIN_SEPARATOR_STR, PathBuf, is_separator};

use crate::pattern::SegmentPattern;

/// The any-depth wildcard token.
const ANY_DEPTH: &str = "**";

/// How to walk for a single glob-string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobSpec {
    /// Literal directory prefix to start walking from (may be relative).
    pub base_dir: PathBuf,
    /// Pattern applied to file names (the final segment of the glob-string).
    pub pattern: String,
    /// Whether the walk descends into subdirectories.
    pub recursive: bool,
    /// Whether matches are reported relative to the working directory.
    pub relative_output: bool,
}

impl GlobSpec {
    /// Derive a walk specification from a glob-string.
    ///
    /// The base directory is every segment before the first one that
    /// contains a wildcard; without any wildcard it is every segment but the
    /// last. The pattern is always the final segment. The walk is recursive
    /// iff the glob-string contains `**`.
    #[must_use]
    pub fn parse(glob: &str, relative_output: bool) -> Self {
        let segments: Vec<&str> = glob.split(is_separator).collect();
        let last = segments.len() - 1;
        let pattern = segments[last].to_string();

        let base_end = segments
            .iter()
            .position(|segment| has_wildcard(segment))
            .unwrap_or(last);

        let base = segments[..base_end].join(MAIN_SEPARATOR_STR);
        let base_dir = if !base.is_empty() {
            PathBuf::from(base)
        } else if base_end > 0 {
            // Only the empty segment before a leading separator.
            PathBuf::from(MAIN_SEPARATOR_STR)
        } else {
            PathBuf::from(".")
        };

        Self {
            base_dir,
            pattern,
            recursive: glob.contains(ANY_DEPTH),
            relative_output,
        }
    }

    /// Compile this spec's file-name pattern.
    #[must_use]
    pub fn matcher(&self) -> SegmentPattern {
        SegmentPattern::new(&self.pattern)
    }
}

fn has_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}
