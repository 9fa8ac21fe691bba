//! Single path-segment wildcard matching.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsStr;

use globset::{GlobBuilder, GlobMatcher};

/// A compiled wildcard pattern for a single file or directory name.
///
/// `*` matches any run of characters (including none), `?` matches exactly
/// one character, everything else matches literally. Matching is
/// case-sensitive. A pattern that is empty, contains a separator, or fails
/// to compile matches nothing.
#[derive(Debug, Clone)]
pub struct SegmentPattern {
    source: String,
    matcher: Option<GlobMatcher>,
}

impl SegmentPattern {
    /// Compile a segment pattern.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let matcher = if pattern.is_empty() || pattern.chars().any(std::path::is_separator) {
            None
        } else {
            GlobBuilder::new(pattern)
                .literal_separator(true)
                .case_insensitive(false)
                .build()
                .map(|glob| glob.compile_matcher())
                .map_err(|e| log::debug!("Pattern {pattern:?} matches nothing: {e}"))
                .ok()
        };

        Self {
            source: pattern.to_string(),
            matcher,
        }
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether `name` matches this pattern.
    #[must_use]
    pub fn matches(&self, name: impl AsRef<OsStr>) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(name.as_ref()))
    }
}

/// Check whether a single name matches a wildcard pattern.
///
/// Compiles `pattern` on every call; use [`SegmentPattern`] when matching
/// many names against the same pattern.
#[must_use]
pub fn matches(name: &str, pattern: &str) -> bool {
    SegmentPattern::new(pattern).matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_matches_any_run() {
        assert!(matches("index.ts", "*.ts"));
        assert!(matches(".ts", "*.ts"));
        assert!(matches("anything", "*"));
        assert!(!matches("index.tsx", "*.ts"));
    }

    #[test]
    fn test_question_mark_matches_one_char() {
        assert!(matches("file1.txt", "file?.txt"));
        assert!(!matches("file.txt", "file?.txt"));
        assert!(!matches("file12.txt", "file?.txt"));
    }

    #[test]
    fn test_literal_and_case_sensitive() {
        assert!(matches("package.json", "package.json"));
        assert!(!matches("Package.json", "package.json"));
        assert!(!matches("INDEX.TS", "*.ts"));
    }

    #[test]
    fn test_degenerate_patterns_match_nothing() {
        assert!(!matches("a", ""));
        assert!(!matches("a", "src/*"));
        assert!(!matches("a", "[unclosed"));
    }

    #[test]
    fn test_segment_pattern_reuse() {
        let pattern = SegmentPattern::new("*.element.*");
        assert_eq!(pattern.as_str(), "*.element.*");
        assert!(pattern.matches("app.element.ts"));
        assert!(pattern.matches("app.element.scss"));
        assert!(!pattern.matches("app.ts"));
    }
}
