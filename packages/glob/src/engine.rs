//! Resolving one or more glob-strings into a single match list.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::env;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::GlobError;
use crate::path::resolve;
use crate::spec::GlobSpec;
use crate::walker::{MatchSet, PathStyle, walk};

/// Resolve glob-strings against the process working directory.
///
/// See [`glob_files_in`].
///
/// # Errors
///
/// * If the working directory cannot be determined
/// * If a walk fails for a reason other than a missing base directory
pub fn glob_files<I, S>(patterns: I, relative: bool) -> Result<Vec<PathBuf>, GlobError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cwd = env::current_dir().map_err(GlobError::CurrentDirError)?;
    glob_files_in(&cwd, patterns, relative)
}

/// Resolve glob-strings against `cwd`.
///
/// Every glob-string is walked in parallel and the results are merged into
/// one sorted, deduplicated list. A base directory that does not exist
/// contributes no matches rather than an error.
///
/// With `relative` set, matches are rendered relative to `cwd` with a
/// leading `./`; otherwise they are absolute.
///
/// # Arguments
///
/// * `cwd` - Directory that relative glob-strings are resolved against
/// * `patterns` - Glob-strings such as `src/**/*.ts`
/// * `relative` - Whether to render matches relative to `cwd`
///
/// # Errors
///
/// * If any directory that does exist cannot be enumerated
pub fn glob_files_in<I, S>(cwd: &Path, patterns: I, relative: bool) -> Result<Vec<PathBuf>, GlobError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let specs: Vec<GlobSpec> = patterns
        .into_iter()
        .map(|pattern| GlobSpec::parse(pattern.as_ref(), relative))
        .collect();

    let results: Vec<MatchSet> = specs
        .par_iter()
        .map(|spec| {
            let style = if spec.relative_output {
                PathStyle::Relative(cwd)
            } else {
                PathStyle::Absolute
            };
            let base = resolve(cwd, &spec.base_dir);

            match walk(&base, &spec.matcher(), spec.recursive, style) {
                Err(e) if e.is_missing_root() => {
                    log::debug!("No matches: {e}");
                    Ok(MatchSet::new())
                }
                result => result,
            }
        })
        .collect::<Result<_, _>>()?;

    let merged: MatchSet = results
        .into_iter()
        .flatten()
        .filter(|path| !path.as_os_str().is_empty())
        .collect();

    log::debug!("Glob resolved {} files", merged.len());
    Ok(merged.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("elements")).unwrap();
        fs::write(src.join("app.element.ts"), "").unwrap();
        fs::write(src.join("app.element.html"), "").unwrap();
        fs::write(src.join("app.element.scss"), "").unwrap();
        fs::write(src.join("elements/index.ts"), "").unwrap();
        dir
    }

    #[test]
    fn test_glob_non_recursive() {
        let dir = fixture();
        let files = glob_files_in(dir.path(), ["./src/*"], false).unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_glob_recursive_all() {
        let dir = fixture();
        let files = glob_files_in(dir.path(), ["./src/**/*"], false).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_glob_multiple_patterns() {
        let dir = fixture();
        let files = glob_files_in(dir.path(), ["src/**/*.html", "src/**/*.scss"], false).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_glob_overlapping_patterns_are_deduplicated() {
        let dir = fixture();
        let files = glob_files_in(dir.path(), ["src/**/*.ts", "src/**/*", "src/*.ts"], false).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_glob_absolute_output() {
        let dir = fixture();
        let files = glob_files_in(dir.path(), ["src/**/*.ts"], false).unwrap();

        let expected = vec![
            dir.path().join("src/app.element.ts"),
            dir.path().join("src/elements/index.ts"),
        ];
        assert_eq!(files, expected);
    }

    #[test]
    fn test_glob_relative_output() {
        let dir = fixture();
        let files = glob_files_in(dir.path(), ["src/**/*.ts"], true).unwrap();

        let expected = vec![
            PathBuf::from("./src/app.element.ts"),
            PathBuf::from("./src/elements/index.ts"),
        ];
        assert_eq!(files, expected);
    }

    #[test]
    fn test_glob_scenario_excludes_other_extensions() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::create_dir_all(dir.path().join("src/lib")).unwrap();
        fs::write(dir.path().join("src/app/index.ts"), "").unwrap();
        fs::write(dir.path().join("src/app/pkg.json"), "").unwrap();
        fs::write(dir.path().join("src/lib/util.ts"), "").unwrap();

        let files = glob_files_in(dir.path(), ["src/**/*.ts"], false).unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("src/app/index.ts"),
                dir.path().join("src/lib/util.ts"),
            ]
        );
    }

    #[test]
    fn test_glob_empty_base_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("build")).unwrap();

        let files = glob_files_in(dir.path(), ["./build/**/*.ts"], false).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_glob_missing_base_directory() {
        let dir = TempDir::new().unwrap();
        let files = glob_files_in(dir.path(), ["missing/**/*.ts", "missing/*"], false).unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_glob_dangling_symlink_under_base() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/lib")).unwrap();
        fs::write(dir.path().join("src/index.ts"), "").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("src/lib/gone.json"),
            dir.path().join("src/lib/stale.json"),
        )
        .unwrap();

        let files = glob_files_in(dir.path(), ["src/**/*.ts"], false).unwrap();
        assert_eq!(files, vec![dir.path().join("src/index.ts")]);

        let none = glob_files_in(dir.path(), ["src/**/*.md"], false).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_glob_absolute_pattern_ignores_cwd() {
        let dir = fixture();
        let other = TempDir::new().unwrap();
        let pattern = format!("{}/src/*.html", dir.path().display());

        let files = glob_files_in(other.path(), [pattern], false).unwrap();
        assert_eq!(files, vec![dir.path().join("src/app.element.html")]);
    }
}
