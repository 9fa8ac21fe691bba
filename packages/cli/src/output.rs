//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;

/// Print the outcome of an operation on a path.
pub fn print_result(path: &Path, result: &str) {
    println!("{} {} {}", "✓".green(), path.display(), result.dimmed());
}

/// Print a matched or created path.
pub fn print_path(path: &Path) {
    println!("{}", path.display());
}

/// Print a summary line.
pub fn print_summary(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
