//! aria-fs CLI entry point.
//!
//! Thin pass-through from subcommands to the filesystem operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;

use aria_fs_config::load_config;
use aria_fs_operations::{Linker, clean, copy_files, glob_files, mkdirp, unlink};
use clap::Parser;

use args::{Args, Command};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let config = load_config(&cwd, args.config.as_deref())?;

    match args.command {
        Command::Link {
            src,
            dest,
            link_type,
        } => {
            let kind = link_type.map_or(config.link.kind, Into::into);
            let linker = Linker::new(config.platform());
            log::debug!("Linking as {kind} on {}", linker.platform());

            let result = linker.symlink(&src, &dest, kind)?;
            output::print_result(&dest, &result.to_string());
        }
        Command::Unlink { path } => {
            let result = unlink(&path)?;
            output::print_result(&path, &result.to_string());
        }
        Command::Mkdirp { dir } => {
            let created = mkdirp(&dir)?;
            for path in &created {
                output::print_path(path);
            }
            if created.is_empty() {
                output::print_result(&dir, "exists");
            }
        }
        Command::Clean { dir } => {
            let result = clean(&dir)?;
            output::print_result(&dir, &result.to_string());
        }
        Command::Glob { patterns, relative } => {
            for path in glob_files(&patterns, relative || config.glob.relative)? {
                output::print_path(&path);
            }
        }
        Command::Copy { patterns, dest } => {
            let copied = copy_files(&patterns, &dest)?;
            output::print_summary(&format!(
                "Copied {copied} file{} to {}",
                if copied == 1 { "" } else { "s" },
                dest.display()
            ));
        }
    }

    Ok(())
}
