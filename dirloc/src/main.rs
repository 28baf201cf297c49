//! # dirloc
//!
//! A CLI tool that prints code, comment and function counts for every file
//! under a directory.
//!
//! ## Usage
//!
//! ```bash
//! dirloc .
//! dirloc ~/src/project
//! ```
//!
//! One line is printed per file, in whatever order the files finish:
//!
//! ```text
//! a.go: 3 lines of code, 1 lines of comments, 1 functions
//! ```
//!
//! Unreadable entries are reported inline and do not stop the run. Paths
//! containing `node_modules`, `obj`, `bin` or `nuget` are skipped.
//!
//! Diagnostics go to stderr and are tuned with `RUST_LOG`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{value_parser, Arg, Command};
use dirloclib::{count_tree, CountOptions};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("dirloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Per-file code, comment and function counts for a directory tree")
        .arg(
            Arg::new("directory")
                .help("Directory to analyze (use `--` before names starting with `-`)")
                .value_parser(value_parser!(PathBuf)),
        )
        // Anything after the directory is accepted and ignored.
        .arg(
            Arg::new("ignored")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .hide(true),
        )
}

/// Send tracing output to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Name to show in the usage line
fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "dirloc".to_string())
}

/// Count the tree and print one line per report as it arrives.
fn run(directory: &Path) -> anyhow::Result<()> {
    let reports = count_tree(directory, CountOptions::new())?;

    let mut stdout = io::stdout().lock();
    for report in reports {
        writeln!(stdout, "{report}")?;
    }
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let matches = build_command().get_matches();

    let Some(directory) = matches.get_one::<PathBuf>("directory") else {
        println!("Usage: {} directory", program_name());
        return ExitCode::FAILURE;
    };

    match run(directory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
