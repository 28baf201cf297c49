//! One line of output per file.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::source::display_path;

use super::stats::Counts;

/// The outcome of one unit of work: a counted file, a file that could not be
/// read, or an entry the walker could not access.
///
/// `Display` renders the line printed for it.
#[derive(Debug)]
pub enum Report {
    Counted {
        path: PathBuf,
        counts: Counts,
    },
    ReadFailed {
        path: PathBuf,
        error: io::Error,
    },
    AccessFailed {
        path: PathBuf,
        error: walkdir::Error,
    },
}

impl Report {
    /// The path this report is about.
    pub fn path(&self) -> &Path {
        match self {
            Report::Counted { path, .. }
            | Report::ReadFailed { path, .. }
            | Report::AccessFailed { path, .. } => path.as_path(),
        }
    }

    /// Whether this report carries an error instead of counts.
    pub fn is_error(&self) -> bool {
        !matches!(self, Report::Counted { .. })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Counted { path, counts } => write!(
                f,
                "{}: {} lines of code, {} lines of comments, {} functions",
                display_path(path),
                counts.code,
                counts.comments,
                counts.functions
            ),
            Report::ReadFailed { path, error } => {
                write!(f, "Error reading file {}: {}", display_path(path), error)
            }
            Report::AccessFailed { path, error } => {
                // walkdir prefixes its own context; the bare IO error reads better.
                let detail = error
                    .io_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| error.to_string());
                write!(f, "Error accessing file {}: {}", display_path(path), detail)
            }
        }
    }
}
