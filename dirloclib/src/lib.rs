//! # dirloclib
//!
//! Walks a directory tree and reports, for every file, how many lines are
//! code, how many are comments, and how many start a function definition.
//!
//! ## Overview
//!
//! The counting is deliberately language-agnostic. Each line is trimmed and
//! checked against a handful of prefixes:
//!
//! - **Comments**: lines starting with `//` or `#`, and lines inside `/* */`
//! - **Functions**: lines starting with `func`
//! - **Code**: every other non-blank line (function lines count as code too)
//!
//! Paths containing `node_modules`, `obj`, `bin` or `nuget` are skipped.
//!
//! ## Pipeline
//!
//! - [`source`]: walks the tree and filters out excluded paths
//! - [`data`]: classifies lines and fans files out to a worker pool, funnelling
//!   one [`Report`] per file back through a single channel
//!
//! ## Example
//!
//! ```rust
//! use dirloclib::{count_tree, CountOptions, Report};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.go"), "// comment\nfunc f() {\n  return\n}\n").unwrap();
//!
//! for report in count_tree(dir.path(), CountOptions::new()).unwrap() {
//!     if let Report::Counted { counts, .. } = &report {
//!         assert_eq!(counts.code, 3);
//!         assert_eq!(counts.comments, 1);
//!         assert_eq!(counts.functions, 1);
//!     }
//!     println!("{report}");
//! }
//! ```

pub mod data;
pub mod error;
pub mod source;

pub use data::{
    classify_line, classify_str, count_file, count_tree, CountOptions, CountRun, Counts,
    LineKind, Report, ScanState,
};
pub use error::DirlocError;
pub use source::{display_path, walk, ExcludeFilter, Walk, WalkItem, DEFAULT_EXCLUDES};

/// Result type for dirloclib operations
pub type Result<T> = std::result::Result<T, DirlocError>;
