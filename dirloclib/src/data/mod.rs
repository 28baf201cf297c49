//! Data collection: classify lines and gather per-file reports.
//!
//! This module handles the second stage of the pipeline - reading each
//! discovered file, classifying its lines, and funnelling the results back
//! through one channel. It provides:
//!
//! - **Classification**: the per-line state machine (`classify_line`)
//! - **Statistics**: per-file `Counts`
//! - **Counting**: `count_file` and the concurrent `count_tree`
//! - **Reports**: the printable outcome of each unit of work

pub mod classifier;
pub mod counter;
pub mod report;
pub mod stats;

pub use classifier::{classify_line, classify_str, LineKind, ScanState};
pub use counter::{count_file, count_tree, CountOptions, CountRun};
pub use report::Report;
pub use stats::Counts;
