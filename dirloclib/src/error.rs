//! Error types for dirloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting a directory tree
#[derive(Error, Debug)]
pub enum DirlocError {
    /// Failed to read a dispatched file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
