//! High-level counting API.
//!
//! [`count_tree`] walks a directory on a dedicated driver thread and hands
//! every file to a rayon pool. Each task sends exactly one [`Report`] into a
//! shared channel; access errors met by the walker go into the same channel
//! as soon as they happen. The driver keeps the last sender alive until every
//! task has finished, so the channel closes only once all reports are in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::error::DirlocError;
use crate::source::{walk, ExcludeFilter, WalkItem};
use crate::Result;

use super::classifier::classify_str;
use super::report::Report;
use super::stats::Counts;

/// Options for counting a tree.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Paths to skip
    pub filter: ExcludeFilter,
    /// Worker pool size (`None` = rayon's default, one per CPU)
    pub threads: Option<usize>,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            filter: ExcludeFilter::with_defaults(),
            threads: None,
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exclusion filter.
    pub fn filter(mut self, filter: ExcludeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the number of worker threads.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Reports from a running [`count_tree`], in completion order.
///
/// Iteration blocks until the next report arrives and ends once every
/// dispatched file has reported.
pub struct CountRun {
    reports: Receiver<Report>,
    driver: Option<JoinHandle<()>>,
}

impl Iterator for CountRun {
    type Item = Report;

    fn next(&mut self) -> Option<Report> {
        match self.reports.recv() {
            Ok(report) => Some(report),
            Err(_) => {
                if let Some(driver) = self.driver.take() {
                    if let Err(panic) = driver.join() {
                        std::panic::resume_unwind(panic);
                    }
                }
                None
            }
        }
    }
}

/// Count every file under `root`.
///
/// Returns immediately; the walk and the counting run in the background and
/// their reports are read from the returned [`CountRun`]. Only setting up the
/// worker pool or the driver thread can fail here. Unreadable entries and
/// files become error reports instead.
///
/// # Example
///
/// ```rust,ignore
/// use dirloclib::{count_tree, CountOptions};
///
/// for report in count_tree(".", CountOptions::new())? {
///     println!("{report}");
/// }
/// ```
pub fn count_tree(root: impl AsRef<Path>, options: CountOptions) -> Result<CountRun> {
    let root = root.as_ref().to_path_buf();

    let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("dirloc-count-{i}"));
    if let Some(threads) = options.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let (tx, rx) = crossbeam_channel::unbounded();

    let driver = thread::Builder::new()
        .name("dirloc-walk".to_string())
        .spawn(move || drive(&root, &options.filter, &pool, tx))?;

    Ok(CountRun {
        reports: rx,
        driver: Some(driver),
    })
}

/// Walk sequentially, dispatching one pool task per file.
///
/// `tx` is dropped on return, after the scope has joined every task.
fn drive(root: &Path, filter: &ExcludeFilter, pool: &ThreadPool, tx: Sender<Report>) {
    let mut dispatched: u64 = 0;
    let mut access_errors: u64 = 0;

    pool.in_place_scope(|scope| {
        for item in walk(root, filter) {
            match item {
                WalkItem::File(path) => {
                    dispatched += 1;
                    let tx = tx.clone();
                    scope.spawn(move |_| {
                        // A closed channel means the consumer went away.
                        let _ = tx.send(count_task(path));
                    });
                }
                WalkItem::AccessError { path, error } => {
                    access_errors += 1;
                    warn!(path = %path.display(), %error, "cannot access entry");
                    let _ = tx.send(Report::AccessFailed { path, error });
                }
            }
        }
        debug!(dispatched, "walk finished, waiting for tasks");
    });

    debug!(dispatched, access_errors, "all tasks finished");
}

/// One classification task: read, classify, report.
fn count_task(path: PathBuf) -> Report {
    match read_counts(&path) {
        Ok(counts) => Report::Counted { path, counts },
        Err(error) => {
            warn!(path = %path.display(), %error, "cannot read file");
            Report::ReadFailed { path, error }
        }
    }
}

fn read_counts(path: &Path) -> io::Result<Counts> {
    let bytes = fs::read(path)?;
    Ok(classify_str(&String::from_utf8_lossy(&bytes)))
}

/// Count a single file.
///
/// Invalid UTF-8 is replaced rather than rejected, so any readable file can
/// be counted.
///
/// # Example
///
/// ```rust,ignore
/// use dirloclib::count_file;
///
/// let counts = count_file("main.go")?;
/// println!("{} functions", counts.functions);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<Counts> {
    let path = path.as_ref();
    read_counts(path).map_err(|source| DirlocError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
