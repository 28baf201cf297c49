//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - walking the tree
//! under a root path and deciding which entries become counting tasks.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dirloclib::source::{walk, ExcludeFilter, WalkItem};
//!
//! for item in walk(".", &ExcludeFilter::with_defaults()) {
//!     if let WalkItem::File(path) = item {
//!         println!("{}", path.display());
//!     }
//! }
//! ```

pub mod filter;

pub use filter::{display_path, walk, ExcludeFilter, Walk, WalkItem, DEFAULT_EXCLUDES};
