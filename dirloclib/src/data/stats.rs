//! Per-file line counts.

use std::ops::{Add, AddAssign};

/// Counts gathered from a single file.
///
/// A line starting with `func` is counted both as a function and as code,
/// so `functions <= code` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Non-blank lines that are not comments
    pub code: u64,
    /// Line comments (`//`, `#`) and lines inside or closing a block comment
    pub comments: u64,
    /// Code lines starting with `func`
    pub functions: u64,
}

impl Counts {
    /// Create a new Counts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing was counted (empty or blank-only input).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            functions: self.functions + other.functions,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.functions += other.functions;
    }
}
