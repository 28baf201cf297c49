//! Line classification.
//!
//! Lines are classified one at a time, in order, by looking only at the
//! trimmed line and whether a `/* */` block is currently open. There is no
//! tokenizer: a `/*` in the middle of a line is ignored, and a line merely
//! ending in `*/` closes a block whether or not one was open. Blank lines
//! inside an open block count as comments.

use super::stats::Counts;

/// Whether the scanner is inside a `/* ... */` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Normal,
    InBlockComment,
}

/// What a single line counts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming
    Blank,
    /// Plain code
    Code,
    /// Code that starts with `func`
    Function,
    Comment,
}

impl From<LineKind> for Counts {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Blank => Counts::default(),
            LineKind::Code => Counts {
                code: 1,
                ..Counts::default()
            },
            LineKind::Function => Counts {
                code: 1,
                functions: 1,
                ..Counts::default()
            },
            LineKind::Comment => Counts {
                comments: 1,
                ..Counts::default()
            },
        }
    }
}

/// Classify one physical line given the state left by the previous line.
///
/// Checks run in this order, first match wins:
/// 1. `//` or `#` prefix: comment, state unchanged
/// 2. `/*` prefix: comment, enter block
/// 3. `*/` suffix: comment, leave block
/// 4. inside a block: comment
/// 5. `func` prefix: function (also code)
/// 6. non-blank: code
pub fn classify_line(line: &str, state: ScanState) -> (LineKind, ScanState) {
    let line = line.trim();

    if line.starts_with("//") || line.starts_with('#') {
        return (LineKind::Comment, state);
    }
    if line.starts_with("/*") {
        return (LineKind::Comment, ScanState::InBlockComment);
    }
    if line.ends_with("*/") {
        return (LineKind::Comment, ScanState::Normal);
    }
    if state == ScanState::InBlockComment {
        return (LineKind::Comment, state);
    }

    let kind = if line.starts_with("func") {
        LineKind::Function
    } else if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Code
    };
    (kind, state)
}

/// Classify every line of `content` and total the results.
///
/// Lines are split on `\n`; a trailing `\r` is removed by trimming.
pub fn classify_str(content: &str) -> Counts {
    let (counts, _) = content
        .split('\n')
        .fold((Counts::new(), ScanState::Normal), |(counts, state), line| {
            let (kind, next) = classify_line(line, state);
            (counts + Counts::from(kind), next)
        });
    counts
}
