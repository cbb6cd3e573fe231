use thiserror::Error;

/// Why an edit or movement was rejected.
///
/// Every error leaves the editor exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    /// A 1-indexed line number outside `1..=max`.
    #[error("line {line} is out of range (valid: 1..={max})")]
    OutOfRange { line: usize, max: usize },

    /// The cursor form of [`EditError::OutOfRange`]: an edit or explicit
    /// move at a cursor outside the buffer. Callers checking for range
    /// errors should match both variants.
    #[error("cursor {line}:{column} is outside the buffer")]
    CursorOutOfRange { line: usize, column: usize },

    #[error("nothing to delete")]
    NothingToDelete,

    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// Line breaks are structural: inserted text and replacement strings
    /// must stay on one line. Split lines with `break_line`.
    #[error("line break {0:?} is not allowed inside a line")]
    LineBreak(char),
}
