#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An edit position within a buffer.
///
/// Positions are zero-indexed and column values are counted in `char`s, not
/// bytes. A column equal to the line length means "after the last character".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column in chars.
    pub column: usize,
}

impl Cursor {
    /// The document start (0, 0).
    pub const ZERO: Cursor = Cursor { line: 0, column: 0 };

    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    /// What an operation touched.
    ///
    /// Hosts use this to decide what to redraw: an empty set means the call
    /// was accepted but had no effect (for example `undo` with no history).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Changes: u8 {
        const BUFFER  = 0b001;
        const CURSOR  = 0b010;
        const HISTORY = 0b100;
    }
}

/// Result of dispatching a [`Command`](crate::Command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Parts of the editor state that changed.
    pub changes: Changes,
    /// Number of replacements made, for `Command::Replace` only.
    pub replacements: Option<usize>,
}

impl Outcome {
    pub(crate) fn new(changes: Changes) -> Self {
        Self {
            changes,
            replacements: None,
        }
    }
}
