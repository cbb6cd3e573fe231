#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Cursor, Direction};

/// A request to the editor, as produced by a host's input layer.
///
/// Line numbers are 1-indexed, matching what users see.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Insert `text` as a new line before `line` (`line_count + 1` appends).
    InsertLine { line: usize, text: String },
    DeleteLine { line: usize },
    /// Replace every occurrence of `search` in the document.
    Replace { search: String, replace: String },
    Move(Direction),
    MoveTo(Cursor),
    InsertChar(char),
    /// Backspace at the cursor.
    DeleteChar,
    /// Split the cursor line at the cursor.
    BreakLine,
    Undo,
    Redo,
}

impl Command {
    /// Whether the command goes through the undo-recording edit path.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::InsertLine { .. }
                | Command::DeleteLine { .. }
                | Command::Replace { .. }
                | Command::InsertChar(_)
                | Command::DeleteChar
                | Command::BreakLine
        )
    }
}
