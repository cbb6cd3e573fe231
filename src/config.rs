#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_CAPACITY;

/// What happens to the cursor when undo/redo swaps in another buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CursorRestore {
    /// Clamp the cursor into the restored buffer.
    #[default]
    Clamp,
    /// Leave the cursor untouched, even if it now points past the end of a
    /// line or past the last line. Edits at such a cursor are rejected
    /// until it is moved.
    Preserve,
}

/// Editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Maximum number of undo snapshots; `0` disables undo.
    pub history_capacity: usize,
    pub cursor_restore: CursorRestore,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            cursor_restore: CursorRestore::default(),
        }
    }
}
