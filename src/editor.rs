//! The editor: one buffer, one cursor, one history.
//!
//! Edits follow a fixed protocol. The pre-edit buffer is snapshotted, the
//! edit is validated and applied, and only on success is the snapshot pushed
//! onto the undo stack and the redo stack dropped. A rejected edit leaves
//! buffer, cursor and history untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::{Buffer, Snapshot};
use crate::command::Command;
use crate::config::{CursorRestore, EditorConfig};
use crate::error::EditError;
use crate::history::History;
use crate::traits::TextOps;
use crate::types::{Changes, Cursor, Direction, Outcome};

#[derive(Debug, Clone)]
pub struct Editor {
    buffer: Buffer,
    cursor: Cursor,
    history: History,
    config: EditorConfig,
    modified: bool,
}

/// Read-only copy of everything a host needs to render the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub lines: Vec<String>,
    pub cursor: Cursor,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub modified: bool,
}

pub struct EditorBuilder {
    config: EditorConfig,
    lines: Vec<String>,
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self {
            config: EditorConfig::default(),
            lines: Vec::new(),
        }
    }
}

impl EditorBuilder {
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn cursor_restore(mut self, policy: CursorRestore) -> Self {
        self.config.cursor_restore = policy;
        self
    }

    /// Initial document content.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Editor {
        Editor {
            buffer: Buffer::from_lines(self.lines),
            cursor: Cursor::ZERO,
            history: History::with_capacity(self.config.history_capacity),
            config: self.config,
            modified: false,
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        EditorBuilder::default().build()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EditorBuilder {
        EditorBuilder::default()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // Accessors for rendering and persistence

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    /// Owned copy of the document, for saving or rendering.
    pub fn export_lines(&self) -> Vec<String> {
        self.buffer.lines().to_vec()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Line at a 0-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.buffer.line(index)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Mark the current content as persisted.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            lines: self.export_lines(),
            cursor: self.cursor,
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
            modified: self.modified,
        }
    }

    /// Replace the document. The cursor goes back to the start and undo/redo
    /// history is discarded.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buffer = Buffer::from_lines(lines);
        self.cursor = Cursor::ZERO;
        self.history.clear();
        self.modified = false;
        tracing::debug!(lines = self.buffer.line_count(), "document loaded");
    }

    /// Dispatch a typed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, EditError> {
        let changes = match command {
            Command::InsertLine { line, text } => self.insert_line(line, &text)?,
            Command::DeleteLine { line } => self.delete_line(line)?,
            Command::Replace { search, replace } => {
                let (replaced, changes) = self.replace(&search, &replace)?;
                return Ok(Outcome {
                    changes,
                    replacements: Some(replaced),
                });
            }
            Command::Move(direction) => self.move_cursor(direction),
            Command::MoveTo(cursor) => self.move_cursor_to(cursor)?,
            Command::InsertChar(ch) => self.insert_char(ch)?,
            Command::DeleteChar => self.delete_char()?,
            Command::BreakLine => self.break_line()?,
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        };
        Ok(Outcome::new(changes))
    }

    // Movement never touches buffer or history.

    pub fn move_cursor(&mut self, direction: Direction) -> Changes {
        let next = self.cursor.moved(&self.buffer, direction);
        tracing::trace!(?direction, line = next.line, column = next.column, "cursor moved");
        self.set_cursor(next)
    }

    pub fn move_cursor_to(&mut self, cursor: Cursor) -> Result<Changes, EditError> {
        if !self.buffer.contains(cursor) {
            return Err(EditError::CursorOutOfRange {
                line: cursor.line,
                column: cursor.column,
            });
        }
        Ok(self.set_cursor(cursor))
    }

    // Edits

    pub fn insert_line(&mut self, line_number: usize, text: &str) -> Result<Changes, EditError> {
        self.edit("insert_line", |buffer, _| buffer.insert_line(line_number, text))
    }

    pub fn delete_line(&mut self, line_number: usize) -> Result<Changes, EditError> {
        self.edit("delete_line", |buffer, _| buffer.delete_line(line_number))
    }

    /// Replace every occurrence of `search` and return how many were made.
    ///
    /// A non-empty search is recorded in history even when nothing matches.
    /// An empty search does nothing at all. A `replace` containing a line
    /// break fails with [`EditError::LineBreak`].
    pub fn search_and_replace(&mut self, search: &str, replace: &str) -> Result<usize, EditError> {
        self.replace(search, replace).map(|(replaced, _)| replaced)
    }

    pub fn insert_char(&mut self, ch: char) -> Result<Changes, EditError> {
        self.edit("insert_char", |buffer, cursor| buffer.insert_char(cursor, ch))
    }

    /// Backspace at the cursor. Fails with [`EditError::NothingToDelete`] at
    /// the document start.
    pub fn delete_char(&mut self) -> Result<Changes, EditError> {
        self.edit("delete_char", Buffer::delete_char_before)
    }

    pub fn break_line(&mut self) -> Result<Changes, EditError> {
        self.edit("break_line", Buffer::break_line)
    }

    // History

    /// Restore the buffer from before the last edit. No-op without history.
    pub fn undo(&mut self) -> Changes {
        if !self.history.can_undo() {
            return Changes::empty();
        }
        let current = self.buffer.snapshot();
        match self.history.undo(current) {
            Some(previous) => self.restore(previous, "undo"),
            None => Changes::empty(),
        }
    }

    /// Re-apply the last undone edit. No-op without redo history.
    pub fn redo(&mut self) -> Changes {
        if !self.history.can_redo() {
            return Changes::empty();
        }
        let current = self.buffer.snapshot();
        match self.history.redo(current) {
            Some(next) => self.restore(next, "redo"),
            None => Changes::empty(),
        }
    }

    // Internals

    fn edit<F>(&mut self, op: &'static str, apply: F) -> Result<Changes, EditError>
    where
        F: FnOnce(&mut Buffer, Cursor) -> Result<Cursor, EditError>,
    {
        let before = self.buffer.snapshot();
        let cursor = apply(&mut self.buffer, self.cursor).inspect_err(|err| {
            tracing::debug!(op, %err, "edit rejected");
        })?;
        Ok(self.commit(op, before, cursor))
    }

    fn replace(&mut self, search: &str, replace: &str) -> Result<(usize, Changes), EditError> {
        if search.is_empty() {
            // Still validates `replace`; never touches the buffer.
            self.buffer.replace_all(search, replace)?;
            tracing::debug!("empty search term, nothing replaced");
            return Ok((0, Changes::empty()));
        }
        let before = self.buffer.snapshot();
        let replaced = self.buffer.replace_all(search, replace).inspect_err(|err| {
            tracing::debug!(op = "replace", %err, "edit rejected");
        })?;
        let cursor = self.buffer.clamp(self.cursor);
        tracing::debug!(search, replaced, "search and replace");
        Ok((replaced, self.commit("replace", before, cursor)))
    }

    fn commit(&mut self, op: &'static str, before: Snapshot, cursor: Cursor) -> Changes {
        self.history.commit(before);
        self.modified = true;
        let changes = Changes::BUFFER | Changes::HISTORY | self.set_cursor(cursor);
        tracing::debug!(
            op,
            lines = self.buffer.line_count(),
            undo_depth = self.history.undo_depth(),
            "edit committed"
        );
        changes
    }

    fn restore(&mut self, snapshot: Snapshot, op: &'static str) -> Changes {
        self.buffer.restore(snapshot);
        self.modified = true;
        let cursor = match self.config.cursor_restore {
            CursorRestore::Clamp => self.buffer.clamp(self.cursor),
            CursorRestore::Preserve => self.cursor,
        };
        tracing::debug!(
            op,
            lines = self.buffer.line_count(),
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth(),
            "history restored"
        );
        Changes::BUFFER | Changes::HISTORY | self.set_cursor(cursor)
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Changes {
        if cursor == self.cursor {
            return Changes::empty();
        }
        self.cursor = cursor;
        Changes::CURSOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn edits_are_logged() {
        let mut editor = Editor::new();
        editor.insert_line(1, "hello").unwrap();
        assert!(logs_contain("edit committed"));
        assert!(logs_contain("insert_line"));

        assert!(editor.delete_line(5).is_err());
        assert!(logs_contain("edit rejected"));
    }

    #[test]
    #[traced_test]
    fn undo_is_logged() {
        let mut editor = Editor::builder().lines(["a"]).build();
        editor.delete_line(1).unwrap();
        editor.undo();
        assert!(logs_contain("history restored"));
    }

    #[test]
    fn builder_applies_config() {
        let editor = Editor::builder()
            .history_capacity(3)
            .cursor_restore(CursorRestore::Preserve)
            .lines(["x", "y"])
            .build();
        assert_eq!(editor.config().history_capacity, 3);
        assert_eq!(editor.history.capacity(), 3);
        assert_eq!(editor.config().cursor_restore, CursorRestore::Preserve);
        assert_eq!(editor.lines(), ["x", "y"]);
        assert_eq!(editor.line(1), Some("y"));
        assert_eq!(editor.line(2), None);
        assert_eq!(editor.cursor(), Cursor::ZERO);
        assert!(!editor.is_modified());
    }

    #[test]
    fn failed_edit_leaves_state_alone() {
        let mut editor = Editor::builder().lines(["abc"]).build();
        editor.insert_char('x').unwrap();
        editor.undo();
        let before = editor.snapshot();

        assert_eq!(
            editor.insert_line(9, "nope"),
            Err(EditError::OutOfRange { line: 9, max: 2 })
        );
        assert_eq!(editor.snapshot(), before);
        assert!(editor.can_redo());
    }
}
