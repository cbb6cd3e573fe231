//! Line storage and the validated edit primitives.
//!
//! Every mutation checks its inputs first and only then touches `lines`, so a
//! returned error always means the buffer is unchanged. Line numbers taken
//! from callers are 1-indexed; cursors are 0-indexed.

use crate::error::EditError;
use crate::traits::TextOps;
use crate::types::Cursor;

/// An ordered sequence of lines without terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

/// A frozen copy of buffer content, as kept by [`History`](crate::History).
///
/// Snapshots own their lines and expose them read-only, so nothing held in
/// history can alias or be edited through the live buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    lines: Box<[String]>,
}

impl Snapshot {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at a 0-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lines: self.lines.clone().into_boxed_slice(),
        }
    }

    /// Replace the whole content with `snapshot`.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.lines = snapshot.lines.into_vec();
    }

    /// Insert `text` before the 1-indexed `line_number`; `line_count + 1`
    /// appends. Returns the cursor placed at the end of the new line.
    pub fn insert_line(&mut self, line_number: usize, text: &str) -> Result<Cursor, EditError> {
        check_single_line(text)?;
        let max = self.lines.len() + 1;
        if !(1..=max).contains(&line_number) {
            return Err(EditError::OutOfRange {
                line: line_number,
                max,
            });
        }

        let index = line_number - 1;
        self.lines.insert(index, text.to_string());
        Ok(Cursor::new(index, text.chars().count()))
    }

    /// Remove the 1-indexed `line_number`. The cursor lands at the start of
    /// the line above the removed one (or the first line).
    pub fn delete_line(&mut self, line_number: usize) -> Result<Cursor, EditError> {
        let max = self.lines.len();
        if !(1..=max).contains(&line_number) {
            return Err(EditError::OutOfRange {
                line: line_number,
                max,
            });
        }

        self.lines.remove(line_number - 1);
        Ok(Cursor::new(line_number.saturating_sub(2), 0))
    }

    /// Replace every non-overlapping occurrence of `search`, scanning each
    /// line left to right and resuming after the inserted text. Returns the
    /// number of replacements. An empty `search` matches nothing.
    ///
    /// A `replace` containing a line break is rejected before any line is
    /// touched.
    pub fn replace_all(&mut self, search: &str, replace: &str) -> Result<usize, EditError> {
        check_single_line(replace)?;
        if search.is_empty() {
            return Ok(0);
        }

        let mut replaced = 0;
        for line in &mut self.lines {
            let mut pos = 0;
            while let Some(found) = line[pos..].find(search) {
                let start = pos + found;
                line.replace_range(start..start + search.len(), replace);
                pos = start + replace.len();
                replaced += 1;
            }
        }
        Ok(replaced)
    }

    /// Insert `ch` at `cursor` and return the cursor advanced past it.
    ///
    /// An empty buffer grows its first line. Line breaks are rejected; use
    /// [`Buffer::break_line`].
    pub fn insert_char(&mut self, cursor: Cursor, ch: char) -> Result<Cursor, EditError> {
        check_single_line(ch.encode_utf8(&mut [0; 4]))?;
        self.check_cursor(cursor)?;

        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let line = &mut self.lines[cursor.line];
        let at = byte_offset(line, cursor.column);
        line.insert(at, ch);
        Ok(Cursor::new(cursor.line, cursor.column + 1))
    }

    /// Backspace: remove the char before `cursor`, or join the cursor line
    /// onto the previous one when `cursor` is at a line start.
    pub fn delete_char_before(&mut self, cursor: Cursor) -> Result<Cursor, EditError> {
        self.check_cursor(cursor)?;
        if cursor == Cursor::ZERO {
            return Err(EditError::NothingToDelete);
        }

        if cursor.column > 0 {
            let line = &mut self.lines[cursor.line];
            let at = byte_offset(line, cursor.column - 1);
            line.remove(at);
            return Ok(Cursor::new(cursor.line, cursor.column - 1));
        }

        let current = self.lines.remove(cursor.line);
        let previous = &mut self.lines[cursor.line - 1];
        let column = previous.chars().count();
        previous.push_str(&current);
        Ok(Cursor::new(cursor.line - 1, column))
    }

    /// Split the cursor line at the cursor; the tail moves to a new line
    /// below and the cursor to its start.
    pub fn break_line(&mut self, cursor: Cursor) -> Result<Cursor, EditError> {
        self.check_cursor(cursor)?;

        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let line = &mut self.lines[cursor.line];
        let at = byte_offset(line, cursor.column);
        let tail = line.split_off(at);
        self.lines.insert(cursor.line + 1, tail);
        Ok(Cursor::new(cursor.line + 1, 0))
    }

    fn check_cursor(&self, cursor: Cursor) -> Result<(), EditError> {
        if self.contains(cursor) {
            Ok(())
        } else {
            Err(EditError::CursorOutOfRange {
                line: cursor.line,
                column: cursor.column,
            })
        }
    }
}

impl TextOps for Buffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |s| s.chars().count())
    }
}

// Lines never store their terminator.
fn check_single_line(text: &str) -> Result<(), EditError> {
    match text.chars().find(|&c| c == '\n' || c == '\r') {
        Some(ch) => Err(EditError::LineBreak(ch)),
        None => Ok(()),
    }
}

// Byte index of the char at `column`, or the end of `s` past the last char.
fn byte_offset(s: &str, column: usize) -> usize {
    s.char_indices().nth(column).map_or(s.len(), |(i, _)| i)
}
