use crate::types::Cursor;

/// Read-only line geometry that cursor movement is computed against.
///
/// [`Buffer`](crate::Buffer) implements this; hosts with their own storage
/// (a rope, a piece table) can implement it too and reuse
/// [`Cursor::moved`](crate::Cursor::moved).
pub trait TextOps {
    fn line_count(&self) -> usize;
    fn line_len(&self, line: usize) -> usize; // chars, no terminator

    fn is_empty(&self) -> bool {
        self.line_count() == 0
    }

    /// Pull a cursor back inside the text. An empty text clamps to the origin.
    fn clamp(&self, cursor: Cursor) -> Cursor {
        let Some(last_line) = self.line_count().checked_sub(1) else {
            return Cursor::ZERO;
        };
        let line = cursor.line.min(last_line);
        let column = cursor.column.min(self.line_len(line));
        Cursor { line, column }
    }

    /// Whether `cursor` satisfies the cursor invariant for this text.
    fn contains(&self, cursor: Cursor) -> bool {
        if self.is_empty() {
            return cursor == Cursor::ZERO;
        }
        cursor.line < self.line_count() && cursor.column <= self.line_len(cursor.line)
    }
}
