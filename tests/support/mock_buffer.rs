use linedit::TextOps;
use ropey::Rope;

/// Rope-backed text so cursor movement can be checked without `Buffer`.
pub struct MockBuffer {
    rope: Rope,
}

impl MockBuffer {
    /// Lines are joined with `\n`. An empty slice, or a single empty line,
    /// is an empty document.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            rope: Rope::from_str(&lines.join("\n")),
        }
    }

    pub fn empty() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn is_blank(&self) -> bool {
        self.rope.len_chars() == 0
    }
}

impl TextOps for MockBuffer {
    fn line_count(&self) -> usize {
        // Ropey counts one (empty) line for empty text.
        if self.is_blank() {
            0
        } else {
            self.rope.len_lines()
        }
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.line_count() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }
}
