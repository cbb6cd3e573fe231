//! Plain-text persistence: one buffer line per newline-terminated record.

use std::io::{self, BufRead, Write};

use crate::editor::Editor;

/// Read records from `reader`, stripping `\n` or `\r\n`. A final record
/// without a terminator is still a line.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Write each line followed by `\n`.
pub fn write_lines<W: Write, S: AsRef<str>>(mut writer: W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

impl Editor {
    /// Load a document from `reader`, replacing the current one.
    ///
    /// On a read error the current document is kept.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        let lines = read_lines(reader)?;
        self.load(lines);
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        write_lines(writer, self.lines())
    }
}
