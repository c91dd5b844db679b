//! Indentation-aware text buffer used by the emitter.

use std::fmt::{self, Write};

const INDENT: &str = "    ";

/// Accumulates generated source one line at a time.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    level: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `text` at the current indentation, followed by a newline.
    pub fn line(&mut self, text: &str) -> fmt::Result {
        for _ in 0..self.level {
            self.buf.write_str(INDENT)?;
        }
        writeln!(self.buf, "{text}")
    }

    /// Write an empty line without indentation.
    pub fn blank(&mut self) -> fmt::Result {
        self.buf.write_char('\n')
    }

    /// Run `body` one level deeper.
    pub fn indented<F>(&mut self, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.level += 1;
        let result = body(self);
        self.level -= 1;
        result
    }

    /// Write `open`, the indented `body`, then `close`.
    pub fn block<F>(&mut self, open: &str, close: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.line(open)?;
        self.indented(body)?;
        self.line(close)
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
