//! Line-oriented terminal I/O
//!
//! `Console` wraps any reader/writer pair so the game can run against stdin and
//! stdout or against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Prompt-and-read-line terminal
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line
    ///
    /// Only the line terminator is removed; other whitespace is kept.
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing the prompt or reading input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like [`Console::read_line`], but end of input is an error
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::UnexpectedEof` if input is closed.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while waiting for an answer")
        })
    }

    /// Write one line of output
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Direct access to the output, for multi-line renders
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Split the console back into its reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
