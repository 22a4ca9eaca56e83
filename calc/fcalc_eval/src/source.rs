//! Command sources: the interactive token stream and nested command files.
//!
//! The interpreter owns exactly one interactive [`TokenReader`] for the whole
//! session and at most one [`NestedSource`]. While a file is active its lines
//! drive the loop; confirmations still go to the interactive reader.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::command::Operands;
use crate::errors::{CalcError, CalcResult};

/// Whitespace-separated tokens from a line-oriented reader.
///
/// Tokens of the current line are buffered, so several commands may share a
/// line. [`TokenReader::discard_line`] drops whatever is left of it.
pub struct TokenReader {
    reader: Box<dyn BufRead>,
    pending: VecDeque<String>,
}

impl TokenReader {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        TokenReader {
            reader: Box::new(reader),
            pending: VecDeque::new(),
        }
    }

    /// Tokens from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }

    /// The next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates read failures.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// The next whole line, or `None` at end of input. Any tokens left over
    /// from a partially consumed line are dropped first.
    ///
    /// # Errors
    ///
    /// Propagates read failures.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.pending.clear();
        self.read_line()
    }

    /// Forget the rest of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Bytes that are not UTF-8 become U+FFFD, so a stray byte yields an
    /// unknown word or a bad number rather than a read failure.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl Operands for TokenReader {
    fn next_operand(&mut self) -> CalcResult<String> {
        self.next_token()?.ok_or(CalcError::EndOfSource)
    }
}

/// One non-blank line of a command file.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// 1-based line number in the file.
    pub line: usize,
    pub word: String,
    pub args: Vec<String>,
}

/// A command file opened by `read`.
pub struct NestedSource {
    path: String,
    reader: TokenReader,
    line: usize,
}

impl NestedSource {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// [`CalcError::CannotOpenFile`] if the file cannot be opened.
    pub fn open(path: &str) -> CalcResult<Self> {
        let file = File::open(Path::new(path)).map_err(|source| CalcError::CannotOpenFile {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::from_reader(path, BufReader::new(file)))
    }

    /// A command file backed by any reader; `path` is only used for messages.
    pub fn from_reader(path: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        NestedSource {
            path: path.into(),
            reader: TokenReader::new(reader),
            line: 0,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The next non-blank line split into command word and arguments, or
    /// `None` once the file is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates read failures.
    pub fn next_command(&mut self) -> io::Result<Option<CommandLine>> {
        loop {
            let Some(text) = self.reader.next_line()? else {
                return Ok(None);
            };
            self.line += 1;
            let mut tokens = text.split_whitespace().map(str::to_string);
            if let Some(word) = tokens.next() {
                return Ok(Some(CommandLine {
                    line: self.line,
                    word,
                    args: tokens.collect(),
                }));
            }
        }
    }
}
