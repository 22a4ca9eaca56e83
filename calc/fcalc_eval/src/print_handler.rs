//! Where calculator output goes.
//!
//! - CLI: stdout, flushed after every prompt
//! - Tests: a buffer for assertions, or any writer
//!
//! Enum dispatch rather than trait objects; every prompt, listing line and
//! result goes through here. Write failures are returned so a closed output
//! ends the session instead of being ignored.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to a byte stream, stdout in the CLI.
pub struct StreamPrintHandler {
    out: Mutex<Box<dyn Write + Send>>,
    terminal: bool,
}

impl StreamPrintHandler {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        StreamPrintHandler {
            out: Mutex::new(Box::new(out)),
            terminal: false,
        }
    }

    pub fn stdout() -> Self {
        StreamPrintHandler {
            terminal: io::stdout().is_terminal(),
            ..Self::new(io::stdout())
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        writeln!(self.out.lock(), "{msg}")
    }

    /// Print without newline. Flushes so prompts appear before input is read.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        write!(out, "{msg}")?;
        out.flush()
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to a stream (stdout by default).
    Stream(StreamPrintHandler),
    /// Captures to a buffer (tests).
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stream(h) => h.println(msg),
            Self::Buffer(h) => {
                h.println(msg);
                Ok(())
            }
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stream(h) => h.print(msg),
            Self::Buffer(h) => {
                h.print(msg);
                Ok(())
            }
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stream(_) => String::new(),
        }
    }

    /// Clear captured output.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }

    /// Whether output reaches an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Stream(h) => h.terminal,
            Self::Buffer(_) => false,
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stream(StreamPrintHandler::stdout()))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// [`io::Write`] adapter so diagnostic emitters can write through a print
/// handler. Text is forwarded one complete line at a time.
pub struct HandlerWriter {
    handler: SharedPrintHandler,
    partial: Vec<u8>,
}

impl HandlerWriter {
    pub fn new(handler: SharedPrintHandler) -> Self {
        HandlerWriter {
            handler,
            partial: Vec::new(),
        }
    }
}

impl Write for HandlerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.extend_from_slice(buf);
        while let Some(end) = self.partial.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.partial.drain(..=end).collect();
            self.handler.println(&String::from_utf8_lossy(&line[..end]))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let rest = std::mem::take(&mut self.partial);
            self.handler.print(&String::from_utf8_lossy(&rest))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
