//! Diagnostic emitters.
//!
//! The calculator reports every failed command as exactly one line; the
//! [`TerminalEmitter`] renders that line, optionally colored and optionally
//! followed by notes and help text.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use std::io;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}
