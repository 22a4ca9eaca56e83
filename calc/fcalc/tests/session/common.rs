//! Shared helpers for session tests.

use std::io::{Cursor, Write};

use fcalc::commands::{build_session, SessionOptions};
use fcalc_diagnostic::emitter::ColorMode;
use fcalc_eval::{buffer_handler, Interpreter};
use tempfile::NamedTempFile;

/// A finished session and everything it printed.
pub struct Finished {
    pub interp: Interpreter,
    pub output: String,
}

impl Finished {
    /// The functions left in the list, rendered with `x`.
    pub fn functions(&self) -> Vec<String> {
        self.interp
            .registry()
            .iter()
            .map(|(_, f)| f.to_string())
            .collect()
    }

    /// How many diagnostics with `code` were printed.
    pub fn count(&self, code: &str) -> usize {
        self.output.matches(&format!("error[{code}]")).count()
    }
}

pub fn options(capacity: Option<usize>) -> SessionOptions {
    SessionOptions {
        capacity,
        color: ColorMode::Never,
        ..SessionOptions::default()
    }
}

/// Run `input` to completion with the given options.
pub fn run_with(options: &SessionOptions, input: &str) -> Finished {
    let print = buffer_handler();
    let mut interp =
        build_session(options, Cursor::new(input.to_string()), print.clone()).unwrap();
    interp.run().unwrap();
    Finished {
        interp,
        output: print.get_output(),
    }
}

/// Run `input` on a session that already has capacity `capacity`.
pub fn run(capacity: usize, input: &str) -> Finished {
    run_with(&options(Some(capacity)), input)
}

/// A command file holding `contents`.
pub fn command_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

pub fn path_of(file: &NamedTempFile) -> String {
    file.path().display().to_string()
}
