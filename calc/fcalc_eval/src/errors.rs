//! Command errors and their conversion to diagnostics.
//!
//! Every handler returns `Result<_, CalcError>`; the interpreter's dispatch
//! boundary turns the error into a [`Diagnostic`] and keeps going. Only
//! [`CalcError::EndOfSource`] (session over) and [`CalcError::Io`] (output or
//! terminal broken) leave the loop.

use std::io;

use fcalc_diagnostic::{Diagnostic, ErrorCode};
use fcalc_func::DomainError;

/// Result type for command handlers.
pub type CalcResult<T> = Result<T, CalcError>;

/// A failed command.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("`{token}` is not a number")]
    NotANumber { token: String },

    #[error("command `{word}` not found")]
    InvalidCommand { word: String },

    #[error("`{command}` expects {expected} argument(s), found {found}")]
    ArgumentProblem {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{what} {value} is out of range (expected {expected})")]
    Range {
        what: &'static str,
        value: i64,
        expected: String,
    },

    #[error("function #{index} doesn't exist (there are {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("too many functions: the list holds at most {max_size}")]
    CapacityExceeded { max_size: usize },

    #[error("cannot open `{path}`: {source}")]
    CannotOpenFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read `{path}` while another command file is running")]
    NestedSource { path: String },

    #[error("end of input")]
    EndOfSource,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CalcError {
    /// Out-of-range value with a printable description of the allowed values.
    #[cold]
    pub fn range(what: &'static str, value: i64, expected: impl Into<String>) -> Self {
        CalcError::Range {
            what,
            value,
            expected: expected.into(),
        }
    }

    #[cold]
    pub fn not_a_number(token: impl Into<String>) -> Self {
        CalcError::NotANumber {
            token: token.into(),
        }
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalcError::NotANumber { .. } => ErrorCode::E1001,
            CalcError::InvalidCommand { .. } => ErrorCode::E1002,
            CalcError::ArgumentProblem { .. } => ErrorCode::E1003,
            CalcError::Range { .. } => ErrorCode::E2001,
            CalcError::IndexOutOfRange { .. } => ErrorCode::E2002,
            CalcError::CapacityExceeded { .. } => ErrorCode::E2003,
            CalcError::CannotOpenFile { .. } => ErrorCode::E3001,
            CalcError::NestedSource { .. } => ErrorCode::E3002,
            CalcError::EndOfSource => ErrorCode::E3003,
            CalcError::Domain(_) => ErrorCode::E4001,
            CalcError::Io(_) => ErrorCode::E9001,
        }
    }

    /// Whether the session cannot continue after this error.
    pub fn ends_session(&self) -> bool {
        matches!(self, CalcError::EndOfSource | CalcError::Io(_))
    }

    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            CalcError::InvalidCommand { .. } => {
                diag.with_suggestion("type `help` for the list of available commands")
            }
            CalcError::ArgumentProblem { .. } => {
                diag.with_note("each line of a command file holds one command and its arguments")
            }
            CalcError::IndexOutOfRange { len, .. } if *len > 0 => diag.with_note(format!(
                "valid indices are 0 to {}",
                len.saturating_sub(1)
            )),
            CalcError::CapacityExceeded { .. } => {
                diag.with_suggestion("delete a function with `del` or raise the limit with `resize`")
            }
            CalcError::NestedSource { .. } => {
                diag.with_note("command files cannot `read` other command files")
            }
            CalcError::Domain(DomainError::ZeroBase) => {
                diag.with_suggestion("use a base of 2 or more")
            }
            _ => diag,
        }
    }
}
