//! Error codes for all calculator diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names the
//! layer that raised it. Used for `fcalc --explain` lookups.

use std::fmt;

/// Error codes for all calculator diagnostics.
///
/// Format: E#### where the first digit indicates the layer:
/// - E1xxx: Input errors (tokens, command words, argument lines)
/// - E2xxx: Registry and range errors
/// - E3xxx: Command source errors
/// - E4xxx: Evaluation errors
/// - E9xxx: Internal / I/O errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Input Errors (E1xxx)
    /// Token is not a number
    E1001,
    /// Unknown command word
    E1002,
    /// Wrong argument count on a file-sourced command line
    E1003,

    // Registry / Range Errors (E2xxx)
    /// Value outside the accepted range
    E2001,
    /// Function index out of range
    E2002,
    /// Registry is full
    E2003,

    // Source Errors (E3xxx)
    /// Command file cannot be opened
    E3001,
    /// Command file read from inside another command file
    E3002,
    /// Command source exhausted
    E3003,

    // Evaluation Errors (E4xxx)
    /// Value outside a function's domain
    E4001,

    // Internal Errors (E9xxx)
    /// Reading input or writing output failed
    E9001,
}

impl ErrorCode {
    /// All variants, for exhaustive testing and `FromStr`.
    ///
    /// When adding a variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        // Input
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        // Registry / Range
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        // Source
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        // Evaluation
        ErrorCode::E4001,
        // Internal
        ErrorCode::E9001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short title used in `--explain` listings.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "not a number",
            ErrorCode::E1002 => "invalid command",
            ErrorCode::E1003 => "argument problem",
            ErrorCode::E2001 => "value out of range",
            ErrorCode::E2002 => "function index out of range",
            ErrorCode::E2003 => "capacity exceeded",
            ErrorCode::E3001 => "cannot open file",
            ErrorCode::E3002 => "nested command file",
            ErrorCode::E3003 => "end of source",
            ErrorCode::E4001 => "domain error",
            ErrorCode::E9001 => "input/output failure",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
