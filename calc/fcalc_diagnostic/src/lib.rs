//! Diagnostic system for the function calculator.
//!
//! Every command that fails is reported as a [`Diagnostic`]:
//! - Error code for searchability (`fcalc --explain E2002`)
//! - Clear message (what went wrong)
//! - Optional command-file location (which line of a `read` file)
//! - Notes and suggestions (shown by the verbose emitter)
//!
//! Apart from I/O failures (E9001) no diagnostic ends the session; the
//! interpreter emits it and keeps going.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
