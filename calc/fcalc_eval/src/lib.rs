//! Command interpreter for the function calculator.
//!
//! - [`Registry`]: the bounded, indexed list of functions
//! - [`command`]: command table, arities and operand parsing
//! - [`source`]: interactive tokens and nested command files
//! - [`Interpreter`]: the session state machine, built with
//!   [`InterpreterBuilder`]
//! - [`print_handler`]: where output goes

pub mod command;
pub mod errors;
mod interpreter;
pub mod print_handler;
mod registry;
pub mod source;

pub use command::{Command, CommandTable, COMMANDS};
pub use errors::{CalcError, CalcResult};
pub use interpreter::{Interpreter, InterpreterBuilder, SessionState};
pub use print_handler::{
    buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler, StreamPrintHandler,
};
pub use registry::{Registry, DEFAULT_CAPACITY_BOUNDS};
