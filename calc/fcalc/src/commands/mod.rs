//! Command handlers for the `fcalc` CLI.

mod explain;
mod repl;

pub use explain::explain_error;
pub use repl::{build_session, run_session, SessionOptions};
