//! The default command: an interactive calculator session.

use std::io::BufRead;

use fcalc_diagnostic::emitter::ColorMode;
use fcalc_eval::{CalcResult, Interpreter, InterpreterBuilder, SharedPrintHandler};

/// Options collected from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Skip the first-resize prompt and start with this capacity.
    pub capacity: Option<usize>,
    /// Command file to read right after start-up.
    pub script: Option<String>,
    /// Show notes and suggestions under diagnostics.
    pub verbose: bool,
    pub color: ColorMode,
}

/// Assemble a session reading from `input` and printing to `print`.
///
/// # Errors
///
/// A preset capacity outside the allowed bounds.
pub fn build_session(
    options: &SessionOptions,
    input: impl BufRead + 'static,
    print: SharedPrintHandler,
) -> CalcResult<Interpreter> {
    let mut builder = InterpreterBuilder::new()
        .input(input)
        .print_handler(print)
        .color_mode(options.color)
        .verbose_diagnostics(options.verbose);
    if let Some(capacity) = options.capacity {
        builder = builder.capacity(capacity);
    }
    if let Some(script) = &options.script {
        builder = builder.script(script.clone());
    }
    builder.build()
}

/// Run a session on stdin and stdout until `exit` or end of input.
///
/// # Errors
///
/// An invalid preset capacity, or an I/O failure on the terminal.
pub fn run_session(options: &SessionOptions) -> CalcResult<()> {
    tracing::debug!(?options, "starting session");
    let mut session = build_session(
        options,
        std::io::stdin().lock(),
        fcalc_eval::stdout_handler(),
    )?;
    session.run()
}
