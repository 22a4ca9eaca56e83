//! `InterpreterBuilder` for creating sessions with different inputs, outputs
//! and limits.

use std::io::BufRead;
use std::ops::RangeInclusive;

use fcalc_diagnostic::emitter::{ColorMode, TerminalEmitter};

use super::{Interpreter, SessionState};
use crate::command::CommandTable;
use crate::errors::{CalcError, CalcResult};
use crate::print_handler::{stdout_handler, HandlerWriter, SharedPrintHandler};
use crate::registry::{Registry, DEFAULT_CAPACITY_BOUNDS};
use crate::source::TokenReader;

/// Builder for [`Interpreter`].
///
/// Defaults: stdin, stdout, capacities `2..=100`, `sin` and `ln` preloaded,
/// and the first-resize prompt.
pub struct InterpreterBuilder {
    interactive: Option<TokenReader>,
    print_handler: Option<SharedPrintHandler>,
    bounds: RangeInclusive<usize>,
    seed: bool,
    capacity: Option<usize>,
    color_mode: ColorMode,
    verbose_diagnostics: bool,
    script: Option<String>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            interactive: None,
            print_handler: None,
            bounds: DEFAULT_CAPACITY_BOUNDS,
            seed: true,
            capacity: None,
            color_mode: ColorMode::Auto,
            verbose_diagnostics: false,
            script: None,
        }
    }

    /// Read commands from `reader` instead of stdin.
    #[must_use]
    pub fn input(mut self, reader: impl BufRead + 'static) -> Self {
        self.interactive = Some(TokenReader::new(reader));
        self
    }

    /// Set the print handler. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Capacities accepted by `resize`.
    #[must_use]
    pub fn capacity_bounds(mut self, bounds: RangeInclusive<usize>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Whether to start with `sin` and `ln` in the list.
    #[must_use]
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Start with this capacity and skip the first-resize prompt.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Print notes and suggestions under each diagnostic.
    #[must_use]
    pub fn verbose_diagnostics(mut self, verbose: bool) -> Self {
        self.verbose_diagnostics = verbose;
        self
    }

    /// Read this command file as soon as the session is running.
    #[must_use]
    pub fn script(mut self, path: impl Into<String>) -> Self {
        self.script = Some(path.into());
        self
    }

    /// Build the interpreter.
    ///
    /// # Errors
    ///
    /// [`CalcError::Range`] if the bounds are empty or the preset capacity
    /// lies outside them.
    pub fn build(self) -> CalcResult<Interpreter> {
        if self.bounds.is_empty() {
            return Err(CalcError::range(
                "capacity bound",
                i64::try_from(*self.bounds.start()).unwrap_or(i64::MAX),
                "a non-empty range",
            ));
        }

        let mut registry = if self.seed {
            Registry::seeded(self.bounds)
        } else {
            Registry::new(self.bounds)
        };

        let state = match self.capacity {
            Some(capacity) => {
                let requested = i64::try_from(capacity).unwrap_or(i64::MAX);
                let capacity = registry.check_resize(requested)?;
                registry.truncate(capacity);
                registry.set_max_size(capacity);
                SessionState::Running
            }
            None => SessionState::AwaitingFirstResize,
        };

        let print = self.print_handler.unwrap_or_else(stdout_handler);
        let is_tty = print.is_terminal();
        let emitter = TerminalEmitter::with_color_mode(
            HandlerWriter::new(print.clone()),
            self.color_mode,
            is_tty,
        )
        .verbose(self.verbose_diagnostics);

        tracing::debug!(
            ?state,
            seeded = self.seed,
            max_size = ?registry.max_size(),
            "interpreter built"
        );

        Ok(Interpreter {
            registry,
            commands: CommandTable::new(),
            interactive: self.interactive.unwrap_or_else(TokenReader::stdin),
            nested: None,
            print,
            emitter,
            state,
            pending_script: self.script,
        })
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
