//! The command loop.
//!
//! ```text
//! AwaitingFirstResize ──valid resize──▶ Running ──exit / end of input──▶ Exited
//!                                        │   ▲
//!                                   read │   │ file ends / abandoned
//!                                        ▼   │
//!                                     (command file active)
//! ```
//!
//! Each command is parsed completely, then executed. Failures surface at one
//! place, [`Interpreter::report`], as a single diagnostic line; the loop then
//! carries on. Output that cannot be written is an I/O error and ends the
//! session.

mod builder;
mod confirm;

pub use builder::InterpreterBuilder;

use fcalc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use fcalc_diagnostic::{Diagnostic, ErrorCode, Location};
use fcalc_func::{Function, Polynomial, SharedFunction};

use crate::command::{BinaryOp, Command, CommandTable, CommandWord};
use crate::errors::{CalcError, CalcResult};
use crate::print_handler::{HandlerWriter, SharedPrintHandler};
use crate::registry::Registry;
use crate::source::{CommandLine, NestedSource, TokenReader};

const FIRST_RESIZE_PROMPT: &str = "please enter number of wanted functions: ";
const COMMAND_PROMPT: &str = "Enter command ('help' for the list of available commands): ";
const SHRINK_QUESTION: &str = "Are you sure ?";
const CONTINUE_FILE_QUESTION: &str = "Continue reading the file ?";

/// Where the session is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No capacity chosen yet; only a number is accepted.
    AwaitingFirstResize,
    Running,
    Exited,
}

/// The function calculator session.
pub struct Interpreter {
    registry: Registry,
    commands: CommandTable,
    interactive: TokenReader,
    nested: Option<NestedSource>,
    print: SharedPrintHandler,
    emitter: TerminalEmitter<HandlerWriter>,
    state: SessionState,
    /// File queued to be read as soon as the session is running.
    pending_script: Option<String>,
}

impl Interpreter {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Path of the active command file, if any.
    pub fn active_file(&self) -> Option<&str> {
        self.nested.as_ref().map(NestedSource::path)
    }

    /// Run until `exit` or the end of interactive input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the interactive source or the output end the
    /// session with an error; every command failure is reported and the loop
    /// continues.
    pub fn run(&mut self) -> CalcResult<()> {
        while self.state != SessionState::Exited {
            self.step()?;
        }
        Ok(())
    }

    /// One turn of the loop: a resize attempt, one interactive command, or
    /// one command-file line.
    ///
    /// # Errors
    ///
    /// I/O failures on the interactive source or the output.
    pub fn step(&mut self) -> CalcResult<()> {
        let outcome = match self.state {
            SessionState::AwaitingFirstResize => self.first_resize_step(),
            SessionState::Running => {
                if let Some(path) = self.pending_script.take() {
                    self.start_script(path)?;
                }
                if self.nested.is_some() {
                    self.file_step()
                } else {
                    self.interactive_step()
                }
            }
            SessionState::Exited => Ok(()),
        };

        match outcome {
            Err(CalcError::EndOfSource) => {
                tracing::debug!("interactive input ended");
                self.state = SessionState::Exited;
                Ok(())
            }
            other => other,
        }
    }

    /// Run a parsed command against the registry.
    ///
    /// # Errors
    ///
    /// Any command failure; the registry is unchanged when one is returned.
    #[tracing::instrument(level = "trace", skip(self), fields(command = command.name()))]
    pub fn execute(&mut self, command: Command) -> CalcResult<()> {
        match command {
            Command::Eval { index, x } => {
                let function = self.registry.get(index)?.clone();
                let value = function.evaluate(x)?;
                let shown = function.render(&format!("{x:.2}"));
                self.print.println(&format!("{shown} = {value:.2}"))?;
            }
            Command::Poly { coefficients } => {
                let poly = Function::Polynomial(Polynomial::new(coefficients));
                self.registry.append(poly.into())?;
            }
            Command::Binary { op, left, right } => {
                let a = self.registry.get(left)?.clone();
                let b = self.registry.get(right)?.clone();
                let combined = match op {
                    BinaryOp::Mul => Function::Multiply(a, b),
                    BinaryOp::Add => Function::Add(a, b),
                    BinaryOp::Comp => Function::Compose { outer: a, inner: b },
                };
                self.registry.append(combined.into())?;
            }
            Command::Log { base, index } => {
                let arg = self.registry.get(index)?.clone();
                self.registry
                    .append(SharedFunction::new(Function::LogBase { base, arg }))?;
            }
            Command::Del { index } => {
                self.registry.delete(index)?;
            }
            Command::Help => self.print_help()?,
            Command::Exit => {
                self.print.println("Goodbye!")?;
                self.state = SessionState::Exited;
            }
            Command::Resize { capacity } => self.resize(capacity)?,
            Command::Read { path } => {
                if let Some(active) = &self.nested {
                    tracing::debug!(active = active.path(), requested = %path, "nested read refused");
                    return Err(CalcError::NestedSource { path });
                }
                let file = NestedSource::open(&path)?;
                tracing::debug!(path = %path, "command file opened");
                self.nested = Some(file);
            }
        }
        Ok(())
    }

    /// Validate, confirm if functions would be lost, then apply.
    fn resize(&mut self, requested: i64) -> CalcResult<()> {
        let new_max = self.registry.check_resize(requested)?;
        if self.registry.shrinks(new_max) {
            if self.yes_or_no(SHRINK_QUESTION)? {
                self.registry.truncate(new_max);
            } else {
                tracing::debug!(
                    new_max,
                    len = self.registry.len(),
                    "shrink declined; keeping functions"
                );
            }
        }
        self.registry.set_max_size(new_max);
        Ok(())
    }

    fn first_resize_step(&mut self) -> CalcResult<()> {
        self.print.print(FIRST_RESIZE_PROMPT)?;
        let token = self
            .interactive
            .next_token()?
            .ok_or(CalcError::EndOfSource)?;
        let attempt = crate::command::parse_integer(&token).and_then(|n| self.resize(n));
        match attempt {
            Ok(()) => {
                self.state = SessionState::Running;
                Ok(())
            }
            Err(err) if err.ends_session() => Err(err),
            Err(err) => {
                self.report(&err, None)?;
                self.interactive.discard_line();
                Ok(())
            }
        }
    }

    fn interactive_step(&mut self) -> CalcResult<()> {
        self.print.println("")?;
        self.print_listing()?;
        self.print.print(COMMAND_PROMPT)?;

        match self.interactive_command() {
            Err(err) if !err.ends_session() => {
                self.report(&err, None)?;
                self.interactive.discard_line();
                Ok(())
            }
            other => other,
        }
    }

    fn interactive_command(&mut self) -> CalcResult<()> {
        let word = self
            .interactive
            .next_token()?
            .ok_or(CalcError::EndOfSource)?;
        let spec = self.commands.lookup(&word)?;
        let command = Command::parse(spec.word, &mut self.interactive)?;
        self.execute(command)
    }

    fn file_step(&mut self) -> CalcResult<()> {
        let Some(file) = self.nested.as_mut() else {
            return Ok(());
        };
        let path = file.path().to_string();
        let line = match file.next_command() {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!(path = %path, lines = file.line(), "command file finished");
                self.nested = None;
                return Ok(());
            }
            Err(err) => {
                let location = Location::new(path, file.line() + 1);
                self.nested = None;
                return self.report(&CalcError::Io(err), Some(location));
            }
        };

        self.print.println("")?;
        self.print_listing()?;
        self.print.print(COMMAND_PROMPT)?;
        self.print.println(&echo(&line))?;

        let location = Location::new(path, line.line);
        match self.file_command(line) {
            Ok(()) => Ok(()),
            Err(err) if err.ends_session() => Err(err),
            Err(err @ CalcError::ArgumentProblem { .. }) => {
                self.report(&err, Some(location.clone()))?;
                if self.yes_or_no(CONTINUE_FILE_QUESTION)? {
                    Ok(())
                } else {
                    self.abandon_file(location)
                }
            }
            Err(err) => self.report(&err, Some(location)),
        }
    }

    /// Close the active file at the user's request and say so.
    fn abandon_file(&mut self, location: Location) -> CalcResult<()> {
        tracing::warn!(file = self.active_file(), "command file abandoned");
        self.nested = None;
        let warning = Diagnostic::warning(ErrorCode::E1003)
            .with_message(format!("stopped reading `{}`", location.path))
            .with_location(location)
            .with_note("the remaining lines of the file were skipped");
        self.emitter.emit(&warning)?;
        self.emitter.flush()?;
        Ok(())
    }

    fn file_command(&mut self, line: CommandLine) -> CalcResult<()> {
        let spec = self.commands.lookup(&line.word)?;
        if spec.word == CommandWord::Read {
            let path = line.args.first().cloned().unwrap_or_default();
            return Err(CalcError::NestedSource { path });
        }
        let expected = spec.arity.expected(&line.args)?;
        if line.args.len() != expected {
            return Err(CalcError::ArgumentProblem {
                command: spec.name,
                expected,
                found: line.args.len(),
            });
        }
        let command = Command::parse(spec.word, &mut line.args.into_iter())?;
        self.execute(command)
    }

    fn start_script(&mut self, path: String) -> CalcResult<()> {
        match self.execute(Command::Read { path }) {
            Err(err) if !err.ends_session() => self.report(&err, None),
            other => other,
        }
    }

    fn print_listing(&self) -> CalcResult<()> {
        self.print.println("List of available gates:")?;
        for (index, function) in self.registry.iter() {
            self.print.println(&format!("{index}.\t{function}"))?;
        }
        self.print.println("")?;
        Ok(())
    }

    fn print_help(&self) -> CalcResult<()> {
        self.print.println("The available commands are:")?;
        for spec in self.commands.iter() {
            self.print
                .println(&format!("* {}{}", spec.name, spec.description))?;
        }
        self.print.println("")?;
        Ok(())
    }

    /// Emit one diagnostic line for a failed command.
    ///
    /// # Errors
    ///
    /// The diagnostic itself could not be written.
    fn report(&mut self, err: &CalcError, location: Option<Location>) -> CalcResult<()> {
        tracing::debug!(code = %err.code(), error = %err, "command failed");
        let mut diagnostic = err.to_diagnostic();
        if let Some(location) = location {
            diagnostic = diagnostic.with_location(location);
        }
        self.emitter.emit(&diagnostic)?;
        self.emitter.flush()?;
        Ok(())
    }
}

/// The command line as it appears in the file, shown after the prompt.
fn echo(line: &CommandLine) -> String {
    let mut text = line.word.clone();
    for arg in &line.args {
        text.push(' ');
        text.push_str(arg);
    }
    text
}
