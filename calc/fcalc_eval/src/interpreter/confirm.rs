//! Yes/no questions.
//!
//! Answers always come from the interactive reader, even while a command
//! file is running: the file cannot confirm its own destructive commands.

use super::Interpreter;
use crate::command::parse_integer;
use crate::errors::{CalcError, CalcResult};

const ANSWER_PROMPT: &str = "Enter 1 to yes or 2 to no: ";

impl Interpreter {
    /// Ask `question` until the user answers 1 (yes) or 2 (no).
    ///
    /// # Errors
    ///
    /// [`CalcError::EndOfSource`] if interactive input ends first, or an I/O
    /// error if the question cannot be written.
    pub(super) fn yes_or_no(&mut self, question: &str) -> CalcResult<bool> {
        loop {
            self.print.println(question)?;
            self.print.print(ANSWER_PROMPT)?;
            let token = self
                .interactive
                .next_token()?
                .ok_or(CalcError::EndOfSource)?;
            match parse_answer(&token) {
                Ok(answer) => return Ok(answer),
                Err(err) => {
                    self.report(&err, None)?;
                    self.interactive.discard_line();
                }
            }
        }
    }
}

fn parse_answer(token: &str) -> CalcResult<bool> {
    match parse_integer(token)? {
        1 => Ok(true),
        2 => Ok(false),
        other => Err(CalcError::range("answer", other, "1 or 2")),
    }
}
