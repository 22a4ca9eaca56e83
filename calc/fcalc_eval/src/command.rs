//! The command table and operand parsing.
//!
//! A command is parsed completely before it runs. If any operand is missing
//! or malformed the command fails here and nothing is mutated.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::errors::{CalcError, CalcResult};

/// Command words accepted at the prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Eval,
    Poly,
    Mul,
    Add,
    Comp,
    Log,
    Del,
    Help,
    Exit,
    Resize,
    Read,
}

/// How many argument tokens a command takes on a command-file line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    /// First token is a count `N`, followed by `N` more tokens.
    Counted,
}

impl Arity {
    /// The total number of argument tokens expected for `args`.
    ///
    /// # Errors
    ///
    /// For [`Arity::Counted`], a malformed or negative count.
    pub fn expected(self, args: &[String]) -> CalcResult<usize> {
        match self {
            Arity::Fixed(n) => Ok(n),
            Arity::Counted => match args.first() {
                None => Ok(1),
                Some(count) => {
                    let n = parse_count(count)?;
                    Ok(n.saturating_add(1))
                }
            },
        }
    }
}

/// One row of the command table.
#[derive(Debug)]
pub struct CommandSpec {
    pub word: CommandWord,
    pub name: &'static str,
    /// Printed right after the name by `help`.
    pub description: &'static str,
    pub arity: Arity,
}

/// Every command, in `help` order.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        word: CommandWord::Eval,
        name: "eval",
        description: "(uate) num x - compute the result of function #num on x",
        arity: Arity::Fixed(2),
    },
    CommandSpec {
        word: CommandWord::Poly,
        name: "poly",
        description: "(nomial) N c_0 c_1 ... c_(N-1) - creates a polynomial with N coefficients",
        arity: Arity::Counted,
    },
    CommandSpec {
        word: CommandWord::Mul,
        name: "mul",
        description: "(tiply) num1 num2 - Creates a function that is the multiplication of \
                      function #num1 and function #num2",
        arity: Arity::Fixed(2),
    },
    CommandSpec {
        word: CommandWord::Add,
        name: "add",
        description: " num1 num2 - Creates a function that is the sum of function #num1 and \
                      function #num2",
        arity: Arity::Fixed(2),
    },
    CommandSpec {
        word: CommandWord::Comp,
        name: "comp",
        description: "(osite) num1 num2 - creates a function that is the composition of \
                      function #num1 and function #num2",
        arity: Arity::Fixed(2),
    },
    CommandSpec {
        word: CommandWord::Log,
        name: "log",
        description: " N num - create a function that is the log_N of function #num",
        arity: Arity::Fixed(2),
    },
    CommandSpec {
        word: CommandWord::Del,
        name: "del",
        description: "(ete) num - delete function #num from the function list",
        arity: Arity::Fixed(1),
    },
    CommandSpec {
        word: CommandWord::Help,
        name: "help",
        description: " - print this command list",
        arity: Arity::Fixed(0),
    },
    CommandSpec {
        word: CommandWord::Exit,
        name: "exit",
        description: " - exit the program",
        arity: Arity::Fixed(0),
    },
    CommandSpec {
        word: CommandWord::Resize,
        name: "resize",
        description: " N - resize number of functions (valid : 2-100)",
        arity: Arity::Fixed(1),
    },
    CommandSpec {
        word: CommandWord::Read,
        name: "read",
        description: " path - run the commands listed in a file, one per line",
        arity: Arity::Fixed(1),
    },
];

/// Name lookup over [`COMMANDS`].
pub struct CommandTable {
    by_name: FxHashMap<&'static str, &'static CommandSpec>,
}

impl CommandTable {
    pub fn new() -> Self {
        CommandTable {
            by_name: COMMANDS.iter().map(|spec| (spec.name, spec)).collect(),
        }
    }

    /// Resolve a command word. Matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// [`CalcError::InvalidCommand`] for unknown words.
    pub fn lookup(&self, word: &str) -> CalcResult<&'static CommandSpec> {
        self.by_name
            .get(word)
            .copied()
            .ok_or_else(|| CalcError::InvalidCommand {
                word: word.to_string(),
            })
    }

    /// Commands in `help` order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CommandSpec> {
        COMMANDS.iter()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Which two-operand combinator to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Mul,
    Add,
    /// `comp i j` builds `f_i(f_j(x))`.
    Comp,
}

/// A fully parsed command, ready to run.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Eval { index: i64, x: f64 },
    Poly { coefficients: SmallVec<[f64; 4]> },
    Binary { op: BinaryOp, left: i64, right: i64 },
    Log { base: u32, index: i64 },
    Del { index: i64 },
    Help,
    Exit,
    Resize { capacity: i64 },
    Read { path: String },
}

/// A supply of operand tokens for one command.
pub trait Operands {
    /// The next token.
    ///
    /// # Errors
    ///
    /// [`CalcError::EndOfSource`] when the input is exhausted, or an I/O error.
    fn next_operand(&mut self) -> CalcResult<String>;
}

/// The argument tokens of one command-file line.
impl Operands for std::vec::IntoIter<String> {
    fn next_operand(&mut self) -> CalcResult<String> {
        self.next().ok_or(CalcError::EndOfSource)
    }
}

impl Command {
    /// Read and validate the operands of `word`.
    ///
    /// # Errors
    ///
    /// Malformed numbers, negative counts, invalid log bases, or exhausted input.
    pub fn parse(word: CommandWord, operands: &mut dyn Operands) -> CalcResult<Command> {
        Ok(match word {
            CommandWord::Eval => {
                let index = parse_integer(&operands.next_operand()?)?;
                let x = parse_number(&operands.next_operand()?)?;
                Command::Eval { index, x }
            }
            CommandWord::Poly => {
                let count = parse_count(&operands.next_operand()?)?;
                let mut coefficients = SmallVec::new();
                for _ in 0..count {
                    coefficients.push(parse_number(&operands.next_operand()?)?);
                }
                Command::Poly { coefficients }
            }
            CommandWord::Mul | CommandWord::Add | CommandWord::Comp => {
                let op = match word {
                    CommandWord::Mul => BinaryOp::Mul,
                    CommandWord::Add => BinaryOp::Add,
                    _ => BinaryOp::Comp,
                };
                let left = parse_integer(&operands.next_operand()?)?;
                let right = parse_integer(&operands.next_operand()?)?;
                Command::Binary { op, left, right }
            }
            CommandWord::Log => {
                let base = parse_base(&operands.next_operand()?)?;
                let index = parse_integer(&operands.next_operand()?)?;
                Command::Log { base, index }
            }
            CommandWord::Del => Command::Del {
                index: parse_integer(&operands.next_operand()?)?,
            },
            CommandWord::Help => Command::Help,
            CommandWord::Exit => Command::Exit,
            CommandWord::Resize => Command::Resize {
                capacity: parse_integer(&operands.next_operand()?)?,
            },
            CommandWord::Read => Command::Read {
                path: operands.next_operand()?,
            },
        })
    }

    /// The command word, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Eval { .. } => "eval",
            Command::Poly { .. } => "poly",
            Command::Binary { op: BinaryOp::Mul, .. } => "mul",
            Command::Binary { op: BinaryOp::Add, .. } => "add",
            Command::Binary { op: BinaryOp::Comp, .. } => "comp",
            Command::Log { .. } => "log",
            Command::Del { .. } => "del",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Resize { .. } => "resize",
            Command::Read { .. } => "read",
        }
    }
}

/// Parse a whole number (indices, capacities, answers).
///
/// # Errors
///
/// [`CalcError::NotANumber`] if `token` is not an integer.
pub fn parse_integer(token: &str) -> CalcResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| CalcError::not_a_number(token))
}

/// Parse a finite real number. `nan` and `inf` are rejected.
///
/// # Errors
///
/// [`CalcError::NotANumber`] if `token` is not a finite number.
pub fn parse_number(token: &str) -> CalcResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| CalcError::not_a_number(token))
}

fn parse_count(token: &str) -> CalcResult<usize> {
    let n = parse_integer(token)?;
    usize::try_from(n).map_err(|_| CalcError::range("coefficient count", n, "0 or more"))
}

/// Bases must be non-negative and not 1. Zero is accepted here and fails
/// when the function is evaluated.
fn parse_base(token: &str) -> CalcResult<u32> {
    let base = parse_integer(token)?;
    match u32::try_from(base) {
        Ok(1) | Err(_) => Err(CalcError::range(
            "log base",
            base,
            format!("0 or 2..={}", u32::MAX),
        )),
        Ok(base) => Ok(base),
    }
}
