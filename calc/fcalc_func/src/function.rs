//! The function node type and its evaluation and rendering.
//!
//! A registry holds [`SharedFunction`] handles. Combinators hold handles to
//! their operands, so after `comp 0 0` repeated a few dozen times the value
//! graph is a small DAG whose unfolded tree is astronomically large. Two
//! rules keep both operations proportional to the DAG rather than the tree:
//!
//! - evaluation caches each `(node, x)` result for the duration of one call;
//! - rendering stops once the output reaches [`RENDER_LIMIT`] characters and
//!   ends the text with `...`.

use std::fmt;

use rustc_hash::FxHashMap;

use fcalc_stack::ensure_sufficient_stack;

use crate::{DomainError, Polynomial, SharedFunction};

/// Rendered functions longer than this are cut off and end with `...`.
pub const RENDER_LIMIT: usize = 10_000;

/// An evaluable, renderable expression in one variable.
#[derive(Debug)]
pub enum Function {
    /// `sin(x)`
    Sine,
    /// `ln(x)`, defined for `x > 0`.
    NaturalLog,
    Polynomial(Polynomial),
    /// `(a) * (b)`
    Multiply(SharedFunction, SharedFunction),
    /// `a + b`
    Add(SharedFunction, SharedFunction),
    /// `outer(inner(x))`
    Compose {
        outer: SharedFunction,
        inner: SharedFunction,
    },
    /// `log_base(arg(x))`
    LogBase { base: u32, arg: SharedFunction },
}

impl Function {
    /// Short tag for logs and traces.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Function::Sine => "sin",
            Function::NaturalLog => "ln",
            Function::Polynomial(_) => "poly",
            Function::Multiply(..) => "mul",
            Function::Add(..) => "add",
            Function::Compose { .. } => "comp",
            Function::LogBase { .. } => "log",
        }
    }

    /// Direct children of a combinator. Primitives have none.
    pub fn operands(&self) -> impl Iterator<Item = &SharedFunction> {
        let (first, second) = match self {
            Function::Sine | Function::NaturalLog | Function::Polynomial(_) => (None, None),
            Function::Multiply(a, b) | Function::Add(a, b) => (Some(a), Some(b)),
            Function::Compose { outer, inner } => (Some(outer), Some(inner)),
            Function::LogBase { arg, .. } => (Some(arg), None),
        };
        first.into_iter().chain(second)
    }

    /// Evaluate at `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when `x`, or an intermediate value, lies
    /// outside the domain of a node, or when any node yields a non-finite
    /// value.
    pub fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        Evaluator::default().eval(self, x)
    }

    /// Render with `arg` substituted for the variable.
    ///
    /// The result is cut off after [`RENDER_LIMIT`] characters.
    pub fn render(&self, arg: &str) -> String {
        let mut out = String::new();
        self.write_render(arg, &mut out, RENDER_LIMIT);
        truncate_with_ellipsis(&mut out, RENDER_LIMIT);
        out
    }

    /// Append the rendering to `out`, stopping early once `out` holds `limit`
    /// bytes. Callers are expected to truncate afterwards.
    pub fn write_render(&self, arg: &str, out: &mut String, limit: usize) {
        if out.len() >= limit {
            return;
        }
        ensure_sufficient_stack(|| match self {
            Function::Sine => wrap_call("sin", arg, out),
            Function::NaturalLog => wrap_call("ln", arg, out),
            Function::Polynomial(poly) => poly.write_render(arg, out, limit),
            Function::Multiply(a, b) => {
                out.push('(');
                a.write_render(arg, out, limit);
                if out.len() >= limit {
                    return;
                }
                out.push_str(") * (");
                b.write_render(arg, out, limit);
                out.push(')');
            }
            Function::Add(a, b) => {
                a.write_render(arg, out, limit);
                if out.len() >= limit {
                    return;
                }
                out.push_str(" + ");
                b.write_render(arg, out, limit);
            }
            Function::Compose { outer, inner } => {
                let budget = limit - out.len();
                let mut inner_text = String::new();
                inner.write_render(arg, &mut inner_text, budget);
                if inner_text.len() >= budget {
                    out.push_str(&inner_text);
                    return;
                }
                outer.write_render(&inner_text, out, limit);
            }
            Function::LogBase { base, arg: f } => {
                out.push_str("log_");
                out.push_str(&base.to_string());
                out.push('(');
                f.write_render(arg, out, limit);
                out.push(')');
            }
        });
    }
}

impl fmt::Display for Function {
    /// Renders with `x` as the variable, the form used by the listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("x"))
    }
}

fn wrap_call(name: &str, arg: &str, out: &mut String) {
    out.push_str(name);
    out.push('(');
    out.push_str(arg);
    out.push(')');
}

fn truncate_with_ellipsis(out: &mut String, limit: usize) {
    if out.len() <= limit {
        return;
    }
    let mut cut = limit;
    while !out.is_char_boundary(cut) {
        cut -= 1;
    }
    out.truncate(cut);
    out.push_str("...");
}

/// Per-call evaluation state.
///
/// Shared nodes are keyed by address; `x` by its bit pattern so that `-0.0`
/// and `0.0` stay distinct and lookups never compare floats.
#[derive(Default)]
struct Evaluator {
    memo: FxHashMap<(usize, u64), f64>,
}

impl Evaluator {
    fn eval_shared(&mut self, node: &SharedFunction, x: f64) -> Result<f64, DomainError> {
        let key = (node.node_id(), x.to_bits());
        if let Some(&cached) = self.memo.get(&key) {
            return Ok(cached);
        }
        let value = self.eval(node, x)?;
        self.memo.insert(key, value);
        Ok(value)
    }

    fn eval(&mut self, function: &Function, x: f64) -> Result<f64, DomainError> {
        let value = ensure_sufficient_stack(|| -> Result<f64, DomainError> {
            Ok(match function {
                Function::Sine => x.sin(),
                Function::NaturalLog => {
                    if x <= 0.0 {
                        return Err(DomainError::NonPositiveLog { arg: x });
                    }
                    x.ln()
                }
                Function::Polynomial(poly) => poly.evaluate(x),
                Function::Multiply(a, b) => self.eval_shared(a, x)? * self.eval_shared(b, x)?,
                Function::Add(a, b) => self.eval_shared(a, x)? + self.eval_shared(b, x)?,
                Function::Compose { outer, inner } => {
                    let y = self.eval_shared(inner, x)?;
                    self.eval_shared(outer, y)?
                }
                Function::LogBase { base, arg } => {
                    if *base == 0 {
                        return Err(DomainError::ZeroBase);
                    }
                    let v = self.eval_shared(arg, x)?;
                    if v <= 0.0 {
                        return Err(DomainError::NonPositiveLogBase { base: *base, arg: v });
                    }
                    v.ln() / f64::from(*base).ln()
                }
            })
        })?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(DomainError::NonFinite {
                function: function.kind_name(),
                x,
            })
        }
    }
}
