//! Polynomial primitive: `c_0 + c_1*x + ... + c_(n-1)*x^(n-1)`.

use std::fmt::Write as _;

use smallvec::SmallVec;

/// Coefficients stored lowest power first.
///
/// Most polynomials typed at the prompt have a handful of terms, so the
/// coefficients live inline up to degree 3.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    coefficients: SmallVec<[f64; 4]>,
}

impl Polynomial {
    pub fn new(coefficients: impl IntoIterator<Item = f64>) -> Self {
        Polynomial {
            coefficients: coefficients.into_iter().collect(),
        }
    }

    /// Coefficients, `c_0` first.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of stored coefficients (not the degree).
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Horner evaluation. The empty polynomial is `0`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc.mul_add(x, c))
    }

    /// Append the rendering of this polynomial applied to `arg`.
    ///
    /// Terms are written highest power first, zero coefficients are skipped,
    /// and a polynomial without terms renders as `0`.
    pub(crate) fn write_render(&self, arg: &str, out: &mut String, limit: usize) {
        let base = if is_atomic(arg) {
            std::borrow::Cow::Borrowed(arg)
        } else {
            std::borrow::Cow::Owned(format!("({arg})"))
        };

        let mut wrote_term = false;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if out.len() >= limit {
                return;
            }

            if wrote_term {
                out.push_str(if c < 0.0 { " - " } else { " + " });
            } else if c < 0.0 {
                out.push('-');
            }
            wrote_term = true;
            let magnitude = c.abs();

            if power == 0 {
                let _ = write!(out, "{magnitude}");
                continue;
            }
            if magnitude != 1.0 {
                let _ = write!(out, "{magnitude}*");
            }
            out.push_str(&base);
            if power > 1 {
                let _ = write!(out, "^{power}");
            }
        }

        if !wrote_term {
            out.push('0');
        }
    }
}

/// Whether `arg` can be raised to a power or multiplied without parentheses.
///
/// Identifiers, numbers, and call-like text such as `sin(x)` qualify; anything
/// with an operator or space outside parentheses, or a leading sign, does not.
fn is_atomic(arg: &str) -> bool {
    if arg.is_empty() || arg.starts_with('-') {
        return false;
    }
    let mut depth = 0usize;
    for ch in arg.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ if depth > 0 => {}
            c if c.is_ascii_alphanumeric() || c == '.' || c == '_' => {}
            _ => return false,
        }
    }
    depth == 0
}
