//! Function nodes for the function calculator.
//!
//! Three primitives (`sin`, `ln`, polynomials) and four combinators
//! (multiply, add, compose, logarithm of base N). Combinators share their
//! operands through [`SharedFunction`], so a function stays valid after the
//! registry entry it was built from is deleted.

mod errors;
mod function;
mod polynomial;
mod shared;

pub use errors::DomainError;
pub use function::{Function, RENDER_LIMIT};
pub use polynomial::Polynomial;
pub use shared::SharedFunction;
