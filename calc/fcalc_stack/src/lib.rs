//! Stack growth for recursive walks over function trees.
//!
//! Every combinator the calculator builds references functions that already
//! exist, so a session can stack `comp 2 2`, `comp 3 3`, ... and end up with a
//! tree far deeper than the registry is wide. Evaluation and rendering recurse
//! through that tree; wrapping each step in [`ensure_sufficient_stack`] keeps
//! the recursion from overflowing the native stack.
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a fresh segment when
//!   the remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
///     ensure_sufficient_stack(|| match self {
///         Function::Compose { outer, inner } => outer.evaluate(inner.evaluate(x)?),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
