//! Shared function handles.
//!
//! Combinators alias the functions they were built from instead of copying
//! them. `SharedFunction` is the only handle through which a [`Function`] is
//! stored, so deleting a registry entry never invalidates a combinator that
//! still holds it.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Function;

/// Reference-counted, immutable handle to a [`Function`].
///
/// Single-threaded: the calculator runs one interpreter loop, so `Rc` is
/// enough and `Arc` would only add atomic traffic.
#[repr(transparent)]
pub struct SharedFunction(Rc<Function>);

impl SharedFunction {
    /// Wrap a function in a new handle.
    #[inline]
    pub fn new(function: Function) -> Self {
        SharedFunction(Rc::new(function))
    }

    /// Whether two handles point at the same node.
    #[inline]
    pub fn ptr_eq(a: &SharedFunction, b: &SharedFunction) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Stable identity of the node, used as a memo key during evaluation.
    #[inline]
    pub(crate) fn node_id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl Clone for SharedFunction {
    #[inline]
    fn clone(&self) -> Self {
        SharedFunction(Rc::clone(&self.0))
    }
}

impl Deref for SharedFunction {
    type Target = Function;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Function> for SharedFunction {
    fn from(function: Function) -> Self {
        SharedFunction::new(function)
    }
}

impl fmt::Debug for SharedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedFunction").field(&*self.0).finish()
    }
}

impl fmt::Display for SharedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
