//! The bounded, ordered list of functions the user works with.
//!
//! Commands address functions by position. Deleting shifts later entries
//! down; combinators already built keep their operands alive through
//! [`SharedFunction`] handles, so they are unaffected.

use std::ops::RangeInclusive;

use fcalc_func::{Function, SharedFunction};

use crate::errors::{CalcError, CalcResult};

/// Allowed capacities unless configured otherwise.
pub const DEFAULT_CAPACITY_BOUNDS: RangeInclusive<usize> = 2..=100;

/// Ordered, indexable collection of functions with a capacity limit.
#[derive(Debug)]
pub struct Registry {
    functions: Vec<SharedFunction>,
    /// Unset until the first successful resize.
    max_size: Option<usize>,
    bounds: RangeInclusive<usize>,
}

impl Registry {
    /// An empty registry with the given capacity bounds.
    pub fn new(bounds: RangeInclusive<usize>) -> Self {
        Registry {
            functions: Vec::new(),
            max_size: None,
            bounds,
        }
    }

    /// A registry holding `sin` at 0 and `ln` at 1.
    pub fn seeded(bounds: RangeInclusive<usize>) -> Self {
        let mut registry = Self::new(bounds);
        registry.functions.push(Function::Sine.into());
        registry.functions.push(Function::NaturalLog.into());
        registry
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Current capacity, `None` before the first resize.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn bounds(&self) -> &RangeInclusive<usize> {
        &self.bounds
    }

    /// `(index, function)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SharedFunction)> {
        self.functions.iter().enumerate()
    }

    /// Append at the end and return the new index.
    ///
    /// # Errors
    ///
    /// [`CalcError::CapacityExceeded`] if the list is already full.
    pub fn append(&mut self, function: SharedFunction) -> CalcResult<usize> {
        if let Some(max_size) = self.max_size {
            if self.functions.len() >= max_size {
                return Err(CalcError::CapacityExceeded { max_size });
            }
        }
        let index = self.functions.len();
        tracing::debug!(index, kind = function.kind_name(), "function added");
        self.functions.push(function);
        Ok(index)
    }

    /// Look up a function by its listed index.
    ///
    /// # Errors
    ///
    /// [`CalcError::IndexOutOfRange`] unless `0 <= index < len`.
    pub fn get(&self, index: i64) -> CalcResult<&SharedFunction> {
        let slot = self.slot(index)?;
        Ok(&self.functions[slot])
    }

    /// Remove a function, shifting later entries down by one.
    ///
    /// # Errors
    ///
    /// [`CalcError::IndexOutOfRange`] unless `0 <= index < len`.
    pub fn delete(&mut self, index: i64) -> CalcResult<SharedFunction> {
        let slot = self.slot(index)?;
        let removed = self.functions.remove(slot);
        tracing::debug!(
            index = slot,
            kind = removed.kind_name(),
            remaining = self.functions.len(),
            "function deleted"
        );
        Ok(removed)
    }

    /// Validate a requested capacity against the bounds.
    ///
    /// # Errors
    ///
    /// [`CalcError::Range`] if `requested` lies outside the bounds.
    pub fn check_resize(&self, requested: i64) -> CalcResult<usize> {
        usize::try_from(requested)
            .ok()
            .filter(|n| self.bounds.contains(n))
            .ok_or_else(|| {
                CalcError::range(
                    "capacity",
                    requested,
                    format!("{}..={}", self.bounds.start(), self.bounds.end()),
                )
            })
    }

    /// Whether resizing to `new_max` would drop functions.
    pub fn shrinks(&self, new_max: usize) -> bool {
        new_max < self.functions.len()
    }

    /// Keep only the first `len` functions.
    pub fn truncate(&mut self, len: usize) {
        if len < self.functions.len() {
            tracing::debug!(from = self.functions.len(), to = len, "list truncated");
            self.functions.truncate(len);
        }
    }

    /// Set the capacity. Does not drop functions; see [`Registry::truncate`].
    pub fn set_max_size(&mut self, max_size: usize) {
        tracing::debug!(previous = ?self.max_size, max_size, "capacity changed");
        self.max_size = Some(max_size);
    }

    fn slot(&self, index: i64) -> CalcResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < self.functions.len())
            .ok_or(CalcError::IndexOutOfRange {
                index,
                len: self.functions.len(),
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded(DEFAULT_CAPACITY_BOUNDS)
    }
}
