//! Numeric domain checks expressed as types.
//!
//! A [`Constrained<T, C>`] value has passed the check of its marker `C` at
//! construction, so code receiving one never re-validates it. The IF97
//! adapter uses them at its boundary:
//!
//! - [`StrictlyPositive`]: pressures, temperatures and densities (`x > 0`).
//! - [`UnitInterval`]: vapour fractions (`0 ≤ x ≤ 1`).
//!
//! Implement [`Constraint<T>`] on a zero-sized marker to add another check.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A check run once, when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] naming the violated bound.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The bound a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_if97::support::constraint::{Constrained, StrictlyPositive};
///
/// let pressure = Constrained::<f64, StrictlyPositive>::new(0.101_325).unwrap();
/// assert_eq!(pressure.into_inner(), 0.101_325);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Constraint::check`].
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
