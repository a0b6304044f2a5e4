use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the endpoints of `[0, 1]` for a type.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker for values in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Vapour fractions use it: saturated liquid is `0`, saturated vapour `1`.
///
/// # Examples
///
/// ```
/// use twine_if97::support::constraint::UnitInterval;
///
/// let quality = UnitInterval::new(0.25).unwrap();
/// assert_eq!(quality.into_inner(), 0.25);
///
/// assert_eq!(UnitInterval::one::<f64>().into_inner(), 1.0);
/// assert!(UnitInterval::new(1.0001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Wraps `value` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`], [`ConstraintError::AboveMaximum`]
    /// or, when the comparison is undefined, [`ConstraintError::NotANumber`].
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
