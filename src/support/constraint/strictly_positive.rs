use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values greater than zero.
///
/// Absolute pressures, temperatures and densities all live here, and `NaN`
/// is rejected along with zero and negative values.
///
/// # Examples
///
/// ```
/// use twine_if97::support::constraint::StrictlyPositive;
/// use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};
///
/// let density = StrictlyPositive::new(MassDensity::new::<kilogram_per_cubic_meter>(997.0));
/// assert!(density.is_ok());
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`] or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::megapascal};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn pressures() {
        let pressure = StrictlyPositive::new(Pressure::new::<megapascal>(3.0)).unwrap();
        assert_eq!(pressure.as_ref().get::<megapascal>(), 3.0);

        assert!(StrictlyPositive::new(Pressure::new::<megapascal>(-0.1)).is_err());
    }
}
