use std::fmt;

use thiserror::Error;

use super::{Quantity, UnitSystem};

/// Errors returned by the IF97 model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum If97Error {
    /// An input lies outside the validity range of the formulation.
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    /// The formulation provides no closed form for the operation in the selected region.
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: String },

    /// The quantity cannot be used for the requested operation.
    #[error("invalid quantity {quantity}: {context}")]
    InvalidQuantity {
        quantity: Quantity,
        context: String,
    },

    /// An iterative solve could not be set up or run.
    #[error("solver error: {context}")]
    Solver { context: String },
}

impl If97Error {
    pub(crate) fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    pub(crate) fn invalid_quantity(quantity: Quantity, context: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            quantity,
            context: context.into(),
        }
    }

    /// Re-expresses any range violation in `unit_system`.
    #[must_use]
    pub(crate) fn convert_from_default(self, unit_system: UnitSystem) -> Self {
        match self {
            Self::OutOfRange(error) => Self::OutOfRange(error.convert_from_default(unit_system)),
            other => other,
        }
    }
}

/// One violated bound: the quantity, its offending value, and the limit it crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEntry {
    pub quantity: Quantity,
    pub value: f64,
    pub limit: f64,
}

/// A range violation, naming the quantities, values and limits involved.
///
/// The first entry is the violated bound.
/// A second entry, when present, states the condition under which that
/// bound applies, e.g. pressure is limited to 50 MPa only when temperature
/// exceeds 1073.15 K.
///
/// Values and limits are expressed in [`OutOfRange::unit_system`].
/// Errors produced by the model are converted to the unit system of the
/// [`If97`](super::If97) instance that raised them.
///
/// # Example
///
/// ```
/// use twine_if97::models::water::if97::{If97, If97Error, Quantity};
///
/// let Err(If97Error::OutOfRange(error)) = If97::default().specific_enthalpy_pt(120.0, 300.0) else {
///     panic!("expected a range violation");
/// };
///
/// assert_eq!(error.quantity(), Quantity::Pressure);
/// assert_eq!(error.value(), 120.0);
/// assert_eq!(error.limit(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfRange {
    entries: Vec<RangeEntry>,
    unit_system: UnitSystem,
}

impl OutOfRange {
    /// Creates a single-entry violation in default units.
    #[must_use]
    pub fn new(quantity: Quantity, value: f64, limit: f64) -> Self {
        Self {
            entries: vec![RangeEntry {
                quantity,
                value,
                limit,
            }],
            unit_system: UnitSystem::Default,
        }
    }

    /// Adds the condition under which the first bound applies.
    #[must_use]
    pub fn when(mut self, quantity: Quantity, value: f64, limit: f64) -> Self {
        self.entries.push(RangeEntry {
            quantity,
            value,
            limit,
        });
        self
    }

    /// Returns the same violation expressed in `unit_system`.
    ///
    /// The receiver must be in default units.
    #[must_use]
    pub fn convert_from_default(self, unit_system: UnitSystem) -> Self {
        let entries = self
            .entries
            .into_iter()
            .map(|entry| RangeEntry {
                quantity: entry.quantity,
                value: unit_system.from_default(entry.quantity, entry.value),
                limit: unit_system.from_default(entry.quantity, entry.limit),
            })
            .collect();

        Self {
            entries,
            unit_system,
        }
    }

    /// The quantity whose bound was violated.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.entries[0].quantity
    }

    /// The offending value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.entries[0].value
    }

    /// The violated limit.
    #[must_use]
    pub fn limit(&self) -> f64 {
        self.entries[0].limit
    }

    #[must_use]
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            let unit = self.unit_system.unit(entry.quantity);
            let name = entry.quantity.name();

            if i == 0 {
                let mut chars = name.chars();
                let capitalized: String = chars
                    .next()
                    .map(|c| c.to_uppercase().chain(chars).collect())
                    .unwrap_or_default();
                let direction = if entry.value > entry.limit {
                    "lower"
                } else {
                    "higher"
                };
                write!(
                    f,
                    "{capitalized} value {} {unit} should be {direction} than {} {unit}",
                    entry.value, entry.limit
                )?;
            } else {
                let direction = if entry.value > entry.limit {
                    "higher"
                } else {
                    "lower"
                };
                write!(
                    f,
                    ", when {name} value {} {unit} is {direction} than {} {unit}",
                    entry.value, entry.limit
                )?;
            }
        }
        f.write_str(".")
    }
}

impl std::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_entry_message() {
        let error = OutOfRange::new(Quantity::Pressure, 120.0, 100.0);
        assert_eq!(
            error.to_string(),
            "Absolute pressure value 120 MPa should be lower than 100 MPa."
        );

        let error = OutOfRange::new(Quantity::Temperature, 250.0, 273.15);
        assert_eq!(
            error.to_string(),
            "Temperature value 250 K should be higher than 273.15 K."
        );
    }

    #[test]
    fn conditional_entry_message() {
        let error = OutOfRange::new(Quantity::Pressure, 60.0, 50.0).when(
            Quantity::Temperature,
            1200.0,
            1073.15,
        );
        assert_eq!(
            error.to_string(),
            "Absolute pressure value 60 MPa should be lower than 50 MPa, \
             when temperature value 1200 K is higher than 1073.15 K."
        );
        assert_eq!(error.entries().len(), 2);
    }

    #[test]
    fn converts_values_and_limits() {
        let error = OutOfRange::new(Quantity::Temperature, 250.0, 273.15)
            .convert_from_default(UnitSystem::Engineering);

        assert_eq!(error.quantity(), Quantity::Temperature);
        assert_relative_eq!(error.value(), -23.15, epsilon = 1e-12);
        assert_relative_eq!(error.limit(), 0.0);
        assert_eq!(error.unit_system(), UnitSystem::Engineering);
        assert!(error.to_string().contains("°C"));
    }

    #[test]
    fn wraps_into_model_error() {
        let error: If97Error = OutOfRange::new(Quantity::SpecificEntropy, 13.0, 12.0).into();
        let converted = error.convert_from_default(UnitSystem::Si);

        let If97Error::OutOfRange(inner) = converted else {
            panic!("expected a range violation");
        };
        assert_relative_eq!(inner.value(), 13_000.0);
        assert_relative_eq!(inner.limit(), 12_000.0);
    }
}
