//! One trait per property a model can evaluate from a [`State`].
//!
//! Every method takes the stored `(T, ρ)` state. A model that cannot give a
//! value at a particular state, such as `cp` inside the saturation dome,
//! returns [`PropertyError::Undefined`] rather than a number.

use uom::si::f64::{Pressure, SpecificHeatCapacity, Velocity};

use crate::support::thermo::{PropertyError, State};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

use super::ThermoModel;

pub trait HasPressure: ThermoModel {
    /// Absolute pressure at `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] when `state` lies outside the
    /// model's range.
    fn pressure(&self, state: &State<Self::Fluid>) -> Result<Pressure, PropertyError>;
}

pub trait HasInternalEnergy: ThermoModel {
    /// # Errors
    ///
    /// Returns [`PropertyError`] when `state` cannot be evaluated.
    fn internal_energy(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<SpecificInternalEnergy, PropertyError>;
}

pub trait HasEnthalpy: ThermoModel {
    /// Specific enthalpy at `state`, on the model's reference scale.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when `state` cannot be evaluated.
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError>;
}

pub trait HasEntropy: ThermoModel {
    /// # Errors
    ///
    /// Returns [`PropertyError`] when `state` cannot be evaluated.
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError>;
}

/// Isobaric specific heat capacity.
pub trait HasCp: ThermoModel {
    /// # Errors
    ///
    /// Returns [`PropertyError::Undefined`] for two-phase states.
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

/// Isochoric specific heat capacity.
pub trait HasCv: ThermoModel {
    /// # Errors
    ///
    /// Returns [`PropertyError::Undefined`] for two-phase states.
    fn cv(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasSpeedOfSound: ThermoModel {
    /// # Errors
    ///
    /// Returns [`PropertyError::Undefined`] for two-phase states.
    fn speed_of_sound(&self, state: &State<Self::Fluid>) -> Result<Velocity, PropertyError>;
}
