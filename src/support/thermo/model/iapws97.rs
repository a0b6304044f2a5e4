//! IAPWS-IF97 water and steam model.
//!
//! [`Iapws97`] exposes the IF97 engine through the capability traits.
//! States are stored as temperature and density, and every property call
//! resolves the region from them. Inside the saturation dome the density
//! fixes the vapour fraction, and the caloric properties are mixtures of
//! the saturated endpoints.
//!
//! # Example
//!
//! ```
//! use twine_if97::support::thermo::{
//!     capability::{HasEnthalpy, StateFrom},
//!     model::Iapws97,
//! };
//! use twine_if97::support::thermo::fluid::Water;
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::megapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let thermo = Iapws97::<Water>::new();
//! let state = thermo.state_from((
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//!     Pressure::new::<megapascal>(3.0),
//! ))?;
//!
//! let h = thermo.enthalpy(&state)?;
//! assert!((h.get::<kilojoule_per_kilogram>() - 115.331).abs() < 1e-3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

use std::marker::PhantomData;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::models::water::if97::{
    If97Error, OutOfRange, Quantity, Region,
    core::{self as engine, State as EngineState},
};
use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasCv, HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure,
            HasSpeedOfSound, StateFrom, ThermoModel,
        },
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// Marks fluids the [`Iapws97`] model accepts.
pub trait Iapws97Fluid: Default + Send + Sync + 'static {}

/// IAPWS-IF97 property model.
///
/// The model is stateless: it can be shared and copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iapws97<F: Iapws97Fluid> {
    _f: PhantomData<F>,
}

impl<F: Iapws97Fluid> Default for Iapws97<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Iapws97Fluid> ThermoModel for Iapws97<F> {
    type Fluid = F;
}

impl<F: Iapws97Fluid> Iapws97<F> {
    #[must_use]
    pub fn new() -> Self {
        Self { _f: PhantomData }
    }

    /// Returns the IF97 region containing `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the state lies outside the formulation.
    pub fn region(&self, state: &State<F>) -> Result<Region, PropertyError> {
        Ok(resolve(state)?.region())
    }

    /// Returns the vapour fraction of a two-phase or saturated state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Undefined`] for single-phase states.
    pub fn vapour_fraction(
        &self,
        state: &State<F>,
    ) -> Result<Constrained<f64, UnitInterval>, PropertyError> {
        let x = resolve(state)?.vapour_fraction()?;
        UnitInterval::new(x).map_err(|error| PropertyError::Calculation {
            context: format!("vapour fraction {x}: {error}"),
        })
    }

    /// Evaluates a property that only single-phase states define.
    fn single_phase(&self, state: &State<F>, quantity: Quantity) -> Result<f64, PropertyError> {
        let resolved = resolve(state)?;
        if resolved.region() == Region::Region4 {
            return Err(PropertyError::Undefined {
                context: format!("{quantity} inside the saturation dome"),
            });
        }
        Ok(resolved.property(quantity)?)
    }
}

/// Resolves a stored state, in default IF97 units.
fn resolve<F>(state: &State<F>) -> Result<EngineState, If97Error> {
    engine::state_from_density(
        state.density.get::<kilogram_per_cubic_meter>(),
        state.temperature.get::<kelvin>(),
    )
}

/// Builds a stored state from a resolved one.
fn store<F>(fluid: F, resolved: &EngineState) -> Result<State<F>, If97Error> {
    let t = resolved.property(Quantity::Temperature)?;
    let rho = resolved.property(Quantity::Density)?;
    Ok(State::new(
        ThermodynamicTemperature::new::<kelvin>(t),
        MassDensity::new::<kilogram_per_cubic_meter>(rho),
        fluid,
    ))
}

fn positive(quantity: Quantity, value: f64) -> Result<f64, If97Error> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|_| OutOfRange::new(quantity, value, 0.0).into())
}

impl<F: Iapws97Fluid> HasPressure for Iapws97<F> {
    fn pressure(&self, state: &State<F>) -> Result<Pressure, PropertyError> {
        let p = resolve(state)?.property(Quantity::Pressure)?;
        Ok(Pressure::new::<megapascal>(p))
    }
}

impl<F: Iapws97Fluid> HasInternalEnergy for Iapws97<F> {
    fn internal_energy(
        &self,
        state: &State<F>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let u = resolve(state)?.property(Quantity::SpecificInternalEnergy)?;
        Ok(SpecificInternalEnergy::new::<kilojoule_per_kilogram>(u))
    }
}

impl<F: Iapws97Fluid> HasEnthalpy for Iapws97<F> {
    fn enthalpy(&self, state: &State<F>) -> Result<SpecificEnthalpy, PropertyError> {
        let h = resolve(state)?.property(Quantity::SpecificEnthalpy)?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(h))
    }
}

impl<F: Iapws97Fluid> HasEntropy for Iapws97<F> {
    fn entropy(&self, state: &State<F>) -> Result<SpecificEntropy, PropertyError> {
        let s = resolve(state)?.property(Quantity::SpecificEntropy)?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s))
    }
}

impl<F: Iapws97Fluid> HasCp for Iapws97<F> {
    fn cp(&self, state: &State<F>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = self.single_phase(state, Quantity::IsobaricHeatCapacity)?;
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp))
    }
}

impl<F: Iapws97Fluid> HasCv for Iapws97<F> {
    fn cv(&self, state: &State<F>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cv = self.single_phase(state, Quantity::IsochoricHeatCapacity)?;
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cv))
    }
}

impl<F: Iapws97Fluid> HasSpeedOfSound for Iapws97<F> {
    fn speed_of_sound(&self, state: &State<F>) -> Result<Velocity, PropertyError> {
        let w = self.single_phase(state, Quantity::SpeedOfSound)?;
        Ok(Velocity::new::<meter_per_second>(w))
    }
}

impl<F: Iapws97Fluid> StateFrom<(F, ThermodynamicTemperature, MassDensity)> for Iapws97<F> {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, temperature, density): (F, ThermodynamicTemperature, MassDensity),
    ) -> Result<State<F>, Self::Error> {
        let t = positive(Quantity::Temperature, temperature.get::<kelvin>())?;
        let rho = positive(Quantity::Density, density.get::<kilogram_per_cubic_meter>())?;

        // Resolve once so states outside the formulation fail here.
        engine::state_from_density(rho, t)?;

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl<F: Iapws97Fluid> StateFrom<(F, ThermodynamicTemperature, Pressure)> for Iapws97<F> {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (F, ThermodynamicTemperature, Pressure),
    ) -> Result<State<F>, Self::Error> {
        let p = positive(Quantity::Pressure, pressure.get::<megapascal>())?;
        let resolved = engine::state_pt(p, temperature.get::<kelvin>())?;
        store(fluid, &resolved)
    }
}

impl<F: Iapws97Fluid> StateFrom<(F, Pressure, SpecificEnthalpy)> for Iapws97<F> {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (F, Pressure, SpecificEnthalpy),
    ) -> Result<State<F>, Self::Error> {
        let p = positive(Quantity::Pressure, pressure.get::<megapascal>())?;
        let resolved = engine::state_ph(p, enthalpy.get::<kilojoule_per_kilogram>())?;
        store(fluid, &resolved)
    }
}

impl<F: Iapws97Fluid> StateFrom<(F, Pressure, SpecificEntropy)> for Iapws97<F> {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (F, Pressure, SpecificEntropy),
    ) -> Result<State<F>, Self::Error> {
        let p = positive(Quantity::Pressure, pressure.get::<megapascal>())?;
        let resolved = engine::state_ps(p, entropy.get::<kilojoule_per_kilogram_kelvin>())?;
        store(fluid, &resolved)
    }
}

impl<F: Iapws97Fluid> StateFrom<(F, SpecificEnthalpy, SpecificEntropy)> for Iapws97<F> {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, enthalpy, entropy): (F, SpecificEnthalpy, SpecificEntropy),
    ) -> Result<State<F>, Self::Error> {
        let resolved = engine::state_hs(
            enthalpy.get::<kilojoule_per_kilogram>(),
            entropy.get::<kilojoule_per_kilogram_kelvin>(),
        )?;
        store(fluid, &resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::support::thermo::fluid::Water;

    fn thermo() -> Iapws97<Water> {
        Iapws97::new()
    }

    fn liquid() -> Result<State<Water>, If97Error> {
        thermo().state_from((
            ThermodynamicTemperature::new::<kelvin>(300.0),
            Pressure::new::<megapascal>(3.0),
        ))
    }

    #[test]
    fn liquid_properties() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = thermo();
        let state = liquid()?;

        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.0 / 0.100_215_168e-2,
            max_relative = 1e-8
        );
        assert_relative_eq!(thermo.pressure(&state)?.get::<megapascal>(), 3.0, max_relative = 1e-7);
        assert_relative_eq!(
            thermo.internal_energy(&state)?.get::<kilojoule_per_kilogram>(),
            112.324_818,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            thermo.entropy(&state)?.get::<kilojoule_per_kilogram_kelvin>(),
            0.392_294_792,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            thermo.cp(&state)?.get::<kilojoule_per_kilogram_kelvin>(),
            4.173_012_18,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            thermo.speed_of_sound(&state)?.get::<meter_per_second>(),
            1_507.739_21,
            max_relative = 1e-6
        );
        assert_eq!(thermo.region(&state)?, Region::Region1);
        Ok(())
    }

    #[test]
    fn input_pairs_agree() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = thermo();
        let state = thermo.state_from((
            ThermodynamicTemperature::new::<kelvin>(700.0),
            Pressure::new::<megapascal>(30.0),
        ))?;
        let h = thermo.enthalpy(&state)?;
        let s = thermo.entropy(&state)?;
        let p = thermo.pressure(&state)?;

        let from_ph = thermo.state_from((p, h))?;
        assert_relative_eq!(
            from_ph.temperature.get::<kelvin>(),
            700.0,
            epsilon = 2.5e-2
        );

        let from_ps = thermo.state_from((p, s))?;
        assert_relative_eq!(
            from_ps.temperature.get::<kelvin>(),
            700.0,
            epsilon = 2.5e-2
        );

        let from_hs = thermo.state_from((h, s))?;
        assert_relative_eq!(
            thermo.pressure(&from_hs)?.get::<megapascal>(),
            30.0,
            max_relative = 1e-3
        );
        Ok(())
    }

    #[test]
    fn two_phase_states() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = thermo();
        let state = thermo.state_from((
            Pressure::new::<megapascal>(1.0),
            SpecificEnthalpy::new::<kilojoule_per_kilogram>(1_500.0),
        ))?;

        assert_eq!(thermo.region(&state)?, Region::Region4);
        assert_relative_eq!(
            thermo.enthalpy(&state)?.get::<kilojoule_per_kilogram>(),
            1_500.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            thermo.pressure(&state)?.get::<megapascal>(),
            1.0,
            max_relative = 1e-9
        );

        let x = thermo.vapour_fraction(&state)?.into_inner();
        assert!(x > 0.0 && x < 1.0);

        assert!(matches!(thermo.cp(&state), Err(PropertyError::Undefined { .. })));
        Ok(())
    }

    #[test]
    fn edited_states_are_resolved_again() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = thermo();
        let state = liquid()?;

        let heated = state.with_temperature(ThermodynamicTemperature::new::<kelvin>(310.0));
        assert!(thermo.pressure(&heated)? > thermo.pressure(&state)?);
        assert_eq!(thermo.region(&heated)?, Region::Region1);

        let expanded = state.with_density(MassDensity::new::<kilogram_per_cubic_meter>(0.027));
        assert_eq!(thermo.region(&expanded)?, Region::Region4);
        assert!(thermo.vapour_fraction(&expanded)?.into_inner() > 0.9);
        Ok(())
    }

    #[test]
    fn rejects_invalid_inputs() {
        let thermo = thermo();

        let error = thermo
            .state_from((
                ThermodynamicTemperature::new::<degree_celsius>(25.0),
                MassDensity::new::<kilogram_per_cubic_meter>(-1.0),
            ))
            .unwrap_err();
        assert!(matches!(
            error,
            If97Error::OutOfRange(range) if range.quantity() == Quantity::Density
        ));

        let error = thermo
            .state_from((
                ThermodynamicTemperature::new::<kelvin>(300.0),
                Pressure::new::<megapascal>(150.0),
            ))
            .unwrap_err();
        assert!(matches!(
            PropertyError::from(error),
            PropertyError::OutOfDomain { .. }
        ));

        let vapour = thermo
            .state_from((
                ThermodynamicTemperature::new::<kelvin>(500.0),
                Pressure::new::<megapascal>(0.1),
            ))
            .unwrap();
        assert!(matches!(
            thermo.vapour_fraction(&vapour),
            Err(PropertyError::Undefined { .. })
        ));
    }
}
