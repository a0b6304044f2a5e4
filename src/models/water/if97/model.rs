//! [`twine_core::Model`] adapter for [`If97`].

use twine_core::Model;

use super::{If97, If97Error, Quantity, Region, core};

/// The pair of inputs that fixes a state, in the unit system of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    PressureTemperature { pressure: f64, temperature: f64 },
    PressureEnthalpy { pressure: f64, enthalpy: f64 },
    PressureEntropy { pressure: f64, entropy: f64 },
    EnthalpyEntropy { enthalpy: f64, entropy: f64 },
    PressureVapourFraction { pressure: f64, vapour_fraction: f64 },
    TemperatureVapourFraction { temperature: f64, vapour_fraction: f64 },
}

/// Properties of a resolved state, in the unit system of the model.
///
/// Heat capacities and the speed of sound of two-phase states are the
/// vapour-fraction-weighted means of the saturated endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateProperties {
    pub region: Region,
    pub pressure: f64,
    pub temperature: f64,
    pub density: f64,
    pub specific_volume: f64,
    pub specific_enthalpy: f64,
    pub specific_entropy: f64,
    pub specific_internal_energy: f64,
    pub isobaric_heat_capacity: f64,
    pub isochoric_heat_capacity: f64,
    pub speed_of_sound: f64,
    /// `None` for single-phase states.
    pub vapour_fraction: Option<f64>,
}

impl Model for If97 {
    type Input = StateInput;
    type Output = StateProperties;
    type Error = If97Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let p = |value| self.to_default(Quantity::Pressure, value);
        let t = |value| self.to_default(Quantity::Temperature, value);
        let h = |value| self.to_default(Quantity::SpecificEnthalpy, value);
        let s = |value| self.to_default(Quantity::SpecificEntropy, value);

        let state = match *input {
            StateInput::PressureTemperature {
                pressure,
                temperature,
            } => core::state_pt(p(pressure), t(temperature)),
            StateInput::PressureEnthalpy { pressure, enthalpy } => {
                core::state_ph(p(pressure), h(enthalpy))
            }
            StateInput::PressureEntropy { pressure, entropy } => {
                core::state_ps(p(pressure), s(entropy))
            }
            StateInput::EnthalpyEntropy { enthalpy, entropy } => {
                core::state_hs(h(enthalpy), s(entropy))
            }
            StateInput::PressureVapourFraction {
                pressure,
                vapour_fraction,
            } => core::mixture_px(p(pressure), vapour_fraction),
            StateInput::TemperatureVapourFraction {
                temperature,
                vapour_fraction,
            } => core::mixture_tx(t(temperature), vapour_fraction),
        }
        .map_err(|error| error.convert_from_default(self.unit_system()))?;

        let get = |quantity| {
            state
                .property(quantity)
                .map(|value| self.unit_system().from_default(quantity, value))
        };

        Ok(StateProperties {
            region: state.region(),
            pressure: get(Quantity::Pressure)?,
            temperature: get(Quantity::Temperature)?,
            density: get(Quantity::Density)?,
            specific_volume: get(Quantity::SpecificVolume)?,
            specific_enthalpy: get(Quantity::SpecificEnthalpy)?,
            specific_entropy: get(Quantity::SpecificEntropy)?,
            specific_internal_energy: get(Quantity::SpecificInternalEnergy)?,
            isobaric_heat_capacity: get(Quantity::IsobaricHeatCapacity)?,
            isochoric_heat_capacity: get(Quantity::IsochoricHeatCapacity)?,
            speed_of_sound: get(Quantity::SpeedOfSound)?,
            vapour_fraction: state.vapour_fraction().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::water::if97::UnitSystem;

    #[test]
    fn single_phase_state() -> Result<(), If97Error> {
        let output = If97::default().call(&StateInput::PressureTemperature {
            pressure: 0.0035,
            temperature: 700.0,
        })?;

        assert_eq!(output.region, Region::Region2);
        assert_relative_eq!(output.specific_volume, 0.923_015_898e2, max_relative = 1e-8);
        assert_relative_eq!(output.specific_enthalpy, 0.333_568_375e4, max_relative = 1e-8);
        assert_relative_eq!(output.speed_of_sound, 0.644_289_068e3, max_relative = 1e-8);
        assert_eq!(output.vapour_fraction, None);
        Ok(())
    }

    #[test]
    fn two_phase_state_in_engineering_units() -> Result<(), If97Error> {
        let if97 = If97::new(UnitSystem::Engineering);
        let output = if97.call(&StateInput::PressureVapourFraction {
            pressure: 10.0,
            vapour_fraction: 0.5,
        })?;

        assert_eq!(output.region, Region::Region4);
        assert_relative_eq!(output.temperature, 179.88, epsilon = 1e-2);
        assert_eq!(output.vapour_fraction, Some(0.5));
        Ok(())
    }

    #[test]
    fn errors_use_the_model_units() {
        let if97 = If97::new(UnitSystem::Engineering);
        let Err(If97Error::OutOfRange(error)) = if97.call(&StateInput::PressureEnthalpy {
            pressure: 1_500.0,
            enthalpy: 1_000.0,
        }) else {
            panic!("expected a range violation");
        };

        assert_eq!(error.quantity(), Quantity::Pressure);
        assert_relative_eq!(error.limit(), 1_000.0);
    }
}
