//! IAPWS-IF97 property engine.
//!
//! Everything here works in default units (MPa, K, kJ/kg, kJ/(kg·K)).
//! The public [`If97`](super::If97) facade converts to and from the
//! caller's unit system and delegates to the resolvers below, which map an
//! input pair to a [`State`] through region selection and the backward
//! equations.

mod constants;
mod density;
mod derivative;
mod polynomial;
mod region;
mod saturation;
mod select;
mod solver;
mod transport;

pub use region::Region;

pub(crate) use density::state_from_density;

pub(crate) use saturation::{
    Phase, saturation_hs, saturation_pressure, saturation_temperature, vapour_fraction_hs,
    vapour_fraction_ph, vapour_fraction_ps, vapour_fraction_ts,
};
pub(crate) use select::{select_hs, select_ph, select_ps, select_pt};
pub(crate) use transport::{
    dielectric_constant, dynamic_viscosity, kinematic_viscosity, refractive_index,
    surface_tension, thermal_conductivity,
};

use crate::models::water::if97::{If97Error, Quantity, error::OutOfRange};

use constants::{P_MAX, T0, T13, T25};
use region::{
    GibbsRegion, Properties, SinglePhaseState,
    boundary::temperature_b23,
    region1,
    region2::{self, Region2},
    region3::{self, HelmholtzState},
    region5,
};
use saturation::{Mixture, SaturatedState};

/// Upper pressure bound of the metastable-vapour formulation, MPa.
const P_METASTABLE: f64 = 10.0;

/// A resolved state: single-phase, saturated, or a two-phase mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum State {
    SinglePhase(SinglePhaseState),
    Saturated(SaturatedState, Phase),
    TwoPhase(Mixture),
}

impl State {
    /// The region the state belongs to.
    pub(crate) fn region(&self) -> Region {
        match self {
            State::SinglePhase(state) => state.region(),
            State::Saturated(..) | State::TwoPhase(_) => Region::Region4,
        }
    }

    pub(crate) fn vapour_fraction(&self) -> Result<f64, If97Error> {
        match self {
            State::SinglePhase(_) => Err(If97Error::unsupported(
                "vapour fraction of a single-phase state",
            )),
            State::Saturated(_, Phase::Liquid) => Ok(0.0),
            State::Saturated(_, Phase::Vapour) => Ok(1.0),
            State::TwoPhase(mixture) => Ok(mixture.vapour_fraction()),
        }
    }

    /// Evaluates `quantity` at this state, in default units.
    ///
    /// Transport properties of saturated and two-phase states are evaluated
    /// at the state's density and temperature.
    ///
    /// # Errors
    ///
    /// Fails with [`If97Error::InvalidQuantity`] for the refractive index and
    /// the wavelength, which need a wavelength input, and propagates the
    /// range errors of the dielectric constant and surface tension.
    pub(crate) fn property(&self, quantity: Quantity) -> Result<f64, If97Error> {
        let rho = self.density();
        let t = self.temperature();

        let value = match quantity {
            Quantity::Pressure => self.pressure(),
            Quantity::Temperature => t,
            Quantity::SpecificVolume => self.specific_volume(),
            Quantity::SpecificInternalEnergy => self.specific_internal_energy(),
            Quantity::SpecificEnthalpy => self.specific_enthalpy(),
            Quantity::SpecificEntropy => self.specific_entropy(),
            Quantity::SpecificGibbsFreeEnergy => self.specific_gibbs_free_energy(),
            Quantity::SpecificHelmholtzFreeEnergy => self.specific_helmholtz_free_energy(),
            Quantity::Density => rho,
            Quantity::IsobaricHeatCapacity => self.isobaric_heat_capacity(),
            Quantity::IsochoricHeatCapacity => self.isochoric_heat_capacity(),
            Quantity::SpeedOfSound => self.speed_of_sound(),
            Quantity::VapourFraction => self.vapour_fraction()?,
            Quantity::CompressionFactor => self.compression_factor(),
            Quantity::IsobaricCubicExpansionCoefficient => {
                self.isobaric_cubic_expansion_coefficient()
            }
            Quantity::IsentropicExponent => self.isentropic_exponent(),
            Quantity::IsothermalCompressibility => self.isothermal_compressibility(),
            Quantity::DynamicViscosity => transport::dynamic_viscosity(rho, t),
            Quantity::KinematicViscosity => transport::kinematic_viscosity(rho, t),
            Quantity::ThermalConductivity => transport::thermal_conductivity(rho, t),
            Quantity::ThermalDiffusivity => {
                transport::thermal_diffusivity(rho, t, self.isobaric_heat_capacity())
            }
            Quantity::PrandtlNumber => {
                transport::prandtl_number(rho, t, self.isobaric_heat_capacity())
            }
            Quantity::DielectricConstant => transport::dielectric_constant(rho, t)?,
            Quantity::SurfaceTension => transport::surface_tension(t)?,
            Quantity::RefractiveIndex | Quantity::Wavelength => {
                return Err(If97Error::invalid_quantity(
                    quantity,
                    "requires a wavelength, use the refractive index methods",
                ));
            }
        };

        Ok(value)
    }

    /// Refractive index at wavelength `lambda` in μm.
    pub(crate) fn refractive_index(&self, lambda: f64) -> Result<f64, OutOfRange> {
        refractive_index(self.density(), self.temperature(), lambda)
    }

    /// Returns `(∂z/∂x)_y` at this state.
    ///
    /// # Errors
    ///
    /// Saturated and two-phase states have no partial derivatives and fail
    /// with [`If97Error::Unsupported`].
    pub(crate) fn partial_derivative(
        &self,
        x: Quantity,
        y: Quantity,
        z: Quantity,
    ) -> Result<f64, If97Error> {
        match self {
            State::SinglePhase(state) => derivative::partial_derivative(state, x, y, z),
            State::Saturated(..) | State::TwoPhase(_) => Err(If97Error::unsupported(
                "partial derivatives in Region 4",
            )),
        }
    }
}

macro_rules! delegate {
    ($($method:ident),* $(,)?) => {
        impl Properties for State {
            $(
                fn $method(&self) -> f64 {
                    match self {
                        State::SinglePhase(state) => state.$method(),
                        State::Saturated(state, _) => state.$method(),
                        State::TwoPhase(state) => state.$method(),
                    }
                }
            )*
        }
    };
}

delegate!(
    pressure,
    temperature,
    specific_volume,
    specific_enthalpy,
    specific_entropy,
    specific_internal_energy,
    isobaric_heat_capacity,
    isochoric_heat_capacity,
    speed_of_sound,
    isobaric_cubic_expansion_coefficient,
    isothermal_compressibility,
);

/// Resolves `(p, T)`.
///
/// The result is always single-phase.
pub(crate) fn state_pt(p: f64, t: f64) -> Result<State, If97Error> {
    let region = select_pt(p, t)?;
    Ok(State::SinglePhase(region.state_pt(p, t)?))
}

/// Resolves `(p, h)`.
pub(crate) fn state_ph(p: f64, h: f64) -> Result<State, If97Error> {
    let state = match select_ph(p, h)? {
        Region::Region1 => {
            let t = region1::temperature_ph(p, h);
            SinglePhaseState::Gibbs(region1::state(p, t))
        }
        Region::Region2 => {
            let t = region2::temperature_ph(p, h);
            SinglePhaseState::Gibbs(region2::state(p, t))
        }
        Region::Region3 => {
            let t = region3::temperature_ph(p, h);
            let v = region3::specific_volume_ph(p, h);
            SinglePhaseState::Helmholtz(HelmholtzState::new(1.0 / v, t))
        }
        Region::Region4 => return Ok(State::TwoPhase(saturation::mixture_ph(p, h)?)),
        Region::Region5 => {
            let t = region5::temperature_ph(p, h);
            SinglePhaseState::Gibbs(region5::state(p, t))
        }
    };

    Ok(State::SinglePhase(state))
}

/// Resolves `(p, s)`.
pub(crate) fn state_ps(p: f64, s: f64) -> Result<State, If97Error> {
    let state = match select_ps(p, s)? {
        Region::Region1 => {
            let t = region1::temperature_ps(p, s);
            SinglePhaseState::Gibbs(region1::state(p, t))
        }
        Region::Region2 => {
            let t = region2::temperature_ps(p, s);
            SinglePhaseState::Gibbs(region2::state(p, t))
        }
        Region::Region3 => {
            let t = region3::temperature_ps(p, s);
            let v = region3::specific_volume_ps(p, s);
            SinglePhaseState::Helmholtz(HelmholtzState::new(1.0 / v, t))
        }
        Region::Region4 => return Ok(State::TwoPhase(saturation::mixture_ps(p, s)?)),
        Region::Region5 => {
            let t = region5::temperature_ps(p, s);
            SinglePhaseState::Gibbs(region5::state(p, t))
        }
    };

    Ok(State::SinglePhase(state))
}

/// Resolves `(h, s)`.
///
/// # Errors
///
/// Two-phase states above 623.15 K are [`If97Error::Unsupported`].
pub(crate) fn state_hs(h: f64, s: f64) -> Result<State, If97Error> {
    let state = match select_hs(h, s)? {
        Region::Region1 => {
            let p = region1::pressure_hs(h, s);
            SinglePhaseState::Gibbs(region1::state(p, region1::temperature_hs(h, s)))
        }
        Region::Region2 => {
            let p = region2::pressure_hs(h, s);
            SinglePhaseState::Gibbs(region2::state(p, region2::temperature_hs(h, s)))
        }
        Region::Region3 => {
            let t = region3::temperature_hs(h, s);
            let v = region3::specific_volume_hs(h, s);
            SinglePhaseState::Helmholtz(HelmholtzState::new(1.0 / v, t))
        }
        Region::Region4 => return Ok(State::TwoPhase(saturation::mixture_hs(h, s)?)),
        Region::Region5 => {
            return Err(If97Error::unsupported("(h, s) states in Region 5"));
        }
    };

    Ok(State::SinglePhase(state))
}

/// Resolves `(ρ, T)` with the Region 3 equation of state.
///
/// # Errors
///
/// Fails unless `ρ > 0`, 623.15 K ≤ `T` ≤ the B23 temperature at 100 MPa,
/// and the resulting pressure is at most 100 MPa.
pub(crate) fn state_rho_t(rho: f64, t: f64) -> Result<State, If97Error> {
    if rho <= 0.0 {
        return Err(OutOfRange::new(Quantity::Density, rho, 0.0).into());
    }

    let t_max = temperature_b23(P_MAX);
    if t < T13 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T13).into());
    }
    if t > t_max {
        return Err(OutOfRange::new(Quantity::Temperature, t, t_max).into());
    }

    let state = HelmholtzState::new(rho, t);
    let p = state.pressure();
    if p > P_MAX {
        return Err(OutOfRange::new(Quantity::Pressure, p, P_MAX).into());
    }

    Ok(State::SinglePhase(SinglePhaseState::Helmholtz(state)))
}

/// Saturated liquid or vapour at pressure `p`.
pub(crate) fn saturated_p(p: f64, phase: Phase) -> Result<State, If97Error> {
    Ok(State::Saturated(saturation::saturated_p(p, phase)?, phase))
}

/// Saturated liquid or vapour at temperature `t`.
pub(crate) fn saturated_t(t: f64, phase: Phase) -> Result<State, If97Error> {
    Ok(State::Saturated(saturation::saturated_t(t, phase)?, phase))
}

/// Two-phase mixture at pressure `p` and vapour fraction `x`.
pub(crate) fn mixture_px(p: f64, x: f64) -> Result<State, If97Error> {
    Ok(State::TwoPhase(saturation::mixture_px(p, x)?))
}

/// Two-phase mixture at temperature `t` and vapour fraction `x`.
pub(crate) fn mixture_tx(t: f64, x: f64) -> Result<State, If97Error> {
    Ok(State::TwoPhase(saturation::mixture_tx(t, x)?))
}

/// Metastable vapour at `(p, T)`.
///
/// The formulation is meant for supersaturated vapour up to 10 MPa and is
/// only bounded here by that pressure and the Region 2 temperature range.
pub(crate) fn metastable_vapour_pt(p: f64, t: f64) -> Result<State, If97Error> {
    if p <= 0.0 {
        return Err(OutOfRange::new(Quantity::Pressure, p, 0.0).into());
    }
    if p > P_METASTABLE {
        return Err(OutOfRange::new(Quantity::Pressure, p, P_METASTABLE).into());
    }
    if t < T0 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T0).into());
    }
    if t > T25 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T25).into());
    }

    let state = Region2::METASTABLE.state(p, t);
    Ok(State::SinglePhase(SinglePhaseState::Gibbs(state)))
}

/// Surface tension at the saturation temperature of `p`.
pub(crate) fn surface_tension_p(p: f64) -> Result<f64, OutOfRange> {
    surface_tension(saturation_temperature(p)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn resolves_each_input_pair() -> Result<(), If97Error> {
        let state = state_pt(3.0, 300.0)?;
        assert_eq!(state.region(), Region::Region1);
        assert_relative_eq!(state.specific_enthalpy(), 115.331_273, max_relative = 1e-8);

        let state = state_ph(3.0, 500.0)?;
        assert_relative_eq!(state.temperature(), 391.798_509, epsilon = 1e-5);

        let state = state_ps(80.0, 3.0)?;
        assert_relative_eq!(state.temperature(), 565.899_909, epsilon = 1e-5);

        let state = state_hs(2500.0, 5.5)?;
        assert_eq!(state.region(), Region::Region4);
        assert_relative_eq!(state.temperature(), 522.557_901_3, epsilon = 1e-5);

        let state = state_ps(20.0, 3.8)?;
        assert_eq!(state.region(), Region::Region3);
        assert_relative_eq!(state.temperature(), 628.295_986_9, epsilon = 1e-5);
        Ok(())
    }

    #[test]
    fn high_temperature_states() -> Result<(), If97Error> {
        let reference = region5::state(30.0, 1500.0);

        let state = state_ph(30.0, reference.specific_enthalpy())?;
        assert_eq!(state.region(), Region::Region5);
        assert_relative_eq!(state.temperature(), 1500.0, max_relative = 1e-8);

        let state = state_ps(30.0, reference.specific_entropy())?;
        assert_relative_eq!(state.temperature(), 1500.0, max_relative = 1e-8);
        Ok(())
    }

    #[test]
    fn two_phase_states() -> Result<(), If97Error> {
        let state = state_ph(20.0, 2000.0)?;
        assert_eq!(state.region(), Region::Region4);
        assert_relative_eq!(state.vapour_fraction()?, 0.295_915, epsilon = 1e-5);
        assert_relative_eq!(state.specific_enthalpy(), 2000.0, max_relative = 1e-9);

        let liquid = saturated_p(1.0, Phase::Liquid)?;
        assert_relative_eq!(liquid.property(Quantity::VapourFraction)?, 0.0);

        let mixture = mixture_tx(450.0, 0.25)?;
        assert_relative_eq!(mixture.property(Quantity::VapourFraction)?, 0.25);
        Ok(())
    }

    #[test]
    fn density_temperature_states() -> Result<(), If97Error> {
        let state = state_rho_t(500.0, 650.0)?;
        assert_relative_eq!(state.pressure(), 25.583_701_8, max_relative = 1e-8);

        assert!(matches!(
            state_rho_t(500.0, 600.0),
            Err(If97Error::OutOfRange(error)) if error.quantity() == Quantity::Temperature
        ));
        assert!(matches!(
            state_rho_t(-1.0, 650.0),
            Err(If97Error::OutOfRange(error)) if error.quantity() == Quantity::Density
        ));
        Ok(())
    }

    #[test]
    fn metastable_vapour() -> Result<(), If97Error> {
        let state = metastable_vapour_pt(1.0, 450.0)?;
        assert_relative_eq!(state.specific_enthalpy(), 2_768.811_15, max_relative = 1e-8);

        assert!(metastable_vapour_pt(12.0, 450.0).is_err());
        Ok(())
    }

    #[test]
    fn derived_properties() -> Result<(), If97Error> {
        let state = state_pt(0.1, 298.15)?;

        assert_relative_eq!(
            state.property(Quantity::DynamicViscosity)?,
            0.890_022_551e-3,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            state.property(Quantity::CompressionFactor)?,
            1e3 * 0.1 * state.specific_volume() / (constants::R * 298.15),
            max_relative = 1e-12
        );
        assert!(matches!(
            state.property(Quantity::RefractiveIndex),
            Err(If97Error::InvalidQuantity { .. })
        ));
        assert_relative_eq!(state.refractive_index(0.5893)?, 0.133_285_819e1, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn derivatives_are_unsupported_in_two_phase() -> Result<(), If97Error> {
        let state = mixture_px(1.0, 0.5)?;
        assert!(matches!(
            state.partial_derivative(
                Quantity::Pressure,
                Quantity::Temperature,
                Quantity::SpecificEnthalpy
            ),
            Err(If97Error::Unsupported { .. })
        ));
        Ok(())
    }
}
