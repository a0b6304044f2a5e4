//! The five IF97 regions and their forward equations of state.

pub(crate) mod boundary;
pub(crate) mod region1;
pub(crate) mod region2;
pub(crate) mod region3;
pub(crate) mod region4;
pub(crate) mod region5;

use std::fmt;

use crate::models::water::if97::If97Error;

use super::{
    constants::R,
    polynomial::{self, Coefficient, Derivatives},
};

use region3::HelmholtzState;

/// An IF97 region.
///
/// Regions 1, 2, 3 and 5 are single-phase and have an equation of state.
/// Region 4 is the saturation curve and the two-phase dome below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Compressed liquid.
    Region1,
    /// Superheated vapour.
    Region2,
    /// Near-critical fluid.
    Region3,
    /// Saturation curve and two-phase mixture.
    Region4,
    /// High-temperature vapour.
    Region5,
}

impl Region {
    /// Returns the region name, e.g. `"Region 3"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Region::Region1 => "Region 1",
            Region::Region2 => "Region 2",
            Region::Region3 => "Region 3",
            Region::Region4 => "Region 4",
            Region::Region5 => "Region 5",
        }
    }

    /// Evaluates the region's equation of state at `(p, T)`.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Unsupported`] for Region 4, where `(p, T)` does
    /// not determine the state, and an out-of-range error if Region 3 has
    /// no subregion at `(p, T)`.
    pub(crate) fn state_pt(self, p: f64, t: f64) -> Result<SinglePhaseState, If97Error> {
        match self {
            Region::Region1 => Ok(SinglePhaseState::Gibbs(region1::state(p, t))),
            Region::Region2 => Ok(SinglePhaseState::Gibbs(region2::state(p, t))),
            Region::Region3 => {
                let v = region3::specific_volume_pt(p, t)?;
                Ok(SinglePhaseState::Helmholtz(HelmholtzState::new(1.0 / v, t)))
            }
            Region::Region4 => Err(If97Error::unsupported(
                "single-phase properties at (p, T) in Region 4",
            )),
            Region::Region5 => Ok(SinglePhaseState::Gibbs(region5::state(p, t))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Thermodynamic properties of a resolved state, in default units.
///
/// Pressures are in MPa, energies in kJ/kg, entropies and heat capacities in
/// kJ/(kg·K), and the isothermal compressibility in 1/MPa.
pub(crate) trait Properties {
    fn pressure(&self) -> f64;
    fn temperature(&self) -> f64;
    fn specific_volume(&self) -> f64;
    fn specific_enthalpy(&self) -> f64;
    fn specific_entropy(&self) -> f64;
    fn specific_internal_energy(&self) -> f64;
    fn isobaric_heat_capacity(&self) -> f64;
    fn isochoric_heat_capacity(&self) -> f64;
    fn speed_of_sound(&self) -> f64;
    fn isobaric_cubic_expansion_coefficient(&self) -> f64;
    fn isothermal_compressibility(&self) -> f64;

    fn density(&self) -> f64 {
        1.0 / self.specific_volume()
    }

    fn specific_gibbs_free_energy(&self) -> f64 {
        self.specific_enthalpy() - self.temperature() * self.specific_entropy()
    }

    fn specific_helmholtz_free_energy(&self) -> f64 {
        self.specific_internal_energy() - self.temperature() * self.specific_entropy()
    }

    /// Ratio of the heat capacities, `cp/cv`.
    fn isentropic_exponent(&self) -> f64 {
        self.isobaric_heat_capacity() / self.isochoric_heat_capacity()
    }

    /// `p·v/(R·T)`.
    fn compression_factor(&self) -> f64 {
        1e3 * self.pressure() * self.specific_volume() / (R * self.temperature())
    }
}

/// A Gibbs-based region: Regions 1, 2 and 5, and the metastable-vapour form of Region 2.
pub(crate) trait GibbsRegion {
    const REGION: Region;
    const REDUCING_PRESSURE: f64;
    const REDUCING_TEMPERATURE: f64;

    /// Dimensionless Gibbs free energy `γ(π, τ)` and its derivatives.
    ///
    /// `dx` and `dy` are the derivatives with respect to `π` and `τ`.
    fn gamma(&self, pi: f64, tau: f64) -> Derivatives;

    fn state(&self, p: f64, t: f64) -> GibbsState {
        let pi = p / Self::REDUCING_PRESSURE;
        let tau = Self::REDUCING_TEMPERATURE / t;

        GibbsState {
            region: Self::REGION,
            pressure: p,
            temperature: t,
            pi,
            tau,
            gamma: self.gamma(pi, tau),
        }
    }
}

/// Adds the ideal-gas part `ln π + Σ n·τ^J` to a residual Gibbs free energy.
pub(crate) fn with_ideal_gas_part(
    ideal: &[Coefficient],
    pi: f64,
    tau: f64,
    residual: Derivatives,
) -> Derivatives {
    let (value, dtau, dtautau) = polynomial::series_derivatives(ideal, tau);

    Derivatives {
        value: pi.ln() + value + residual.value,
        dx: 1.0 / pi + residual.dx,
        dy: dtau + residual.dy,
        dxx: -1.0 / (pi * pi) + residual.dxx,
        dyy: dtautau + residual.dyy,
        dxy: residual.dxy,
    }
}

/// A state evaluated from a Gibbs free-energy equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GibbsState {
    pub(crate) region: Region,
    pressure: f64,
    temperature: f64,
    pi: f64,
    tau: f64,
    gamma: Derivatives,
}

impl GibbsState {
    /// `γπ − τ·γπτ`, shared by `cv` and `w`.
    fn pi_tau_term(&self) -> f64 {
        self.gamma.dx - self.tau * self.gamma.dxy
    }
}

impl Properties for GibbsState {
    fn pressure(&self) -> f64 {
        self.pressure
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn specific_volume(&self) -> f64 {
        self.pi * self.gamma.dx * R * self.temperature / (1e3 * self.pressure)
    }

    fn specific_enthalpy(&self) -> f64 {
        self.tau * self.gamma.dy * R * self.temperature
    }

    fn specific_entropy(&self) -> f64 {
        (self.tau * self.gamma.dy - self.gamma.value) * R
    }

    fn specific_internal_energy(&self) -> f64 {
        (self.tau * self.gamma.dy - self.pi * self.gamma.dx) * R * self.temperature
    }

    fn specific_gibbs_free_energy(&self) -> f64 {
        self.gamma.value * R * self.temperature
    }

    fn isobaric_heat_capacity(&self) -> f64 {
        -self.tau * self.tau * self.gamma.dyy * R
    }

    fn isochoric_heat_capacity(&self) -> f64 {
        let x = self.pi_tau_term();
        (-self.tau * self.tau * self.gamma.dyy + x * x / self.gamma.dxx) * R
    }

    fn speed_of_sound(&self) -> f64 {
        let x = self.pi_tau_term();
        let g = &self.gamma;
        let denominator = x * x / (self.tau * self.tau * g.dyy) - g.dxx;

        (1e3 * R * self.temperature * g.dx * g.dx / denominator).sqrt()
    }

    fn isobaric_cubic_expansion_coefficient(&self) -> f64 {
        (1.0 - self.tau * self.gamma.dxy / self.gamma.dx) / self.temperature
    }

    fn isothermal_compressibility(&self) -> f64 {
        -self.pi * self.gamma.dxx / (self.gamma.dx * self.pressure)
    }
}

/// A resolved single-phase state, from either kind of equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SinglePhaseState {
    Gibbs(GibbsState),
    Helmholtz(HelmholtzState),
}

impl SinglePhaseState {
    pub(crate) fn region(&self) -> Region {
        match self {
            SinglePhaseState::Gibbs(state) => state.region,
            SinglePhaseState::Helmholtz(_) => Region::Region3,
        }
    }
}

macro_rules! delegate {
    ($($method:ident),* $(,)?) => {
        impl Properties for SinglePhaseState {
            $(
                fn $method(&self) -> f64 {
                    match self {
                        SinglePhaseState::Gibbs(state) => state.$method(),
                        SinglePhaseState::Helmholtz(state) => state.$method(),
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
    specific_gibbs_free_energy,
    isobaric_heat_capacity,
    isochoric_heat_capacity,
    speed_of_sound,
    isobaric_cubic_expansion_coefficient,
    isothermal_compressibility,
);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn names() {
        assert_eq!(Region::Region3.to_string(), "Region 3");
        assert_eq!(Region::Region5.name(), "Region 5");
    }

    #[test]
    fn region4_has_no_pt_state() {
        assert!(matches!(
            Region::Region4.state_pt(1.0, 400.0),
            Err(If97Error::Unsupported { .. })
        ));
    }

    #[test]
    fn dispatches_to_equation_of_state() -> Result<(), If97Error> {
        let liquid = Region::Region1.state_pt(3.0, 300.0)?;
        assert_eq!(liquid.region(), Region::Region1);
        assert_relative_eq!(liquid.specific_enthalpy(), 115.331_273, max_relative = 1e-8);

        let dense = Region::Region3.state_pt(50.0, 630.0)?;
        assert_eq!(dense.region(), Region::Region3);
        assert_relative_eq!(dense.specific_volume(), 1.470_853_100e-3, max_relative = 1e-8);

        Ok(())
    }

    #[test]
    fn derived_properties_agree_with_gibbs_forms() {
        let state = region1::state(3.0, 300.0);

        assert_relative_eq!(
            state.specific_gibbs_free_energy(),
            state.specific_enthalpy() - 300.0 * state.specific_entropy(),
            max_relative = 1e-10
        );
        assert_relative_eq!(
            state.specific_helmholtz_free_energy(),
            state.specific_internal_energy() - 300.0 * state.specific_entropy(),
            max_relative = 1e-10
        );
    }

    #[test]
    fn b23_meets_saturation_curve_at_623_15_k() {
        use super::super::constants::{DERIVED, T13};

        // The coefficients are published to 14 digits, which bounds the match.
        assert_relative_eq!(boundary::pressure_b23(T13), DERIVED.ps13, max_relative = 1e-11);
        assert_relative_eq!(boundary::temperature_b23(DERIVED.ps13), T13, max_relative = 1e-11);
    }

    #[test]
    fn regions_1_and_3_agree_on_their_shared_corner() {
        use super::super::constants::{DERIVED, T13};

        let liquid = region1::state(DERIVED.ps13, T13);
        let dense = HelmholtzState::new(liquid.density(), T13);

        assert_relative_eq!(dense.pressure(), DERIVED.ps13, max_relative = 2e-4);
        assert_relative_eq!(dense.specific_enthalpy(), liquid.specific_enthalpy(), epsilon = 0.1);
        assert_relative_eq!(dense.specific_entropy(), liquid.specific_entropy(), epsilon = 2e-4);
    }

    #[test]
    fn regions_2_and_3_agree_along_b23() {
        for t in [623.15, 700.0, 800.0, 863.15] {
            let p = boundary::pressure_b23(t);
            let vapour = region2::state(p, t);
            let dense = HelmholtzState::new(vapour.density(), t);

            assert_relative_eq!(dense.pressure(), p, max_relative = 2e-4);
            assert_relative_eq!(dense.specific_enthalpy(), vapour.specific_enthalpy(), epsilon = 0.1);
            assert_relative_eq!(dense.specific_entropy(), vapour.specific_entropy(), epsilon = 2e-4);
        }
    }
}
