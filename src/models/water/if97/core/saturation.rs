//! Saturated states and two-phase mixtures.
//!
//! Up to the saturation pressure at 623.15 K the saturated liquid and vapour
//! are Region 1 and Region 2 states at the saturation temperature. Above it
//! both branches lie inside Region 3 and are located iteratively:
//! enthalpy and entropy by a Ridders solve on the Region 3/4 boundary
//! equations, and volume by a Brent solve on the Region 3 pressure along
//! the saturation isotherm.

use tracing::{trace, warn};

use crate::models::water::if97::{If97Error, Quantity, error::OutOfRange};

use super::{
    constants::{DERIVED, HC, PC, RHOC, T0, T13, TC},
    region::{
        Properties, SinglePhaseState,
        region1, region2,
        region3::{self, HelmholtzState},
        region4,
    },
    solver::{BracketConfig, Solution, SolverConfig, bracket_decreasing, brent, ridders},
};

/// Branch of the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Liquid,
    Vapour,
}

/// Checks that `p` lies on the saturation curve.
pub(crate) fn check_pressure(p: f64) -> Result<(), OutOfRange> {
    let p0 = DERIVED.p0;

    if p < p0 {
        Err(OutOfRange::new(Quantity::Pressure, p, p0))
    } else if p > PC {
        Err(OutOfRange::new(Quantity::Pressure, p, PC))
    } else {
        Ok(())
    }
}

/// Checks that `t` lies on the saturation curve.
pub(crate) fn check_temperature(t: f64) -> Result<(), OutOfRange> {
    if t < T0 {
        Err(OutOfRange::new(Quantity::Temperature, t, T0))
    } else if t > TC {
        Err(OutOfRange::new(Quantity::Temperature, t, TC))
    } else {
        Ok(())
    }
}

pub(crate) fn check_vapour_fraction(x: f64) -> Result<(), OutOfRange> {
    if x < 0.0 {
        Err(OutOfRange::new(Quantity::VapourFraction, x, 0.0))
    } else if x > 1.0 {
        Err(OutOfRange::new(Quantity::VapourFraction, x, 1.0))
    } else {
        Ok(())
    }
}

/// Saturation pressure at `t`, capped at the critical pressure.
pub(crate) fn saturation_pressure(t: f64) -> Result<f64, OutOfRange> {
    check_temperature(t)?;
    Ok(region4::saturation_pressure(t).min(PC))
}

/// Saturation temperature at `p`, capped at the critical temperature.
pub(crate) fn saturation_temperature(p: f64) -> Result<f64, OutOfRange> {
    check_pressure(p)?;
    Ok(region4::saturation_temperature(p).min(TC))
}

/// A saturated liquid or vapour state.
///
/// Volume, enthalpy, entropy and internal energy are carried explicitly so
/// the near-critical iterative results are reported as solved. The
/// remaining properties come from the single-phase state at the same
/// volume and temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SaturatedState {
    pressure: f64,
    temperature: f64,
    specific_volume: f64,
    specific_enthalpy: f64,
    specific_entropy: f64,
    specific_internal_energy: f64,
    state: SinglePhaseState,
}

impl SaturatedState {
    fn from_state(state: SinglePhaseState) -> Self {
        Self {
            pressure: state.pressure(),
            temperature: state.temperature(),
            specific_volume: state.specific_volume(),
            specific_enthalpy: state.specific_enthalpy(),
            specific_entropy: state.specific_entropy(),
            specific_internal_energy: state.specific_internal_energy(),
            state,
        }
    }

    fn critical() -> Self {
        let state = HelmholtzState::new(RHOC, TC);

        Self {
            pressure: PC,
            temperature: TC,
            specific_volume: 1.0 / RHOC,
            specific_enthalpy: HC,
            specific_entropy: DERIVED.sc,
            specific_internal_energy: DERIVED.uc,
            state: SinglePhaseState::Helmholtz(state),
        }
    }

    /// The single-phase state the saturated state was evaluated from.
    pub(crate) fn state(&self) -> &SinglePhaseState {
        &self.state
    }
}

impl Properties for SaturatedState {
    fn pressure(&self) -> f64 {
        self.pressure
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn specific_volume(&self) -> f64 {
        self.specific_volume
    }

    fn specific_enthalpy(&self) -> f64 {
        self.specific_enthalpy
    }

    fn specific_entropy(&self) -> f64 {
        self.specific_entropy
    }

    fn specific_internal_energy(&self) -> f64 {
        self.specific_internal_energy
    }

    fn isobaric_heat_capacity(&self) -> f64 {
        self.state.isobaric_heat_capacity()
    }

    fn isochoric_heat_capacity(&self) -> f64 {
        self.state.isochoric_heat_capacity()
    }

    fn speed_of_sound(&self) -> f64 {
        self.state.speed_of_sound()
    }

    fn isobaric_cubic_expansion_coefficient(&self) -> f64 {
        self.state.isobaric_cubic_expansion_coefficient()
    }

    fn isothermal_compressibility(&self) -> f64 {
        self.state.isothermal_compressibility()
    }
}

/// Saturated liquid or vapour at pressure `p`.
///
/// # Errors
///
/// Fails if `p` lies outside `[p(T0), pc]`.
pub(crate) fn saturated_p(p: f64, phase: Phase) -> Result<SaturatedState, OutOfRange> {
    check_pressure(p)?;
    let derived = &*DERIVED;

    if p >= PC {
        return Ok(SaturatedState::critical());
    }

    let ts = region4::saturation_temperature(p);

    if p <= derived.ps13 {
        let state = match phase {
            Phase::Liquid => region1::state(p, ts),
            Phase::Vapour => region2::state(p, ts),
        };
        return Ok(SaturatedState::from_state(SinglePhaseState::Gibbs(state)));
    }

    let (h_bracket, s_bracket) = match phase {
        Phase::Liquid => ((derived.hs13, HC), (derived.ss13, derived.sc)),
        Phase::Vapour => ((HC, derived.hs23), (derived.sc, derived.ss23)),
    };

    let config = SolverConfig::default();
    let h = ridders(
        |h| region4::saturation_pressure_h(h) - p,
        h_bracket.0,
        h_bracket.1,
        &config,
    );
    report(&h, p, phase, "enthalpy");

    let s = ridders(
        |s| region4::saturation_pressure_s(s) - p,
        s_bracket.0,
        s_bracket.1,
        &config,
    );
    report(&s, p, phase, "entropy");

    let v = saturated_volume(p, ts, phase)?;
    let state = HelmholtzState::new(1.0 / v, ts);

    Ok(SaturatedState {
        pressure: p,
        temperature: ts,
        specific_volume: v,
        specific_enthalpy: h.x,
        specific_entropy: s.x,
        specific_internal_energy: h.x - 1e3 * p * v,
        state: SinglePhaseState::Helmholtz(state),
    })
}

/// Saturated liquid or vapour at temperature `t`.
///
/// # Errors
///
/// Fails if `t` lies outside `[T0, Tc]`.
pub(crate) fn saturated_t(t: f64, phase: Phase) -> Result<SaturatedState, OutOfRange> {
    saturated_p(saturation_pressure(t)?, phase)
}

/// Region 3 volume on the saturation isotherm `ts` at which the pressure equals `p`.
///
/// The search starts from the `v(p, T)` backward equation evaluated on the
/// requested side of the saturation curve.
fn saturated_volume(p: f64, ts: f64, phase: Phase) -> Result<f64, OutOfRange> {
    let t_start = match phase {
        Phase::Liquid => ts,
        Phase::Vapour => ts + 1e-9,
    };
    let v0 = region3::specific_volume_pt(p, t_start)?;
    let residual = |v: f64| region3::pressure_rho_t(1.0 / v, ts) - p;

    let Some((lo, hi)) = bracket_decreasing(residual, v0, &BracketConfig::default()) else {
        warn!(
            pressure = p,
            ?phase,
            volume = v0,
            "no sign change around the saturated volume, using the backward equation"
        );
        return Ok(v0);
    };

    let v = brent(residual, lo, hi, &SolverConfig::default());
    report(&v, p, phase, "volume");
    Ok(v.x)
}

fn report(solution: &Solution, p: f64, phase: Phase, quantity: &str) {
    if solution.converged {
        trace!(
            pressure = p,
            ?phase,
            quantity,
            iters = solution.iters,
            "saturation solve converged"
        );
    } else {
        warn!(
            pressure = p,
            ?phase,
            quantity,
            residual = solution.residual,
            iters = solution.iters,
            "saturation solve did not converge"
        );
    }
}

/// A two-phase mixture of saturated liquid and vapour.
///
/// Every property is the linear interpolation between the saturated
/// endpoints at the vapour fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Mixture {
    liquid: SaturatedState,
    vapour: SaturatedState,
    vapour_fraction: f64,
}

impl Mixture {
    fn interpolate(&self, property: impl Fn(&SaturatedState) -> f64) -> f64 {
        let liquid = property(&self.liquid);
        liquid + (property(&self.vapour) - liquid) * self.vapour_fraction
    }

    pub(crate) fn vapour_fraction(&self) -> f64 {
        self.vapour_fraction
    }
}

impl Properties for Mixture {
    fn pressure(&self) -> f64 {
        self.liquid.pressure
    }

    fn temperature(&self) -> f64 {
        self.liquid.temperature
    }

    fn specific_volume(&self) -> f64 {
        self.interpolate(SaturatedState::specific_volume)
    }

    fn specific_enthalpy(&self) -> f64 {
        self.interpolate(SaturatedState::specific_enthalpy)
    }

    fn specific_entropy(&self) -> f64 {
        self.interpolate(SaturatedState::specific_entropy)
    }

    fn specific_internal_energy(&self) -> f64 {
        self.interpolate(SaturatedState::specific_internal_energy)
    }

    fn isobaric_heat_capacity(&self) -> f64 {
        self.interpolate(SaturatedState::isobaric_heat_capacity)
    }

    fn isochoric_heat_capacity(&self) -> f64 {
        self.interpolate(SaturatedState::isochoric_heat_capacity)
    }

    fn speed_of_sound(&self) -> f64 {
        self.interpolate(SaturatedState::speed_of_sound)
    }

    fn isobaric_cubic_expansion_coefficient(&self) -> f64 {
        self.interpolate(SaturatedState::isobaric_cubic_expansion_coefficient)
    }

    fn isothermal_compressibility(&self) -> f64 {
        self.interpolate(SaturatedState::isothermal_compressibility)
    }
}

/// Two-phase mixture at pressure `p` and vapour fraction `x`.
pub(crate) fn mixture_px(p: f64, x: f64) -> Result<Mixture, OutOfRange> {
    check_vapour_fraction(x)?;

    Ok(Mixture {
        liquid: saturated_p(p, Phase::Liquid)?,
        vapour: saturated_p(p, Phase::Vapour)?,
        vapour_fraction: x,
    })
}

/// Two-phase mixture at temperature `t` and vapour fraction `x`.
pub(crate) fn mixture_tx(t: f64, x: f64) -> Result<Mixture, OutOfRange> {
    check_vapour_fraction(x)?;
    mixture_px(saturation_pressure(t)?, x)
}

/// Position of `value` between its liquid and vapour endpoints, clamped to `[0, 1]`.
///
/// At the critical point the endpoints coincide and the fraction is 0 or 1.
fn fraction(value: f64, liquid: f64, vapour: f64) -> f64 {
    if vapour <= liquid {
        return if value < liquid { 0.0 } else { 1.0 };
    }
    ((value - liquid) / (vapour - liquid)).clamp(0.0, 1.0)
}

/// Two-phase mixture at pressure `p` whose enthalpy is `h`.
///
/// The endpoints are built once, so above ps13 each saturation solve runs a
/// single time.
pub(crate) fn mixture_ph(p: f64, h: f64) -> Result<Mixture, OutOfRange> {
    let liquid = saturated_p(p, Phase::Liquid)?;
    let vapour = saturated_p(p, Phase::Vapour)?;
    let vapour_fraction = fraction(h, liquid.specific_enthalpy, vapour.specific_enthalpy);

    Ok(Mixture {
        liquid,
        vapour,
        vapour_fraction,
    })
}

/// Two-phase mixture at pressure `p` whose entropy is `s`.
pub(crate) fn mixture_ps(p: f64, s: f64) -> Result<Mixture, OutOfRange> {
    let liquid = saturated_p(p, Phase::Liquid)?;
    let vapour = saturated_p(p, Phase::Vapour)?;
    let vapour_fraction = fraction(s, liquid.specific_entropy, vapour.specific_entropy);

    Ok(Mixture {
        liquid,
        vapour,
        vapour_fraction,
    })
}

/// Vapour fraction from pressure and specific enthalpy.
pub(crate) fn vapour_fraction_ph(p: f64, h: f64) -> Result<f64, OutOfRange> {
    Ok(mixture_ph(p, h)?.vapour_fraction)
}

/// Vapour fraction from pressure and specific entropy.
pub(crate) fn vapour_fraction_ps(p: f64, s: f64) -> Result<f64, OutOfRange> {
    Ok(mixture_ps(p, s)?.vapour_fraction)
}

/// Vapour fraction from temperature and specific entropy.
pub(crate) fn vapour_fraction_ts(t: f64, s: f64) -> Result<f64, OutOfRange> {
    vapour_fraction_ps(saturation_pressure(t)?, s)
}

/// Saturation temperature and pressure of a two-phase state given by `(h, s)`.
///
/// # Errors
///
/// Returns [`If97Error::Unsupported`] when the saturation temperature lies
/// above 623.15 K, where the liquid branch belongs to Region 3.
pub(crate) fn saturation_hs(h: f64, s: f64) -> Result<(f64, f64), If97Error> {
    let ts = region4::saturation_temperature_hs(h, s);

    if ts > T13 {
        return Err(If97Error::unsupported(
            "two-phase (h, s) states above 623.15 K",
        ));
    }
    check_temperature(ts)?;

    Ok((ts, region4::saturation_pressure(ts)))
}

/// Two-phase mixture from specific enthalpy and entropy.
///
/// The endpoints are the Region 1 and Region 2 states at the saturation
/// temperature given by the `T(h, s)` backward equation.
pub(crate) fn mixture_hs(h: f64, s: f64) -> Result<Mixture, If97Error> {
    let (ts, ps) = saturation_hs(h, s)?;

    let liquid = SaturatedState::from_state(SinglePhaseState::Gibbs(region1::state(ps, ts)));
    let vapour = SaturatedState::from_state(SinglePhaseState::Gibbs(region2::state(ps, ts)));
    let vapour_fraction = fraction(h, liquid.specific_enthalpy, vapour.specific_enthalpy);

    Ok(Mixture {
        liquid,
        vapour,
        vapour_fraction,
    })
}

/// Vapour fraction from specific enthalpy and entropy.
pub(crate) fn vapour_fraction_hs(h: f64, s: f64) -> Result<f64, If97Error> {
    Ok(mixture_hs(h, s)?.vapour_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn saturation_curve() -> Result<(), OutOfRange> {
        assert_relative_eq!(saturation_pressure(500.0)?, 2.638_897_76, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature(0.1)?, 372.755_919, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure(TC)?, PC);
        Ok(())
    }

    #[test]
    fn rejects_states_off_the_curve() {
        let error = saturation_temperature(25.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::Pressure);
        assert_relative_eq!(error.limit(), PC);

        let error = saturation_pressure(700.0).unwrap_err();
        assert_relative_eq!(error.limit(), TC);

        let error = mixture_px(1.0, 1.5).unwrap_err();
        assert_eq!(error.quantity(), Quantity::VapourFraction);
    }

    #[test]
    fn low_pressure_endpoints_come_from_regions_1_and_2() -> Result<(), OutOfRange> {
        let liquid = saturated_p(10.0, Phase::Liquid)?;
        let vapour = saturated_p(10.0, Phase::Vapour)?;

        assert_relative_eq!(liquid.specific_volume(), 0.001_452_62, max_relative = 1e-5);
        assert_relative_eq!(liquid.specific_enthalpy(), 1_407.87, max_relative = 1e-5);
        assert_relative_eq!(liquid.specific_entropy(), 3.360_29, max_relative = 1e-5);
        assert_relative_eq!(vapour.specific_enthalpy(), 2_725.47, max_relative = 1e-5);
        assert_relative_eq!(vapour.specific_entropy(), 5.615_89, max_relative = 1e-5);
        assert!(matches!(liquid.state(), SinglePhaseState::Gibbs(_)));
        Ok(())
    }

    #[test]
    fn near_critical_liquid() -> Result<(), OutOfRange> {
        // (p, h, s, v)
        let cases = [
            (20.0, 1_827.10, 4.015_38, 0.002_038_65),
            (20.5, 1_855.90, 4.058_8, 0.002_113_58),
            (21.0, 1_889.40, 4.109_26, 0.002_211_86),
            (21.5, 1_932.81, 4.174_9, 0.002_360_16),
            (22.0, 2_021.92, 4.310_9, 0.002_750_39),
        ];

        for (p, h, s, v) in cases {
            let liquid = saturated_p(p, Phase::Liquid)?;
            assert_relative_eq!(liquid.specific_enthalpy(), h, max_relative = 1e-5);
            assert_relative_eq!(liquid.specific_entropy(), s, max_relative = 1e-4);
            assert_relative_eq!(liquid.specific_volume(), v, max_relative = 1e-5);
            assert!(matches!(liquid.state(), SinglePhaseState::Helmholtz(_)));
        }
        Ok(())
    }

    #[test]
    fn near_critical_vapour() -> Result<(), OutOfRange> {
        let cases = [
            (17.0, 0.008_369_34),
            (20.0, 0.005_858_28),
            (20.5, 0.005_437_78),
            (21.0, 0.004_987_68),
            (21.5, 0.004_463_00),
            (22.0, 0.003_576_62),
        ];

        for (p, v) in cases {
            let vapour = saturated_p(p, Phase::Vapour)?;
            assert_relative_eq!(vapour.specific_volume(), v, max_relative = 1e-5);
        }

        let vapour = saturated_p(21.5, Phase::Vapour)?;
        assert_relative_eq!(vapour.specific_enthalpy(), 2_282.18, max_relative = 1e-5);
        assert_relative_eq!(vapour.specific_entropy(), 4.716_6, max_relative = 1e-4);
        Ok(())
    }

    #[test]
    fn saturated_pressure_matches_helmholtz_pressure() -> Result<(), OutOfRange> {
        let liquid = saturated_p(21.0, Phase::Liquid)?;
        assert_relative_eq!(liquid.state().pressure(), 21.0, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn critical_point() -> Result<(), OutOfRange> {
        let liquid = saturated_p(PC, Phase::Liquid)?;
        let vapour = saturated_t(TC, Phase::Vapour)?;

        assert_relative_eq!(liquid.specific_enthalpy(), HC);
        assert_relative_eq!(vapour.specific_volume(), 1.0 / RHOC);
        assert_relative_eq!(vapour.specific_entropy(), DERIVED.sc);
        Ok(())
    }

    #[test]
    fn mixtures_interpolate_linearly() -> Result<(), OutOfRange> {
        let cases = [
            (0.0, 1_827.100_5),
            (0.13, 1_903.057_9),
            (0.5, 2_119.244_3),
            (0.99, 2_405.545_1),
            (1.0, 2_411.388_0),
        ];
        for (x, h) in cases {
            assert_relative_eq!(mixture_px(20.0, x)?.specific_enthalpy(), h, max_relative = 1e-6);
        }

        let mixture = mixture_px(20.0, 0.5)?;
        assert_relative_eq!(mixture.specific_volume(), 0.003_948_47, max_relative = 1e-5);
        assert_relative_eq!(mixture.vapour_fraction(), 0.5);

        let liquid = mixture_tx(625.0, 0.0)?;
        assert_relative_eq!(liquid.specific_enthalpy(), 1_686.274_7, max_relative = 1e-5);
        Ok(())
    }

    #[test]
    fn vapour_fractions() -> Result<(), OutOfRange> {
        let cases = [
            (20.0, 1830.0, 0.004_962_39),
            (20.0, 2000.0, 0.295_915),
            (16.0, 2550.0, 0.966_917),
            (20.0, 2400.0, 0.980_510),
            (10.0, 2725.0, 0.999_641),
        ];
        for (p, h, x) in cases {
            assert_relative_eq!(vapour_fraction_ph(p, h)?, x, epsilon = 1e-5);
        }

        assert_relative_eq!(vapour_fraction_ps(5.0, 5.0)?, 0.681_062, epsilon = 1e-5);
        assert_relative_eq!(vapour_fraction_ps(10.0, 5.0)?, 0.726_951, epsilon = 1e-5);
        assert_relative_eq!(vapour_fraction_ps(20.0, 4.4)?, 0.420_567, epsilon = 1e-4);

        // Clamped outside the dome.
        assert_relative_eq!(vapour_fraction_ph(1.0, 100.0)?, 0.0);
        assert_relative_eq!(vapour_fraction_ph(1.0, 3500.0)?, 1.0);
        Ok(())
    }

    #[test]
    fn mixtures_from_enthalpy_and_entropy_match_quality_form() -> Result<(), OutOfRange> {
        let p = 20.0;

        let from_h = mixture_ph(p, 2_000.0)?;
        assert_eq!(from_h, mixture_px(p, vapour_fraction_ph(p, 2_000.0)?)?);
        assert_relative_eq!(from_h.specific_enthalpy(), 2_000.0, max_relative = 1e-12);

        let from_s = mixture_ps(p, 4.4)?;
        assert_eq!(from_s, mixture_px(p, vapour_fraction_ps(p, 4.4)?)?);
        assert_relative_eq!(from_s.specific_entropy(), 4.4, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn vapour_fraction_from_temperature() -> Result<(), OutOfRange> {
        let p = saturation_pressure(450.0)?;
        assert_relative_eq!(
            vapour_fraction_ts(450.0, 4.0)?,
            vapour_fraction_ps(p, 4.0)?,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn two_phase_hs() -> Result<(), If97Error> {
        let (ts, _) = saturation_hs(1800.0, 5.3)?;
        assert_relative_eq!(ts, 346.847_549_8, max_relative = 1e-8);

        let mixture = mixture_hs(2400.0, 6.0)?;
        assert_relative_eq!(mixture.temperature(), 425.137_33, max_relative = 1e-7);
        assert_relative_eq!(mixture.vapour_fraction(), 0.834_736, epsilon = 1e-6);
        assert_relative_eq!(mixture.specific_entropy(), 6.0, max_relative = 1e-6);

        assert!(matches!(
            saturation_hs(2200.0, 4.6),
            Err(If97Error::Unsupported { .. })
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn vapour_fraction_is_bounded(p in 0.01..22.0_f64, h in 0.0..4000.0_f64) {
            let x = vapour_fraction_ph(p, h).unwrap();
            prop_assert!((0.0..=1.0).contains(&x));
        }

        #[test]
        fn endpoints_have_vapour_fractions_0_and_1(p in 0.01..16.5_f64) {
            let liquid = saturated_p(p, Phase::Liquid).unwrap();
            let vapour = saturated_p(p, Phase::Vapour).unwrap();

            prop_assert_eq!(vapour_fraction_ph(p, liquid.specific_enthalpy()).unwrap(), 0.0);
            prop_assert_eq!(vapour_fraction_ph(p, vapour.specific_enthalpy()).unwrap(), 1.0);
        }
    }
}
