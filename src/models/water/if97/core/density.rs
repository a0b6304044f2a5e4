//! States at density and temperature, across every region.
//!
//! Region 3 is explicit in `(ρ, T)`. The Gibbs regions are explicit in
//! `(p, T)`, so their pressure is found by bisection on the relative
//! density residual. Inside the saturation dome the state is a mixture at
//! the vapour fraction matching the volume.

mod problem;

use tracing::{trace, warn};
use twine_solvers::equation::bisection;

use crate::models::water::if97::{If97Error, Quantity, error::OutOfRange};

use super::{
    State,
    constants::{P_MAX, P5, R, T0, T13, T25, T5, TC},
    region::{
        GibbsState, Properties, SinglePhaseState,
        boundary::{pressure_b23, temperature_b23},
        region1, region2,
        region3::HelmholtzState,
        region5,
    },
    saturation::{self, Phase},
};

use problem::{DensityProblem, IsothermModel};

/// Bisection settings for the pressure solve.
///
/// A 100 MPa bracket narrows to the relative tolerance well inside the
/// iteration cap.
const BISECTION: bisection::Config = bisection::Config {
    max_iters: 200,
    x_abs_tol: 0.0,
    x_rel_tol: 1e-13,
    residual_tol: 1e-15,
};

/// Resolves `(ρ, T)` anywhere in the formulation.
///
/// # Errors
///
/// Fails if `ρ ≤ 0`, if `T` lies outside `[273.15, 2273.15]` K, or if the
/// density requires a pressure above the limit of its region.
pub(crate) fn state_from_density(rho: f64, t: f64) -> Result<State, If97Error> {
    if rho <= 0.0 {
        return Err(OutOfRange::new(Quantity::Density, rho, 0.0).into());
    }
    if t < T0 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T0).into());
    }
    if t > T5 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T5).into());
    }

    let v = 1.0 / rho;

    if t < TC {
        let liquid = saturation::saturated_t(t, Phase::Liquid)?;
        let vapour = saturation::saturated_t(t, Phase::Vapour)?;
        let (vl, vg) = (liquid.specific_volume(), vapour.specific_volume());

        if v > vl && v < vg {
            let x = (v - vl) / (vg - vl);
            return Ok(State::TwoPhase(saturation::mixture_tx(t, x)?));
        }

        let ps = liquid.pressure();
        if t <= T13 {
            let state = if v <= vl {
                solve_pressure(region1::state, rho, t, ps, P_MAX)?
            } else {
                solve_pressure(region2::state, rho, t, lower_bound(rho, t, ps), ps)?
            };
            return Ok(gibbs(state));
        }
    }

    if t <= temperature_b23(P_MAX) {
        let dense = HelmholtzState::new(rho, t);
        let p_b23 = pressure_b23(t);

        if dense.pressure() >= p_b23 {
            if dense.pressure() > P_MAX {
                return Err(OutOfRange::new(Quantity::Pressure, dense.pressure(), P_MAX).into());
            }
            return Ok(State::SinglePhase(SinglePhaseState::Helmholtz(dense)));
        }

        let state = solve_pressure(region2::state, rho, t, lower_bound(rho, t, p_b23), p_b23)?;
        return Ok(gibbs(state));
    }

    let state = if t <= T25 {
        solve_pressure(region2::state, rho, t, lower_bound(rho, t, P_MAX), P_MAX)?
    } else {
        solve_pressure(region5::state, rho, t, lower_bound(rho, t, P5), P5)?
    };
    Ok(gibbs(state))
}

fn gibbs(state: GibbsState) -> State {
    State::SinglePhase(SinglePhaseState::Gibbs(state))
}

/// A pressure below the root for vapour-like states.
///
/// The compression factor of steam stays well above 1/4, so a quarter of
/// the ideal-gas pressure always undershoots.
fn lower_bound(rho: f64, t: f64, p_max: f64) -> f64 {
    let ideal = 1e-3 * rho * R * t;
    0.25 * ideal.min(p_max)
}

/// Finds the pressure in `[lo, hi]` at which `state(p, t)` has density `rho`.
fn solve_pressure(
    state: fn(f64, f64) -> GibbsState,
    rho: f64,
    t: f64,
    lo: f64,
    hi: f64,
) -> Result<GibbsState, If97Error> {
    let model = IsothermModel::new(state, t);
    let problem = DensityProblem::new(rho);

    let densest = state(hi, t);
    if problem.residual(&densest) > 0.0 {
        return Err(OutOfRange::new(Quantity::Density, rho, densest.density()).into());
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lo, hi],
        &BISECTION,
        |_event: &bisection::Event<'_, _, _>| None,
    )
    .map_err(|error| If97Error::Solver {
        context: error.to_string(),
    })?;

    let resolved = solution.snapshot.output;
    if solution.status == bisection::Status::Converged {
        trace!(
            density = rho,
            temperature = t,
            pressure = resolved.pressure(),
            iters = solution.iters,
            "pressure from (ρ, T)"
        );
    } else {
        warn!(
            density = rho,
            temperature = t,
            residual = solution.residual,
            iters = solution.iters,
            "pressure solve from (ρ, T) did not converge"
        );
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::water::if97::core::{Region, region::region4};

    fn round_trip(state: GibbsState) -> Result<State, If97Error> {
        let resolved = state_from_density(state.density(), state.temperature())?;
        assert_relative_eq!(resolved.pressure(), state.pressure(), max_relative = 1e-7);
        Ok(resolved)
    }

    #[test]
    fn recovers_pressure_in_gibbs_regions() -> Result<(), If97Error> {
        assert_eq!(round_trip(region1::state(3.0, 300.0))?.region(), Region::Region1);
        assert_eq!(round_trip(region1::state(80.0, 500.0))?.region(), Region::Region1);
        assert_eq!(round_trip(region2::state(0.0035, 300.0))?.region(), Region::Region2);
        assert_eq!(round_trip(region2::state(15.0, 630.0))?.region(), Region::Region2);
        assert_eq!(round_trip(region2::state(20.0, 700.0))?.region(), Region::Region2);
        assert_eq!(round_trip(region2::state(60.0, 1000.0))?.region(), Region::Region2);
        assert_eq!(round_trip(region5::state(30.0, 1500.0))?.region(), Region::Region5);
        Ok(())
    }

    #[test]
    fn region_3_is_explicit() -> Result<(), If97Error> {
        let state = state_from_density(500.0, 650.0)?;
        assert_eq!(state.region(), Region::Region3);
        assert_relative_eq!(state.pressure(), 25.583_701_8, max_relative = 1e-8);
        Ok(())
    }

    #[test]
    fn two_phase_volume_gives_vapour_fraction() -> Result<(), If97Error> {
        let mixture = saturation::mixture_tx(450.0, 0.3)?;
        let state = state_from_density(1.0 / mixture.specific_volume(), 450.0)?;

        assert_eq!(state.region(), Region::Region4);
        assert_relative_eq!(state.vapour_fraction()?, 0.3, max_relative = 1e-9);
        assert_relative_eq!(state.pressure(), region4::saturation_pressure(450.0));
        Ok(())
    }

    #[test]
    fn rejects_states_beyond_the_pressure_limit() {
        let dense = region1::state(100.0, 300.0).density();
        assert!(matches!(
            state_from_density(dense + 5.0, 300.0),
            Err(If97Error::OutOfRange(error)) if error.quantity() == Quantity::Density
        ));
        assert!(state_from_density(0.0, 300.0).is_err());
        assert!(state_from_density(1.0, 2500.0).is_err());
    }
}
