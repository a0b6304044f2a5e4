//! Region 5: high-temperature vapour, from 1073.15 K to 2273.15 K up to 50 MPa.
//!
//! The formulation has no backward equations for this region, so `T(p, h)`
//! and `T(p, s)` are found by a bounded Ridders solve over the region's
//! temperature range.

use tracing::warn;

use super::{GibbsRegion, GibbsState, Properties, Region, with_ideal_gas_part};
use crate::models::water::if97::core::{
    constants::{T5, T25},
    polynomial::{self, Derivatives},
    solver::{SolverConfig, ridders},
};

pub(crate) struct Region5;

impl GibbsRegion for Region5 {
    const REGION: Region = Region::Region5;
    const REDUCING_PRESSURE: f64 = 1.0;
    const REDUCING_TEMPERATURE: f64 = 1_000.0;

    fn gamma(&self, pi: f64, tau: f64) -> Derivatives {
        let residual = polynomial::derivatives(&RESIDUAL, pi, tau);
        with_ideal_gas_part(&IDEAL, pi, tau, residual)
    }
}

/// Evaluates Region 5 at `(p, T)`.
pub(crate) fn state(p: f64, t: f64) -> GibbsState {
    Region5.state(p, t)
}

/// Temperature at which Region 5 reaches enthalpy `h` at pressure `p`.
pub(crate) fn temperature_ph(p: f64, h: f64) -> f64 {
    solve_temperature(|t| state(p, t).specific_enthalpy() - h, "T(p, h)")
}

/// Temperature at which Region 5 reaches entropy `s` at pressure `p`.
pub(crate) fn temperature_ps(p: f64, s: f64) -> f64 {
    solve_temperature(|t| state(p, t).specific_entropy() - s, "T(p, s)")
}

fn solve_temperature(residual: impl Fn(f64) -> f64, operation: &str) -> f64 {
    let solution = ridders(residual, T25, T5, &SolverConfig::default());

    if !solution.converged {
        warn!(
            operation,
            temperature = solution.x,
            residual = solution.residual,
            iters = solution.iters,
            "region 5 temperature solve did not converge"
        );
    }
    solution.x
}

const IDEAL: [(i32, f64); 6] = [
    (0, -0.131799836742010e2),
    (1, 0.685408416344340e1),
    (-3, -0.248051489334660e-1),
    (-2, 0.369015349803330),
    (-1, -0.311613182139250e1),
    (2, -0.329616265389170),
];

const RESIDUAL: [(i32, i32, f64); 6] = [
    (1, 1, 0.15736404855259e-2),
    (1, 2, 0.90153761673944e-3),
    (1, 3, -0.50270077677648e-2),
    (2, 3, 0.22440037409485e-5),
    (2, 9, -0.41163275453471e-5),
    (3, 7, 0.37919454822955e-7),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn forward_equation() {
        let cases = [
            // p, T, [v, h, u, s, cp, w]
            (
                0.5,
                1500.0,
                [0.138_455_090e1, 0.521_976_855e4, 0.452_749_310e4, 0.965_408_875e1, 0.261_609_445e1, 0.917_068_690e3],
            ),
            (
                30.0,
                1500.0,
                [0.230_761_299e-1, 0.516_723_514e4, 0.447_495_124e4, 0.772_970_133e1, 0.272_724_317e1, 0.928_548_002e3],
            ),
            (
                30.0,
                2000.0,
                [0.311_385_219e-1, 0.657_122_604e4, 0.563_707_038e4, 0.853_640_523e1, 0.288_569_882e1, 0.106_736_948e4],
            ),
        ];

        for (p, t, [v, h, u, s, cp, w]) in cases {
            let state = state(p, t);
            assert_relative_eq!(state.specific_volume(), v, max_relative = 1e-8);
            assert_relative_eq!(state.specific_enthalpy(), h, max_relative = 1e-8);
            assert_relative_eq!(state.specific_internal_energy(), u, max_relative = 1e-8);
            assert_relative_eq!(state.specific_entropy(), s, max_relative = 1e-8);
            assert_relative_eq!(state.isobaric_heat_capacity(), cp, max_relative = 1e-8);
            assert_relative_eq!(state.speed_of_sound(), w, max_relative = 1e-8);
        }
    }

    #[test]
    fn temperature_round_trips() {
        for (p, t) in [(0.5, 1500.0), (30.0, 1500.0), (30.0, 2000.0), (50.0, 1100.0)] {
            let state = state(p, t);

            assert_relative_eq!(temperature_ph(p, state.specific_enthalpy()), t, epsilon = 1e-6);
            assert_relative_eq!(temperature_ps(p, state.specific_entropy()), t, epsilon = 1e-6);
        }
    }

    proptest! {
        #[test]
        fn temperature_inverts_enthalpy_and_entropy(t in 1073.15_f64..2273.15, p in 0.01_f64..50.0) {
            let state = state(p, t);

            prop_assert!((temperature_ph(p, state.specific_enthalpy()) - t).abs() < 1e-5);
            prop_assert!((temperature_ps(p, state.specific_entropy()) - t).abs() < 1e-5);
        }
    }
}
