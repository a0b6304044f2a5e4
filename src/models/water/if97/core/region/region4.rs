//! Region 4: the saturation curve.
//!
//! These are the unchecked correlations. Range checks and the saturated
//! liquid and vapour states live in the `saturation` module.

use crate::models::water::if97::core::polynomial;

const N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// Saturation pressure at temperature `t`.
pub(crate) fn saturation_pressure(t: f64) -> f64 {
    let theta = t + N[8] / (t - N[9]);

    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];

    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature at pressure `p`.
pub(crate) fn saturation_temperature(p: f64) -> f64 {
    let beta = p.powf(0.25);

    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());

    let x = N[9] + d;
    (x - (x * x - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}

/// Saturation pressure on the Region 3/4 boundary as a function of enthalpy.
pub(crate) fn saturation_pressure_h(h: f64) -> f64 {
    let eta = h / 2600.0;
    22.0 * polynomial::evaluate(&PRESSURE_B34H, eta - 1.02, eta - 0.608)
}

/// Saturation pressure on the Region 3/4 boundary as a function of entropy.
pub(crate) fn saturation_pressure_s(s: f64) -> f64 {
    let sigma = s / 5.2;
    22.0 * polynomial::evaluate(&PRESSURE_B34S, sigma - 1.03, sigma - 0.699)
}

/// Saturation temperature from `(h, s)` in the two-phase region.
pub(crate) fn saturation_temperature_hs(h: f64, s: f64) -> f64 {
    550.0 * polynomial::evaluate(&TEMPERATURE_HS, h / 2800.0 - 0.119, s / 9.2 - 1.07)
}

const PRESSURE_B34H: [(i32, i32, f64); 14] = [
    (0, 0, 0.600073641753024),
    (1, 1, -0.936203654849857e1),
    (1, 3, 0.246590798594147e2),
    (1, 4, -0.107014222858224e3),
    (1, 36, -0.915821315805768e14),
    (5, 3, -0.862332011700662e4),
    (7, 0, -0.235837344740032e2),
    (8, 24, 0.252304969384128e18),
    (14, 16, -0.389718771997719e19),
    (20, 16, -0.333775713645296e23),
    (22, 3, 0.356499469636328e11),
    (24, 18, -0.148547544720641e27),
    (28, 8, 0.330611514838798e19),
    (36, 24, 0.813641294467829e38),
];

const PRESSURE_B34S: [(i32, i32, f64); 10] = [
    (0, 0, 0.639767553612785),
    (1, 1, -0.129727445396014e2),
    (1, 32, -0.224595125848403e16),
    (4, 7, 0.177466741801846e7),
    (12, 4, 0.717079349571538e10),
    (12, 14, -0.378829107169011e18),
    (16, 36, -0.955586736431328e35),
    (24, 10, 0.187269814676188e24),
    (28, 0, 0.119254746466473e12),
    (32, 18, 0.110649277244882e37),
];

const TEMPERATURE_HS: [(i32, i32, f64); 36] = [
    (0, 0, 0.179882673606601),
    (0, 3, -0.267507455199603),
    (0, 12, 0.116276722612600e1),
    (1, 0, 0.147545428713616),
    (1, 1, -0.512871635973248),
    (1, 2, 0.421333567697984),
    (1, 5, 0.563749522189870),
    (2, 0, 0.429274443819153),
    (2, 5, -0.335704552142140e1),
    (2, 8, 0.108890916499278e2),
    (3, 0, -0.248483390456012),
    (3, 2, 0.304153221906390),
    (3, 3, -0.494819763939905),
    (3, 4, 0.107551674933261e1),
    (4, 0, 0.733888415457688e-1),
    (4, 1, 0.140170545411085e-1),
    (5, 1, -0.106110975998808),
    (5, 2, 0.168324361811875e-1),
    (5, 4, 0.125028363714877e1),
    (5, 16, 0.101316840309509e4),
    (6, 6, -0.151791558000712e1),
    (6, 8, 0.524277865990866e2),
    (6, 22, 0.230495545563912e5),
    (8, 1, 0.249459806365456e-1),
    (10, 20, 0.210796467412137e7),
    (10, 36, 0.366836848613065e9),
    (12, 24, -0.144814105365163e9),
    (14, 1, -0.179276373003590e-2),
    (14, 28, 0.489955602100459e10),
    (16, 12, 0.471262212070518e3),
    (16, 32, -0.829294390198652e11),
    (18, 14, -0.171545662263191e4),
    (18, 22, 0.355777682973575e7),
    (18, 36, 0.586062760258436e12),
    (20, 24, -0.129887635078195e8),
    (28, 36, 0.317247449371057e11),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn saturation_pressure_at_temperature() {
        assert_relative_eq!(saturation_pressure(300.0), 0.353_658_941e-2, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure(500.0), 0.263_889_776e1, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure(600.0), 0.123_443_146e2, max_relative = 1e-8);
    }

    #[test]
    fn saturation_temperature_at_pressure() {
        assert_relative_eq!(saturation_temperature(0.1), 0.372_755_919e3, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature(1.0), 0.453_035_632e3, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature(10.0), 0.584_149_488e3, max_relative = 1e-8);
    }

    #[test]
    fn region_3_boundary_pressures() {
        assert_relative_eq!(saturation_pressure_h(1700.0), 17.241_757_18, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure_h(2000.0), 21.934_429_57, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure_h(2400.0), 20.180_908_39, max_relative = 1e-8);

        assert_relative_eq!(saturation_pressure_s(3.8), 16.877_550_57, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure_s(4.2), 21.644_517_89, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure_s(5.2), 16.689_684_82, max_relative = 1e-8);
    }

    #[test]
    fn saturation_temperature_from_enthalpy_and_entropy() {
        assert_relative_eq!(saturation_temperature_hs(1800.0, 5.3), 346.847_549_8, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature_hs(2400.0, 6.0), 425.137_330_5, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature_hs(2500.0, 5.5), 522.557_901_3, max_relative = 1e-8);
    }

    proptest! {
        #[test]
        fn saturation_temperature_inverts_pressure(t in 273.15_f64..647.096) {
            let back = saturation_temperature(saturation_pressure(t));
            prop_assert!((back - t).abs() < 1e-6);
        }

        #[test]
        fn saturation_pressure_is_increasing(t in 273.15_f64..647.0, dt in 1e-3_f64..1.0) {
            prop_assert!(saturation_pressure(t + dt.min(647.096 - t)) > saturation_pressure(t));
        }
    }
}
