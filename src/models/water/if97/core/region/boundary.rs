//! Auxiliary boundary curves between regions.
//!
//! The B23 curve separates Regions 2 and 3 in `(p, T)`. The remaining
//! curves bound the regions in the `(h, s)` plane and are used only by the
//! `(h, s)` region selector.

use crate::models::water::if97::core::polynomial;

const B23: [f64; 5] = [
    0.348_051_856_289_69e3,
    -0.116_718_598_799_75e1,
    0.101_929_700_393_26e-2,
    0.572_544_598_627_46e3,
    0.139_188_397_788_70e2,
];

/// Pressure on the B23 boundary at temperature `t`.
pub(crate) fn pressure_b23(t: f64) -> f64 {
    B23[0] + B23[1] * t + B23[2] * t * t
}

/// Temperature on the B23 boundary at pressure `p`.
pub(crate) fn temperature_b23(p: f64) -> f64 {
    B23[3] + ((p - B23[4]) / B23[2]).sqrt()
}

/// Temperature on the B23 boundary as a function of `(h, s)`.
pub(crate) fn temperature_b23_hs(h: f64, s: f64) -> f64 {
    900.0 * polynomial::evaluate(&TEMPERATURE_B23, h / 3000.0 - 0.727, s / 5.3 - 0.864)
}

/// Saturated-liquid enthalpy `h'₁(s)` on the Region 1 side of the saturation curve.
pub(crate) fn enthalpy_1(s: f64) -> f64 {
    let sigma = s / 3.8;
    1700.0 * polynomial::evaluate(&ENTHALPY_1, sigma - 1.09, sigma + 0.366e-4)
}

/// Saturated-liquid enthalpy `h'₃ₐ(s)` on the Region 3 side of the saturation curve.
pub(crate) fn enthalpy_3a(s: f64) -> f64 {
    let sigma = s / 3.8;
    1700.0 * polynomial::evaluate(&ENTHALPY_3A, sigma - 1.09, sigma + 0.366e-4)
}

/// Saturated-vapour enthalpy `h''₂ₐᵦ(s)` for subregions 2a and 2b.
pub(crate) fn enthalpy_2ab(s: f64) -> f64 {
    2800.0 * polynomial::evaluate(&ENTHALPY_2AB, 5.21 / s - 0.513, s / 9.2 - 0.524).exp()
}

/// Saturated-vapour enthalpy `h''₂c₃b(s)` for subregions 2c and 3b.
pub(crate) fn enthalpy_2c3b(s: f64) -> f64 {
    let sigma = s / 5.9;
    2800.0 * polynomial::evaluate(&ENTHALPY_2C3B, sigma - 1.02, sigma - 0.726).powi(4)
}

/// Enthalpy on the B13 boundary between Regions 1 and 3.
pub(crate) fn enthalpy_b13(s: f64) -> f64 {
    let sigma = s / 3.8;
    1700.0 * polynomial::evaluate(&ENTHALPY_B13, sigma - 0.884, sigma - 0.864)
}

const ENTHALPY_1: [(i32, i32, f64); 27] = [
    (0, 14, 0.332171191705237),
    (0, 36, 0.611217706323496e-3),
    (1, 3, -0.882092478906822e1),
    (1, 16, -0.455628192543250),
    (2, 0, -0.263483840850452e-4),
    (2, 5, -0.223949661148062e2),
    (3, 4, -0.428398660164013e1),
    (3, 36, -0.616679338856916),
    (4, 4, -0.146823031104040e2),
    (4, 16, 0.284523138727299e3),
    (4, 24, -0.113398503195444e3),
    (5, 18, 0.115671380760859e4),
    (5, 24, 0.395551267359325e3),
    (7, 1, -0.154891257229285e1),
    (8, 4, 0.194486637751291e2),
    (12, 2, -0.357915139457043e1),
    (12, 4, -0.335369414148819e1),
    (14, 1, -0.664426796332460),
    (14, 22, 0.323321885383934e5),
    (16, 10, 0.331766744667084e4),
    (20, 12, -0.223501257931087e5),
    (20, 28, 0.573953875852936e7),
    (22, 8, 0.173226193407919e3),
    (24, 3, -0.363968822121321e-1),
    (28, 0, 0.834596332878346e-6),
    (32, 6, 0.503611916682674e1),
    (32, 8, 0.655444787064505e2),
];

const ENTHALPY_2AB: [(i32, i32, f64); 30] = [
    (1, 8, -0.524581170928788e3),
    (1, 24, -0.926947218142218e7),
    (2, 4, -0.237385107491666e3),
    (2, 32, 0.210770155812776e11),
    (4, 1, -0.239494562010986e2),
    (4, 2, 0.221802480294197e3),
    (7, 7, -0.510472533393438e7),
    (8, 5, 0.124981396109147e7),
    (8, 12, 0.200008436996201e10),
    (10, 1, -0.815158509791035e3),
    (12, 0, -0.157612685637523e3),
    (12, 7, -0.114200422332791e11),
    (18, 10, 0.662364680776872e16),
    (20, 12, -0.227622818296144e19),
    (24, 32, -0.171048081348406e32),
    (28, 8, 0.660788766938091e16),
    (28, 12, 0.166320055886021e23),
    (28, 20, -0.218003784381501e30),
    (28, 22, -0.787276140295618e30),
    (28, 24, 0.151062329700346e32),
    (32, 2, 0.795732170300541e7),
    (32, 7, 0.131957647355347e16),
    (32, 12, -0.325097068299140e24),
    (32, 14, -0.418600611419248e26),
    (32, 24, 0.297478906557467e35),
    (36, 10, -0.953588761745473e20),
    (36, 12, 0.166957699620939e25),
    (36, 20, -0.175407764869978e33),
    (36, 22, 0.347581490626396e35),
    (36, 28, -0.710971318427851e39),
];

const ENTHALPY_2C3B: [(i32, i32, f64); 16] = [
    (0, 0, 0.104351280732769e1),
    (0, 3, -0.227807912708513e1),
    (0, 4, 0.180535256723202e1),
    (1, 0, 0.420440834792042),
    (1, 12, -0.105721244834660e6),
    (5, 36, 0.436911607493884e25),
    (6, 12, -0.328032702839753e12),
    (7, 16, -0.678686760804270e16),
    (8, 2, 0.743957464645363e4),
    (8, 20, -0.356896445355761e20),
    (12, 32, 0.167590585186801e32),
    (16, 36, -0.355028625419105e38),
    (22, 2, 0.396611982166538e12),
    (22, 32, -0.414716268484468e41),
    (24, 7, 0.359080103867382e19),
    (36, 20, -0.116994334851995e41),
];

const ENTHALPY_3A: [(i32, i32, f64); 19] = [
    (0, 1, 0.822673364673336),
    (0, 4, 0.181977213534479),
    (0, 10, -0.112000260313624e-1),
    (0, 16, -0.746778287048033e-3),
    (2, 1, -0.179046263257381),
    (3, 36, 0.424220110836657e-1),
    (4, 3, -0.341355823438768),
    (4, 16, -0.209881740853565e1),
    (5, 20, -0.822477343323596e1),
    (5, 36, -0.499684082076008e1),
    (6, 4, 0.191413958471069),
    (7, 2, 0.581062241093136e-1),
    (7, 28, -0.165505498701029e4),
    (7, 32, 0.158870443421201e4),
    (10, 14, -0.850623535172818e2),
    (10, 32, -0.317714386511207e5),
    (10, 36, -0.945890406632871e5),
    (32, 0, -0.139273847088690e-5),
    (32, 6, 0.631052532240980),
];

const ENTHALPY_B13: [(i32, i32, f64); 6] = [
    (0, 0, 0.913965547600543),
    (1, -2, -0.430944856041991e-4),
    (1, 2, 0.603235694765419e2),
    (3, -12, 0.117518273082168e-17),
    (5, -4, 0.220000904781292),
    (6, -3, -0.690815545851641e2),
];

const TEMPERATURE_B23: [(i32, i32, f64); 25] = [
    (-12, 10, 0.629096260829810e-3),
    (-10, 8, -0.823453502583165e-3),
    (-8, 3, 0.515446951519474e-7),
    (-4, 4, -0.117565945784945e1),
    (-3, 3, 0.348519684726192e1),
    (-2, -6, -0.507837382408313e-11),
    (-2, 2, -0.284637670005479e1),
    (-2, 3, -0.236092263939673e1),
    (-2, 4, 0.601492324973779e1),
    (0, 0, 0.148039650824546e1),
    (1, -3, 0.360075182221907e-3),
    (1, -2, -0.126700045009952e-1),
    (1, 10, -0.122184332521413e7),
    (3, -2, 0.149276502463272),
    (3, -1, 0.698733471798484),
    (5, -5, -0.252207040114321e-1),
    (6, -6, 0.147151930985213e-1),
    (6, -3, -0.108618917681849e1),
    (8, -8, -0.936875039816322e-3),
    (8, -2, 0.819877897570217e2),
    (8, -1, -0.182041861521835e3),
    (12, -12, 0.261907376402688e-5),
    (12, -1, -0.291626417025961e5),
    (14, -12, 0.140660774926165e-4),
    (14, 1, 0.783237062349385e7),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn b23_curve() {
        assert_relative_eq!(pressure_b23(0.623_15e3), 0.165_291_643e2, max_relative = 1e-9);
        assert_relative_eq!(temperature_b23(0.165_291_643e2), 0.623_15e3, max_relative = 1e-9);
    }

    #[test]
    fn b23_curve_in_hs() {
        assert_relative_eq!(temperature_b23_hs(2600.0, 5.1), 713.525_936_4, max_relative = 1e-8);
        assert_relative_eq!(temperature_b23_hs(2700.0, 5.15), 768.534_553_2, max_relative = 1e-8);
        assert_relative_eq!(temperature_b23_hs(2800.0, 5.2), 817.620_212_0, max_relative = 1e-8);
    }

    #[test]
    fn saturated_liquid_enthalpies() {
        assert_relative_eq!(enthalpy_1(1.0), 308.550_964_7, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_1(2.0), 700.630_447_2, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_1(3.0), 1198.359_754, max_relative = 1e-8);

        assert_relative_eq!(enthalpy_3a(3.8), 1685.025_565, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_3a(4.0), 1816.891_476, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_3a(4.2), 1949.352_563, max_relative = 1e-8);
    }

    #[test]
    fn saturated_vapour_enthalpies() {
        assert_relative_eq!(enthalpy_2ab(7.0), 2723.729_985, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_2ab(8.0), 2599.047_210, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_2ab(9.0), 2511.861_477, max_relative = 1e-8);

        assert_relative_eq!(enthalpy_2c3b(5.5), 2687.693_850, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_2c3b(5.0), 2451.623_609, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_2c3b(4.5), 2144.360_448, max_relative = 1e-8);
    }

    #[test]
    fn b13_curve() {
        assert_relative_eq!(enthalpy_b13(3.7), 1632.525_047, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_b13(3.6), 1593.027_214, max_relative = 1e-8);
        assert_relative_eq!(enthalpy_b13(3.5), 1566.104_611, max_relative = 1e-8);
    }
}
