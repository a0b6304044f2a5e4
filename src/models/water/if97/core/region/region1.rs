//! Region 1: compressed liquid, from 273.15 K to 623.15 K above the saturation curve.

use super::{GibbsRegion, GibbsState, Region};
use crate::models::water::if97::core::polynomial::{self, Derivatives};

pub(crate) struct Region1;

impl GibbsRegion for Region1 {
    const REGION: Region = Region::Region1;
    const REDUCING_PRESSURE: f64 = 16.53;
    const REDUCING_TEMPERATURE: f64 = 1_386.0;

    fn gamma(&self, pi: f64, tau: f64) -> Derivatives {
        let d = polynomial::derivatives(&GIBBS, 7.1 - pi, tau - 1.222);

        // Chain rule through `7.1 − π`.
        Derivatives {
            dx: -d.dx,
            dxy: -d.dxy,
            ..d
        }
    }
}

/// Evaluates Region 1 at `(p, T)`.
pub(crate) fn state(p: f64, t: f64) -> GibbsState {
    Region1.state(p, t)
}

/// Backward equation `T(p, h)`.
pub(crate) fn temperature_ph(p: f64, h: f64) -> f64 {
    polynomial::evaluate(&TEMPERATURE_PH, p, h / 2500.0 + 1.0)
}

/// Backward equation `T(p, s)`.
pub(crate) fn temperature_ps(p: f64, s: f64) -> f64 {
    polynomial::evaluate(&TEMPERATURE_PS, p, s + 2.0)
}

/// Backward equation `p(h, s)`.
pub(crate) fn pressure_hs(h: f64, s: f64) -> f64 {
    100.0 * polynomial::evaluate(&PRESSURE_HS, h / 3400.0 + 0.05, s / 7.6 + 0.05)
}

/// Temperature from `(h, s)`, through `p(h, s)` and `T(p, h)`.
pub(crate) fn temperature_hs(h: f64, s: f64) -> f64 {
    temperature_ph(pressure_hs(h, s), h)
}

const GIBBS: [(i32, i32, f64); 34] = [
    (0, -2, 0.14632971213167),
    (0, -1, -0.84548187169114),
    (0, 0, -0.37563603672040e1),
    (0, 1, 0.33855169168385e1),
    (0, 2, -0.95791963387872),
    (0, 3, 0.15772038513228),
    (0, 4, -0.16616417199501e-1),
    (0, 5, 0.81214629983568e-3),
    (1, -9, 0.28319080123804e-3),
    (1, -7, -0.60706301565874e-3),
    (1, -1, -0.18990068218419e-1),
    (1, 0, -0.32529748770505e-1),
    (1, 1, -0.21841717175414e-1),
    (1, 3, -0.52838357969930e-4),
    (2, -3, -0.47184321073267e-3),
    (2, 0, -0.30001780793026e-3),
    (2, 1, 0.47661393906987e-4),
    (2, 3, -0.44141845330846e-5),
    (2, 17, -0.72694996297594e-15),
    (3, -4, -0.31679644845054e-4),
    (3, 0, -0.28270797985312e-5),
    (3, 6, -0.85205128120103e-9),
    (4, -5, -0.22425281908000e-5),
    (4, -2, -0.65171222895601e-6),
    (4, 10, -0.14341729937924e-12),
    (5, -8, -0.40516996860117e-6),
    (8, -11, -0.12734301741641e-8),
    (8, -6, -0.17424871230634e-9),
    (21, -29, -0.68762131295531e-18),
    (23, -31, 0.14478307828521e-19),
    (29, -38, 0.26335781662795e-22),
    (30, -39, -0.11947622640071e-22),
    (31, -40, 0.18228094581404e-23),
    (32, -41, -0.93537087292458e-25),
];

const TEMPERATURE_PH: [(i32, i32, f64); 20] = [
    (0, 0, -0.23872489924521e3),
    (0, 1, 0.40421188637945e3),
    (0, 2, 0.11349746881718e3),
    (0, 6, -0.58457616048039e1),
    (0, 22, -0.15285482413140e-3),
    (0, 32, -0.10866707695377e-5),
    (1, 0, -0.13391744872602e2),
    (1, 1, 0.43211039183559e2),
    (1, 2, -0.54010067170506e2),
    (1, 3, 0.30535892203916e2),
    (1, 4, -0.65964749423638e1),
    (1, 10, 0.93965400878363e-2),
    (1, 32, 0.11573647505340e-6),
    (2, 10, -0.25858641282073e-4),
    (2, 32, -0.40644363084799e-8),
    (3, 10, 0.66456186191635e-7),
    (3, 32, 0.80670734103027e-10),
    (4, 32, -0.93477771213947e-12),
    (5, 32, 0.58265442020601e-14),
    (6, 32, -0.15020185953503e-16),
];

const TEMPERATURE_PS: [(i32, i32, f64); 20] = [
    (0, 0, 0.17478268058307e3),
    (0, 1, 0.34806930892873e2),
    (0, 2, 0.65292584978455e1),
    (0, 3, 0.33039981775489),
    (0, 11, -0.19281382923196e-6),
    (0, 31, -0.24909197244573e-22),
    (1, 0, -0.26107636489332),
    (1, 1, 0.22592965981586),
    (1, 2, -0.64256463395226e-1),
    (1, 3, 0.78876289270526e-2),
    (1, 12, 0.35672110607366e-9),
    (1, 31, 0.17332496994895e-23),
    (2, 0, 0.56608900654837e-3),
    (2, 1, -0.32635483139717e-3),
    (2, 2, 0.44778286690632e-4),
    (2, 9, -0.51322156908507e-9),
    (2, 31, -0.42522657042207e-25),
    (3, 10, 0.26400441360689e-12),
    (3, 32, 0.78124600459723e-28),
    (4, 32, -0.30732199903668e-30),
];

const PRESSURE_HS: [(i32, i32, f64); 19] = [
    (0, 0, -0.691997014660582),
    (0, 1, -0.183612548787560e2),
    (0, 2, -0.928332409297335e1),
    (0, 4, 0.659639569909906e2),
    (0, 5, -0.162060388912024e2),
    (0, 6, 0.450620017338667e3),
    (0, 8, 0.854680678224170e3),
    (0, 14, 0.607523214001162e4),
    (1, 0, 0.326487682621856e2),
    (1, 1, -0.269408844582931e2),
    (1, 4, -0.319947848334300e3),
    (1, 6, -0.928354307043320e3),
    (2, 0, 0.303634537455249e2),
    (2, 1, -0.650540422444146e2),
    (2, 10, -0.430991316516130e4),
    (3, 4, -0.747512324096068e3),
    (4, 1, 0.730000345529245e3),
    (4, 4, 0.114284032569021e4),
    (5, 0, -0.436407041874559e3),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::water::if97::core::region::{Properties, region4};

    #[test]
    fn forward_equation() {
        let cases = [
            // p, T, v, h, u, s, cp, w
            (3.0, 300.0, 0.100_215_168e-2, 0.115_331_273e3, 0.112_324_818e3, 0.392_294_792, 0.417_301_218e1, 0.150_773_921e4),
            (80.0, 300.0, 0.971_180_894e-3, 0.184_142_828e3, 0.106_448_356e3, 0.368_563_852, 0.401_008_987e1, 0.163_469_054e4),
            (3.0, 500.0, 0.120_241_800e-2, 0.975_542_239e3, 0.971_934_985e3, 0.258_041_912e1, 0.465_580_682e1, 0.124_071_337e4),
        ];

        for (p, t, v, h, u, s, cp, w) in cases {
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
    fn expansion_and_compressibility_match_finite_differences() {
        let (p, t) = (3.0, 300.0);
        let state = state(p, t);
        let v = state.specific_volume();

        let dv_dt = (super::state(p, t + 1e-3).specific_volume()
            - super::state(p, t - 1e-3).specific_volume())
            / 2e-3;
        let dv_dp = (super::state(p + 1e-3, t).specific_volume()
            - super::state(p - 1e-3, t).specific_volume())
            / 2e-3;

        assert_relative_eq!(
            state.isobaric_cubic_expansion_coefficient(),
            dv_dt / v,
            max_relative = 1e-5
        );
        assert_relative_eq!(state.isothermal_compressibility(), -dv_dp / v, max_relative = 1e-5);
    }

    #[test]
    fn backward_temperature_ph() {
        assert_relative_eq!(temperature_ph(3.0, 500.0), 0.391_798_509e3, max_relative = 1e-8);
        assert_relative_eq!(temperature_ph(80.0, 500.0), 0.378_108_626e3, max_relative = 1e-8);
        assert_relative_eq!(temperature_ph(80.0, 1500.0), 0.611_041_229e3, max_relative = 1e-8);
    }

    #[test]
    fn backward_temperature_ps() {
        assert_relative_eq!(temperature_ps(3.0, 0.5), 0.307_842_258e3, max_relative = 1e-8);
        assert_relative_eq!(temperature_ps(80.0, 0.5), 0.309_979_785e3, max_relative = 1e-8);
        assert_relative_eq!(temperature_ps(80.0, 3.0), 0.565_899_909e3, max_relative = 1e-8);
    }

    #[test]
    fn backward_pressure_hs() {
        assert_relative_eq!(pressure_hs(0.001, 0.0), 0.000_980_098_061_2, max_relative = 1e-8);
        assert_relative_eq!(pressure_hs(90.0, 0.0), 91.929_547_27, max_relative = 1e-8);
        assert_relative_eq!(pressure_hs(1500.0, 3.4), 58.682_944_23, max_relative = 1e-8);
    }

    #[test]
    fn temperature_round_trips() {
        for (p, t) in [(1.0, 300.0), (20.0, 450.0), (60.0, 600.0)] {
            let state = state(p, t);
            let (h, s) = (state.specific_enthalpy(), state.specific_entropy());

            assert_relative_eq!(temperature_ph(p, h), t, epsilon = 0.03);
            assert_relative_eq!(temperature_ps(p, s), t, epsilon = 0.03);
        }
    }

    proptest! {
        #[test]
        fn backward_temperatures_stay_within_25_mk(t in 273.15_f64..623.15, f in 0.0_f64..1.0) {
            let ps = region4::saturation_pressure(t);
            let p = ps + f * (100.0 - ps);
            let state = state(p, t);

            prop_assert!((temperature_ph(p, state.specific_enthalpy()) - t).abs() < 0.025);
            prop_assert!((temperature_ps(p, state.specific_entropy()) - t).abs() < 0.025);
        }
    }
}
