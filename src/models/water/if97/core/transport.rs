//! Transport and optical properties of water as functions of density and temperature.
//!
//! These correlations accompany the formulation but are not part of it:
//! viscosity follows the 1985 release, thermal conductivity the 1998
//! industrial form, and the dielectric constant and refractive index the
//! 1997 releases. Surface tension depends on temperature only.

use crate::models::water::if97::{Quantity, error::OutOfRange};

use super::{
    constants::{RHOC, T0, TC},
    polynomial::{self, Term},
    saturation,
};

/// Dynamic viscosity, Pa·s.
pub(crate) fn dynamic_viscosity(rho: f64, t: f64) -> f64 {
    let delta = rho / RHOC;
    let theta = t / TC;

    let psi0 = theta.sqrt()
        / VISCOSITY_DILUTE
            .iter()
            .zip(0..)
            .map(|(n, i)| n / theta.powi(i))
            .sum::<f64>();
    let psi1 = (delta * polynomial::evaluate(&VISCOSITY, delta - 1.0, 1.0 / theta - 1.0)).exp();

    psi0 * psi1 * 1e-6
}

/// Kinematic viscosity, m²/s.
pub(crate) fn kinematic_viscosity(rho: f64, t: f64) -> f64 {
    dynamic_viscosity(rho, t) / rho
}

/// Thermal conductivity, W/(m·K).
pub(crate) fn thermal_conductivity(rho: f64, t: f64) -> f64 {
    let [a0, a1, a2, a3] = CONDUCTIVITY_DILUTE;
    let [b0, b1, b2, b3, b4] = CONDUCTIVITY_DENSE;
    let [c0, c1, c2, c3, c4, c5, c6, c7, c8, c9] = CONDUCTIVITY_CRITICAL;

    let theta = t / 647.26;
    let delta = rho / 317.7;
    let d_theta = (theta - 1.0).abs() + c9;

    let lambda0 = theta.sqrt() * (a0 + theta * (a1 + theta * (a2 + theta * a3)));
    let lambda1 = b0 + b1 * delta + b2 * (b3 * (delta + b4).powi(2)).exp();

    let a = if theta < 1.0 {
        c8 / d_theta.powf(0.6)
    } else {
        1.0 / d_theta
    };
    let b = 2.0 + c7 * d_theta.powf(-0.6);

    let lambda2 = (c0 / theta.powi(10) + c1)
        * delta.powf(1.8)
        * (c2 * (1.0 - delta.powf(2.8))).exp()
        + c3 * a * delta.powf(b) * (b / (1.0 + b) * (1.0 - delta.powf(1.0 + b))).exp()
        + c4 * (c5 * theta.powf(1.5) + c6 / delta.powi(5)).exp();

    lambda0 + lambda1 + lambda2
}

/// Thermal diffusivity `λ/(ρ·cp)`, m²/s, with `cp` in kJ/(kg·K).
pub(crate) fn thermal_diffusivity(rho: f64, t: f64, cp: f64) -> f64 {
    thermal_conductivity(rho, t) / (rho * cp * 1e3)
}

/// Prandtl number `η·cp/λ`, with `cp` in kJ/(kg·K).
pub(crate) fn prandtl_number(rho: f64, t: f64, cp: f64) -> f64 {
    dynamic_viscosity(rho, t) * cp * 1e3 / thermal_conductivity(rho, t)
}

/// Surface tension of the liquid against its vapour, N/m.
///
/// # Errors
///
/// Fails if `t` lies outside the saturation temperature range.
pub(crate) fn surface_tension(t: f64) -> Result<f64, OutOfRange> {
    saturation::check_temperature(t)?;

    let tau = 1.0 - t / TC;
    Ok(235.8e-3 * tau.powf(1.256) * (1.0 - 0.625 * tau))
}

/// Static dielectric constant, valid from 238.15 K to 873.15 K.
pub(crate) fn dielectric_constant(rho: f64, t: f64) -> Result<f64, OutOfRange> {
    const BOLTZMANN: f64 = 1.380_658e-23;
    const AVOGADRO: f64 = 6.022_136_7e23;
    const POLARIZABILITY: f64 = 1.636e-40;
    const PERMITTIVITY: f64 = 8.854_187_817e-12;
    const DIPOLE_MOMENT: f64 = 6.138e-30;
    const MOLAR_MASS: f64 = 0.018_015_268;

    check_bounds(Quantity::Temperature, t, 238.15, 873.15)?;

    let delta = rho / RHOC;
    let tau = TC / t;

    let g = 1.0
        + 0.196_096_504_426e-2 * delta * (t / 228.0 - 1.0).powf(-1.2)
        + DIELECTRIC
            .iter()
            .map(|&(i, j, n)| n * delta.powi(i) * tau.powf(j))
            .sum::<f64>();

    let a = AVOGADRO * DIPOLE_MOMENT * DIPOLE_MOMENT * rho * g
        / (MOLAR_MASS * PERMITTIVITY * BOLTZMANN * t);
    let b = AVOGADRO * POLARIZABILITY * rho / (3.0 * MOLAR_MASS * PERMITTIVITY);

    let root = (9.0 + 2.0 * a + 18.0 * b + a * a + 10.0 * a * b + 9.0 * b * b).sqrt();
    Ok((1.0 + a + 5.0 * b + root) / (4.0 * (1.0 - b)))
}

/// Refractive index at wavelength `lambda` in μm.
///
/// # Errors
///
/// Fails outside 261.15–773.15 K, 0–1060 kg/m³ (zero excluded) or 0.2–1.1 μm.
pub(crate) fn refractive_index(rho: f64, t: f64, lambda: f64) -> Result<f64, OutOfRange> {
    const UV: f64 = 0.229_202;
    const IR: f64 = 5.432_937;

    check_bounds(Quantity::Temperature, t, 261.15, 773.15)?;
    if rho <= 0.0 {
        return Err(OutOfRange::new(Quantity::Density, rho, 0.0));
    }
    check_bounds(Quantity::Density, rho, 0.0, 1060.0)?;
    check_bounds(Quantity::Wavelength, lambda, 0.2, 1.1)?;

    let [a0, a1, a2, a3, a4, a5, a6, a7] = REFRACTIVE;

    let delta = rho / 1e3;
    let theta = t / T0;
    let l2 = (lambda / 0.589).powi(2);

    let a = delta
        * (a0
            + a1 * delta
            + a2 * theta
            + a3 * l2 * theta
            + a4 / l2
            + a5 / (l2 - UV * UV)
            + a6 / (l2 - IR * IR)
            + a7 * delta * delta);

    Ok(((2.0 * a + 1.0) / (1.0 - a)).sqrt())
}

fn check_bounds(quantity: Quantity, value: f64, lower: f64, upper: f64) -> Result<(), OutOfRange> {
    if value < lower {
        Err(OutOfRange::new(quantity, value, lower))
    } else if value > upper {
        Err(OutOfRange::new(quantity, value, upper))
    } else {
        Ok(())
    }
}

const VISCOSITY_DILUTE: [f64; 4] = [0.167_752e-1, 0.220_462e-1, 0.636_656_4e-2, -0.241_605e-2];

const VISCOSITY: [Term; 21] = [
    (0, 0, 0.520_094),
    (0, 1, 0.850_895e-1),
    (0, 2, -0.108_374e1),
    (0, 3, -0.289_555),
    (1, 0, 0.222_531),
    (1, 1, 0.999_115),
    (1, 2, 0.188_797e1),
    (1, 3, 0.126_613e1),
    (1, 5, 0.120_573),
    (2, 0, -0.281_378),
    (2, 1, -0.906_851),
    (2, 2, -0.772_479),
    (2, 3, -0.489_837),
    (2, 4, -0.257_040),
    (3, 0, 0.161_913),
    (3, 1, 0.257_399),
    (4, 0, -0.325_372e-1),
    (4, 3, 0.698_452e-1),
    (5, 4, 0.872_102e-2),
    (6, 3, -0.435_673e-2),
    (6, 5, -0.593_264e-3),
];

const CONDUCTIVITY_DILUTE: [f64; 4] = [0.102_811e-1, 0.299_621e-1, 0.156_146e-1, -0.422_464e-2];

const CONDUCTIVITY_DENSE: [f64; 5] = [-0.397_070, 0.400_302, 0.106_000e1, -0.171_587, 0.239_219e1];

const CONDUCTIVITY_CRITICAL: [f64; 10] = [
    0.701_309e-1,
    0.118_520e-1,
    0.642_857,
    0.169_937e-2,
    -0.102_000e1,
    -0.411_717e1,
    -0.617_937e1,
    0.822_994e-1,
    0.100_932e2,
    0.308_976e-2,
];

/// `(I, J, n)` with fractional `J`.
const DIELECTRIC: [(i32, f64, f64); 11] = [
    (1, 0.25, 0.978_224_486_826),
    (1, 1.0, -0.957_771_379_375),
    (1, 2.5, 0.237_511_794_148),
    (2, 1.5, 0.714_692_244_396),
    (3, 1.5, -0.298_217_036_956),
    (3, 2.5, -0.108_863_472_196),
    (4, 2.0, 0.949_327_488_264e-1),
    (5, 2.0, -0.980_469_816_509e-2),
    (6, 5.0, 0.165_167_634_970e-4),
    (7, 0.5, 0.937_359_795_772e-4),
    (10, 10.0, -0.123_179_218_720e-9),
];

const REFRACTIVE: [f64; 8] = [
    0.244_257_733,
    0.974_634_476e-2,
    -0.373_234_996e-2,
    0.268_678_472e-3,
    0.158_920_570e-2,
    0.245_934_259e-2,
    0.900_704_920,
    -0.166_626_219e-1,
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::water::if97::core::region::{
        Properties, region1, region2, region3::specific_volume_pt,
    };

    fn liquid_density(p: f64, t: f64) -> f64 {
        region1::state(p, t).density()
    }

    fn dense_density(p: f64, t: f64) -> f64 {
        1.0 / specific_volume_pt(p, t).unwrap()
    }

    #[test]
    fn viscosity() {
        let cases = [
            (liquid_density(0.1, 298.15), 298.15, 0.890_022_551e-3),
            (region2::state(20.0, 873.15).density(), 873.15, 0.339_743_835e-4),
            (dense_density(60.0, 673.15), 673.15, 0.726_093_560e-4),
        ];

        for (rho, t, expected) in cases {
            assert_relative_eq!(dynamic_viscosity(rho, t), expected, max_relative = 1e-7);
        }

        let rho = liquid_density(0.1, 298.15);
        assert_relative_eq!(kinematic_viscosity(rho, 298.15), 8.926_58e-7, max_relative = 1e-5);
    }

    #[test]
    fn conductivity() {
        let rho = liquid_density(0.1, 298.15);
        assert_relative_eq!(thermal_conductivity(rho, 298.15), 0.607_509_806, epsilon = 1e-6);

        let rho = dense_density(40.0, 673.15);
        assert_relative_eq!(thermal_conductivity(rho, 673.15), 0.398_506_911, epsilon = 1e-6);
    }

    #[test]
    fn dimensionless_groups() {
        let state = region1::state(0.1, 298.15);
        let (rho, cp) = (state.density(), state.isobaric_heat_capacity());

        assert_relative_eq!(prandtl_number(rho, 298.15, cp), 6.126_63, max_relative = 1e-5);
        assert_relative_eq!(thermal_diffusivity(rho, 298.15, cp), 1.457_01e-7, max_relative = 1e-5);
    }

    #[test]
    fn surface_tension_follows_saturation_range() {
        let cases = [
            (300.0, 0.071_685_962_5),
            (450.0, 0.042_891_499_2),
            (600.0, 0.008_375_610_87),
        ];
        for (t, sigma) in cases {
            assert_relative_eq!(surface_tension(t).unwrap(), sigma, epsilon = 1e-10);
        }

        assert_relative_eq!(surface_tension(TC).unwrap(), 0.0);
        assert_eq!(surface_tension(700.0).unwrap_err().quantity(), Quantity::Temperature);
    }

    #[test]
    fn dielectric() -> Result<(), OutOfRange> {
        let rho = liquid_density(5.0, 298.15);
        assert_relative_eq!(dielectric_constant(rho, 298.15)?, 0.785_907_250e2, epsilon = 1e-4);

        let rho = dense_density(40.0, 673.15);
        assert_relative_eq!(dielectric_constant(rho, 673.15)?, 0.103_126_058e2, epsilon = 1e-4);

        let error = dielectric_constant(1000.0, 900.0).unwrap_err();
        assert_relative_eq!(error.limit(), 873.15);
        Ok(())
    }

    #[test]
    fn refraction() -> Result<(), OutOfRange> {
        let rho = liquid_density(0.1, 298.15);
        assert_relative_eq!(refractive_index(rho, 298.15, 0.2265)?, 0.139_277_824e1, epsilon = 1e-6);
        assert_relative_eq!(refractive_index(rho, 298.15, 0.5893)?, 0.133_285_819e1, epsilon = 1e-6);

        let rho = dense_density(40.0, 673.15);
        assert_relative_eq!(refractive_index(rho, 673.15, 0.2265)?, 0.119_757_252e1, epsilon = 1e-6);
        assert_relative_eq!(refractive_index(rho, 673.15, 0.5893)?, 0.116_968_699e1, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn refraction_bounds() {
        let error = refractive_index(1000.0, 300.0, 1.5).unwrap_err();
        assert_eq!(error.quantity(), Quantity::Wavelength);

        let error = refractive_index(0.0, 300.0, 0.5).unwrap_err();
        assert_eq!(error.quantity(), Quantity::Density);
        assert_relative_eq!(error.limit(), 0.0);

        let error = refractive_index(1100.0, 300.0, 0.5).unwrap_err();
        assert_relative_eq!(error.limit(), 1060.0);
    }
}
