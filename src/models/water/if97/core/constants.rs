//! Published IF97 constants, and the cross-region constants derived from them.
//!
//! The derived constants depend on the region equations evaluated on the
//! saturation curve, so they are built once, on first use, in a single pass
//! that only calls equations free of derived constants.

use std::sync::LazyLock;

use super::region::{Properties, region1, region2, region3, region4};

/// Specific gas constant of water, kJ/(kg·K).
pub(crate) const R: f64 = 0.461_526;

/// Critical pressure, MPa.
pub(crate) const PC: f64 = 22.064;
/// Critical temperature, K.
pub(crate) const TC: f64 = 647.096;
/// Critical density, kg/m³.
pub(crate) const RHOC: f64 = 322.0;
/// Critical specific enthalpy, kJ/kg.
pub(crate) const HC: f64 = 2_087.546_845;

/// Triple-point-adjacent lower temperature bound, K.
pub(crate) const T0: f64 = 273.15;
/// Temperature on the Region 1/3 boundary, K.
pub(crate) const T13: f64 = 623.15;
/// Temperature on the Region 2/5 boundary, K.
pub(crate) const T25: f64 = 1_073.15;
/// Upper temperature bound of Region 5, K.
pub(crate) const T5: f64 = 2_273.15;
/// Temperature whose saturation pressure bounds the near-critical Region 3 subregions, K.
pub(crate) const T643: f64 = 643.15;

/// Upper pressure bound of Region 5, MPa.
pub(crate) const P5: f64 = 50.0;
/// Upper pressure bound of Regions 1, 2 and 3, MPa.
pub(crate) const P_MAX: f64 = 100.0;

/// Entropy on the Region 2b/2c boundary, kJ/(kg·K).
pub(crate) const S2BC: f64 = 5.85;

/// Constants that depend on the region equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Derived {
    /// Saturation pressure at `T0`.
    pub(crate) p0: f64,
    /// Saturation pressure at `T13`.
    pub(crate) ps13: f64,
    /// Saturation pressure at 643.15 K.
    pub(crate) ps643: f64,
    /// Region 1 enthalpy and entropy at `(ps13, T13)`.
    pub(crate) hs13: f64,
    pub(crate) ss13: f64,
    /// Region 2 enthalpy and entropy at `(ps13, T13)`.
    pub(crate) hs23: f64,
    pub(crate) ss23: f64,
    /// Critical specific entropy.
    pub(crate) sc: f64,
    /// Critical specific internal energy.
    pub(crate) uc: f64,
}

pub(crate) static DERIVED: LazyLock<Derived> = LazyLock::new(Derived::build);

impl Derived {
    fn build() -> Self {
        let ps13 = region4::saturation_pressure(T13);

        let liquid = region1::state(ps13, T13);
        let vapour = region2::state(ps13, T13);
        let critical = region3::HelmholtzState::new(RHOC, TC);

        Self {
            p0: region4::saturation_pressure(T0),
            ps13,
            ps643: region4::saturation_pressure(T643),
            hs13: liquid.specific_enthalpy(),
            ss13: liquid.specific_entropy(),
            hs23: vapour.specific_enthalpy(),
            ss23: vapour.specific_entropy(),
            sc: critical.specific_entropy(),
            uc: critical.specific_internal_energy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn saturation_pressures() {
        assert_relative_eq!(DERIVED.p0, 611.212_677e-6, max_relative = 1e-8);
        assert_relative_eq!(DERIVED.ps13, 16.529_164_252_6, max_relative = 1e-9);
        assert_relative_eq!(DERIVED.ps643, 21.043_367_318, max_relative = 1e-8);
    }

    #[test]
    fn critical_point() {
        assert_relative_eq!(DERIVED.sc, 4.412_021_482, max_relative = 1e-8);

        let hc = DERIVED.uc + PC / RHOC * 1e3;
        assert_relative_eq!(hc, HC, max_relative = 1e-6);
    }

    #[test]
    fn region_boundaries_on_saturation_curve() {
        assert!(DERIVED.hs13 < HC && HC < DERIVED.hs23);
        assert!(DERIVED.ss13 < DERIVED.sc && DERIVED.sc < DERIVED.ss23);
    }
}
