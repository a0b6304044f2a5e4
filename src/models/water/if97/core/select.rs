//! Region selection from each pair of independent variables.
//!
//! Every selector checks the outer validity bounds first and reports the
//! violated bound as an [`OutOfRange`]. The `(p, T)` selector never returns
//! Region 4, since `(p, T)` alone cannot place a state on the saturation
//! curve.

use tracing::trace;

use crate::models::water::if97::{Quantity, error::OutOfRange};

use super::{
    constants::{DERIVED, P_MAX, P5, S2BC, T0, T13, T25, T5},
    region::{
        Properties, Region,
        boundary::{
            enthalpy_1, enthalpy_2ab, enthalpy_2c3b, enthalpy_3a, enthalpy_b13, pressure_b23,
            temperature_b23, temperature_b23_hs,
        },
        region1, region2, region3, region4, region5,
    },
};

/// Relative tolerance on the Region 3/4 enthalpy boundary.
const B34H_TOLERANCE: f64 = 4.3e-6;

/// Entropy below which the Region 1 temperature is checked against `T0`.
const S_TRIPLE: f64 = 4.751_610_056_7e-4;

/// Entropy where the saturated-liquid curve passes from Region 1 to Region 3.
const S_B13: f64 = 3.778_281_340;

/// Entropy where the saturated-vapour curve leaves subregion 2a.
const S_2AB: f64 = 9.155_759_395;

/// Enthalpy and entropy bounds of the box where B23 must be resolved in `(h, s)`.
const H_B23: (f64, f64) = (2.563_592_004e3, 2.812_942_061e3);
const S_B23: (f64, f64) = (5.048_096_828, 5.260_578_707);

/// Selects the region containing `(p, T)`.
pub(crate) fn select_pt(p: f64, t: f64) -> Result<Region, OutOfRange> {
    if p <= 0.0 {
        return Err(OutOfRange::new(Quantity::Pressure, p, 0.0));
    }
    if p > P_MAX {
        return Err(OutOfRange::new(Quantity::Pressure, p, P_MAX));
    }
    if t < T0 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T0));
    }
    if t > T25 && p > P5 {
        return Err(OutOfRange::new(Quantity::Pressure, p, P5).when(Quantity::Temperature, t, T25));
    }
    if t > T5 {
        return Err(OutOfRange::new(Quantity::Temperature, t, T5));
    }

    let region = if t > T25 {
        Region::Region5
    } else if t > T13 {
        if p > pressure_b23(t) {
            Region::Region3
        } else {
            Region::Region2
        }
    } else if p > region4::saturation_pressure(t) {
        Region::Region1
    } else {
        Region::Region2
    };

    trace!(p, t, %region, "region from (p, T)");
    Ok(region)
}

/// Selects the region containing `(p, h)`.
pub(crate) fn select_ph(p: f64, h: f64) -> Result<Region, OutOfRange> {
    let derived = &*DERIVED;
    check_pressure(p)?;

    let h25 = region2::state(p, T25).specific_enthalpy();

    let region = if h > h25 {
        if p > P5 {
            return Err(OutOfRange::new(Quantity::Pressure, p, P5).when(
                Quantity::SpecificEnthalpy,
                h,
                h25,
            ));
        }
        let h5 = region5::state(p, T5).specific_enthalpy();
        if h > h5 {
            return Err(OutOfRange::new(Quantity::SpecificEnthalpy, h, h5));
        }
        Region::Region5
    } else if p <= derived.ps13 {
        let ts = region4::saturation_temperature(p);

        if h < region1::state(p, ts).specific_enthalpy() {
            Region::Region1
        } else if h > region2::state(p, ts).specific_enthalpy() {
            Region::Region2
        } else {
            Region::Region4
        }
    } else if (derived.hs13..=derived.hs23).contains(&h) {
        if p > region4::saturation_pressure_h(h) * (1.0 - B34H_TOLERANCE) {
            Region::Region3
        } else {
            Region::Region4
        }
    } else if h <= region1::state(p, T13).specific_enthalpy() {
        Region::Region1
    } else if h >= region2::state(p, temperature_b23(p)).specific_enthalpy() {
        Region::Region2
    } else {
        Region::Region3
    };

    trace!(p, h, %region, "region from (p, h)");
    Ok(region)
}

/// Selects the region containing `(p, s)`.
pub(crate) fn select_ps(p: f64, s: f64) -> Result<Region, OutOfRange> {
    let derived = &*DERIVED;
    check_pressure(p)?;

    let s_min = region1::state(p, T0).specific_entropy();
    if s < s_min {
        return Err(OutOfRange::new(Quantity::SpecificEntropy, s, s_min));
    }

    let s25 = region2::state(p, T25).specific_entropy();

    let region = if s > s25 {
        if p > P5 {
            return Err(OutOfRange::new(Quantity::Pressure, p, P5).when(
                Quantity::SpecificEntropy,
                s,
                s25,
            ));
        }
        let s5 = region5::state(p, T5).specific_entropy();
        if s > s5 {
            return Err(OutOfRange::new(Quantity::SpecificEntropy, s, s5));
        }
        Region::Region5
    } else if p < derived.ps13 {
        let ts = region4::saturation_temperature(p);

        if s < region1::state(p, ts).specific_entropy() {
            Region::Region1
        } else if s > region2::state(p, ts).specific_entropy() {
            Region::Region2
        } else {
            Region::Region4
        }
    } else if (derived.ss13..=derived.ss23).contains(&s) && p < region4::saturation_pressure_s(s) {
        Region::Region4
    } else if s <= region1::state(p, T13).specific_entropy() {
        Region::Region1
    } else if s < region2::state(p, temperature_b23(p)).specific_entropy() {
        Region::Region3
    } else {
        Region::Region2
    };

    trace!(p, s, %region, "region from (p, s)");
    Ok(region)
}

/// Selects the region containing `(h, s)`.
///
/// The region is decided in entropy bands, each bounded above by a
/// saturation or region boundary curve in `h(s)`.
pub(crate) fn select_hs(h: f64, s: f64) -> Result<Region, OutOfRange> {
    check_hs(h, s)?;

    let region = if s <= S_B13 {
        if h <= enthalpy_1(s) {
            Region::Region4
        } else if h > enthalpy_b13(s) {
            Region::Region3
        } else {
            Region::Region1
        }
    } else if s <= DERIVED.sc {
        if h > enthalpy_3a(s) {
            Region::Region3
        } else {
            Region::Region4
        }
    } else if s < S2BC {
        if h <= enthalpy_2c3b(s) {
            Region::Region4
        } else if h <= H_B23.0 || s <= S_B23.0 {
            Region::Region3
        } else if h >= H_B23.1 || s >= S_B23.1 {
            Region::Region2
        } else if region2::pressure_hs(h, s) > pressure_b23(temperature_b23_hs(h, s)) {
            Region::Region3
        } else {
            Region::Region2
        }
    } else if s <= S_2AB && h <= enthalpy_2ab(s) {
        Region::Region4
    } else {
        Region::Region2
    };

    trace!(h, s, %region, "region from (h, s)");
    Ok(region)
}

/// Pressure bounds shared by the `(p, h)` and `(p, s)` selectors.
fn check_pressure(p: f64) -> Result<(), OutOfRange> {
    let p0 = DERIVED.p0;

    if p < p0 {
        Err(OutOfRange::new(Quantity::Pressure, p, p0))
    } else if p > P_MAX {
        Err(OutOfRange::new(Quantity::Pressure, p, P_MAX))
    } else {
        Ok(())
    }
}

/// Outer bounds of the `(h, s)` domain.
///
/// The lower bound follows the `T0` isotherm of Region 1. The upper bound
/// follows the 100 MPa isobar through Regions 1 and 3.
fn check_hs(h: f64, s: f64) -> Result<(), OutOfRange> {
    let h_min = region1::state(DERIVED.p0, T0).specific_enthalpy();
    if h < h_min {
        return Err(OutOfRange::new(Quantity::SpecificEnthalpy, h, h_min));
    }

    if s < S_TRIPLE {
        let p = region1::pressure_hs(h, s);

        // 24 mK is the accuracy of the Region 1 backward equation.
        if region1::temperature_ph(p, h) + 0.024 < T0 {
            let s_min = region1::state(p, T0).specific_entropy();
            return Err(OutOfRange::new(Quantity::SpecificEntropy, s, s_min));
        }
    }

    let s1 = region1::state(P_MAX, T0).specific_entropy();
    let s2 = region2::state(P_MAX, T25).specific_entropy();
    if !(s1..=s2).contains(&s) {
        return Ok(());
    }

    let h_max = if s <= region1::state(P_MAX, T13).specific_entropy() {
        let t = region1::temperature_ps(P_MAX, s);
        region1::state(P_MAX, t).specific_enthalpy()
    } else if s <= region2::state(P_MAX, 863.15).specific_entropy() {
        let rho = 1.0 / region3::specific_volume_ps(P_MAX, s);
        let t = region3::temperature_ps(P_MAX, s);
        region3::HelmholtzState::new(rho, t).specific_enthalpy()
    } else {
        return Ok(());
    };

    if h > h_max {
        return Err(OutOfRange::new(Quantity::SpecificEnthalpy, h, h_max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn pt_regions() -> Result<(), OutOfRange> {
        assert_eq!(select_pt(3.0, 300.0)?, Region::Region1);
        assert_eq!(select_pt(0.0035, 300.0)?, Region::Region2);
        assert_eq!(select_pt(30.0, 700.0)?, Region::Region2);
        assert_eq!(select_pt(50.0, 630.0)?, Region::Region3);
        assert_eq!(select_pt(25.0, 650.0)?, Region::Region3);
        assert_eq!(select_pt(0.5, 1500.0)?, Region::Region5);
        assert_eq!(select_pt(50.0, 2000.0)?, Region::Region5);
        Ok(())
    }

    #[test]
    fn pt_splits_regions_2_and_3_on_b23() -> Result<(), OutOfRange> {
        // pB23(700 K) = 30.477 196 6 MPa.
        assert_eq!(select_pt(30.477_2, 700.0)?, Region::Region3);
        assert_eq!(select_pt(30.477_19, 700.0)?, Region::Region2);
        assert_eq!(select_pt(100.0, 863.0)?, Region::Region3);
        assert_eq!(select_pt(99.9, 864.0)?, Region::Region2);
        Ok(())
    }

    #[test]
    fn pt_bounds() {
        let error = select_pt(120.0, 300.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::Pressure);
        assert_relative_eq!(error.limit(), 100.0);

        let error = select_pt(0.0, 300.0).unwrap_err();
        assert_relative_eq!(error.limit(), 0.0);

        let error = select_pt(1.0, 250.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::Temperature);
        assert_relative_eq!(error.limit(), T0);

        let error = select_pt(1.0, 2300.0).unwrap_err();
        assert_relative_eq!(error.limit(), T5);

        let error = select_pt(60.0, 1500.0).unwrap_err();
        assert_eq!(error.entries().len(), 2);
        assert_eq!(error.entries()[1].quantity, Quantity::Temperature);
        assert_relative_eq!(error.limit(), P5);
    }

    #[test]
    fn ph_regions() -> Result<(), OutOfRange> {
        assert_eq!(select_ph(3.0, 500.0)?, Region::Region1);
        assert_eq!(select_ph(0.001, 3000.0)?, Region::Region2);
        assert_eq!(select_ph(1.0, 1500.0)?, Region::Region4);
        assert_eq!(select_ph(20.0, 1700.0)?, Region::Region3);
        assert_eq!(select_ph(20.0, 2500.0)?, Region::Region3);
        assert_eq!(select_ph(80.0, 1000.0)?, Region::Region1);
        assert_eq!(select_ph(80.0, 3500.0)?, Region::Region2);
        assert_eq!(select_ph(30.0, 5000.0)?, Region::Region5);
        Ok(())
    }

    #[test]
    fn ph_bounds() {
        let error = select_ph(1e-4, 100.0).unwrap_err();
        assert_relative_eq!(error.limit(), DERIVED.p0);

        let error = select_ph(60.0, 5000.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::Pressure);
        assert_eq!(error.entries()[1].quantity, Quantity::SpecificEnthalpy);

        let error = select_ph(1.0, 10_000.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::SpecificEnthalpy);
    }

    #[test]
    fn ps_regions() -> Result<(), OutOfRange> {
        assert_eq!(select_ps(3.0, 0.5)?, Region::Region1);
        assert_eq!(select_ps(0.1, 8.0)?, Region::Region2);
        assert_eq!(select_ps(1.0, 4.0)?, Region::Region4);
        assert_eq!(select_ps(20.0, 3.8)?, Region::Region3);
        assert_eq!(select_ps(80.0, 5.5)?, Region::Region2);
        assert_eq!(select_ps(1.0, 9.0)?, Region::Region5);
        Ok(())
    }

    #[test]
    fn ps_bounds() {
        let error = select_ps(1.0, -1.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::SpecificEntropy);

        let error = select_ps(1.0, 20.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::SpecificEntropy);
    }

    #[test]
    fn hs_regions() -> Result<(), OutOfRange> {
        assert_eq!(select_hs(1500.0, 3.4)?, Region::Region1);
        assert_eq!(select_hs(1700.0, 3.8)?, Region::Region3);
        assert_eq!(select_hs(2600.0, 5.1)?, Region::Region3);
        assert_eq!(select_hs(2800.0, 6.5)?, Region::Region2);
        assert_eq!(select_hs(3600.0, 6.0)?, Region::Region2);
        assert_eq!(select_hs(1800.0, 5.3)?, Region::Region4);
        assert_eq!(select_hs(2400.0, 6.0)?, Region::Region4);
        assert_eq!(select_hs(2500.0, 5.5)?, Region::Region4);
        Ok(())
    }

    #[test]
    fn hs_bounds() {
        let error = select_hs(-10.0, 0.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::SpecificEnthalpy);

        // Far above the 100 MPa isobar in Region 1.
        let error = select_hs(1000.0, 1.0).unwrap_err();
        assert_eq!(error.quantity(), Quantity::SpecificEnthalpy);
    }
}
