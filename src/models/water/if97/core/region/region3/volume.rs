//! Backward equations `v(p, T)` for Region 3.
//!
//! Region 3 is split into 26 subregions, 3a to 3z, by boundary curves
//! `T(p)`. Each subregion has its own equation for the reduced volume.
//! Subregions 3n to 3z cover the near-critical band between 643.15 K and
//! the critical point, where the curves are tightly packed.

use tracing::trace;

use crate::models::water::if97::{
    Quantity,
    core::{
        constants::{DERIVED, PC, TC},
        polynomial::{self, Coefficient, Term},
        region::region4,
    },
    error::OutOfRange,
};

/// Pressure on the 3c/3d/3s/3t junction, MPa.
const P3CD: f64 = 19.008_811_89;
/// Slope of the 3e/3f boundary, K/MPa.
const DTHETA_DPI: f64 = 3.727_888_004;

/// Specific volume from pressure and temperature.
///
/// # Errors
///
/// Returns an out-of-range error when `p` does not exceed the saturation
/// pressure at 623.15 K, the lower pressure bound of Region 3.
pub(crate) fn specific_volume_pt(p: f64, t: f64) -> Result<f64, OutOfRange> {
    let subregion = Subregion::locate(p, t)?;
    trace!(p, t, ?subregion, "region 3 subregion from (p, T)");

    Ok(subregion.equation().specific_volume(p, t))
}

/// A Region 3 subregion of the `v(p, T)` equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subregion {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Subregion {
    /// Finds the subregion containing `(p, T)`.
    pub(crate) fn locate(p: f64, t: f64) -> Result<Self, OutOfRange> {
        use Subregion::*;

        let derived = &*DERIVED;
        if p <= derived.ps13 {
            return Err(OutOfRange::new(Quantity::Pressure, p, derived.ps13));
        }

        let ln_p = p.ln();
        let t3ab = polynomial::series(&BOUNDARY_AB, ln_p);
        let t3cd = polynomial::series(&BOUNDARY_CD, p);
        let t3ef = DTHETA_DPI * (p - PC) + TC;
        let t3gh = polynomial::series(&BOUNDARY_GH, p);
        let t3ij = polynomial::series(&BOUNDARY_IJ, p);
        let t3jk = polynomial::series(&BOUNDARY_JK, p);
        let t3mn = polynomial::series(&BOUNDARY_MN, p);
        let t3op = polynomial::series(&BOUNDARY_OP, ln_p);
        let t3qu = polynomial::series(&BOUNDARY_QU, p);
        let t3rx = polynomial::series(&BOUNDARY_RX, p);
        let t3uv = polynomial::series(&BOUNDARY_UV, p);
        let t3wx = polynomial::series(&BOUNDARY_WX, ln_p);

        // Only consulted at or below the critical pressure.
        let ts = || region4::saturation_temperature(p);

        let subregion = if t3qu < t && t <= t3rx && (derived.ps643..=22.5).contains(&p) {
            Self::near_critical(p, t, ts, t3ef, t3uv, t3wx)
        } else if p > 40.0 {
            if t <= t3ab { A } else { B }
        } else if p > 25.0 {
            if t <= t3cd {
                C
            } else if t <= t3ab {
                D
            } else if t <= t3ef {
                E
            } else {
                F
            }
        } else if p > 23.5 {
            if t <= t3cd {
                C
            } else if t <= t3gh {
                G
            } else if t <= t3ef {
                H
            } else if t <= t3ij {
                I
            } else if t <= t3jk {
                J
            } else {
                K
            }
        } else if p > 23.0 {
            if t <= t3cd {
                C
            } else if t <= t3gh {
                L
            } else if t <= t3ef {
                H
            } else if t <= t3ij {
                I
            } else if t <= t3jk {
                J
            } else {
                K
            }
        } else if p > 22.5 {
            if t <= t3cd {
                C
            } else if t <= t3gh {
                L
            } else if t <= t3mn {
                M
            } else if t <= t3ef {
                N
            } else if t <= t3op {
                O
            } else if t <= t3ij {
                P
            } else if t <= t3jk {
                J
            } else {
                K
            }
        } else if p > derived.ps643 {
            if t <= t3cd {
                C
            } else if t <= t3qu {
                Q
            } else if t3rx < t && t <= t3jk {
                R
            } else {
                K
            }
        } else if p > 20.5 {
            if t <= t3cd {
                C
            } else if t <= ts() {
                S
            } else if t <= t3jk {
                R
            } else {
                K
            }
        } else if p > P3CD {
            if t <= t3cd {
                C
            } else if t <= ts() {
                S
            } else {
                T
            }
        } else if t <= ts() {
            C
        } else {
            T
        };

        Ok(subregion)
    }

    /// Auxiliary subregions 3u to 3z, inside the band bounded by `T3qu` and `T3rx`.
    fn near_critical(
        p: f64,
        t: f64,
        ts: impl Fn() -> f64,
        t3ef: f64,
        t3uv: f64,
        t3wx: f64,
    ) -> Self {
        use Subregion::*;

        if p <= PC {
            if t <= ts() {
                if p > 21.931_615_51 && t > t3uv { Y } else { U }
            } else if p > 21.900_962_65 && t <= t3wx {
                Z
            } else {
                X
            }
        } else if t > t3wx {
            X
        } else if t > t3ef {
            if p <= 22.11 { Z } else { W }
        } else if t > t3uv {
            if p <= 22.11 { Y } else { V }
        } else {
            U
        }
    }

    fn equation(self) -> Equation {
        match self {
            Subregion::A => Equation {
                reducing: (0.0024, 100.0, 760.0),
                shift: (0.085, 0.817),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_A,
            },
            Subregion::B => Equation {
                reducing: (0.0041, 100.0, 860.0),
                shift: (0.280, 0.779),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_B,
            },
            Subregion::C => Equation {
                reducing: (0.0022, 40.0, 690.0),
                shift: (0.259, 0.903),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_C,
            },
            Subregion::D => Equation {
                reducing: (0.0029, 40.0, 690.0),
                shift: (0.559, 0.939),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_D,
            },
            Subregion::E => Equation {
                reducing: (0.0032, 40.0, 710.0),
                shift: (0.587, 0.918),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_E,
            },
            Subregion::F => Equation {
                reducing: (0.0064, 40.0, 730.0),
                shift: (0.587, 0.891),
                exponents: Some((0.5, 1.0, 4.0)),
                terms: &TERMS_F,
            },
            Subregion::G => Equation {
                reducing: (0.0027, 25.0, 660.0),
                shift: (0.872, 0.971),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_G,
            },
            Subregion::H => Equation {
                reducing: (0.0032, 25.0, 660.0),
                shift: (0.898, 0.983),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_H,
            },
            Subregion::I => Equation {
                reducing: (0.0041, 25.0, 660.0),
                shift: (0.910, 0.984),
                exponents: Some((0.5, 1.0, 4.0)),
                terms: &TERMS_I,
            },
            Subregion::J => Equation {
                reducing: (0.0054, 25.0, 670.0),
                shift: (0.875, 0.964),
                exponents: Some((0.5, 1.0, 4.0)),
                terms: &TERMS_J,
            },
            Subregion::K => Equation {
                reducing: (0.0077, 25.0, 680.0),
                shift: (0.802, 0.935),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_K,
            },
            Subregion::L => Equation {
                reducing: (0.0026, 24.0, 650.0),
                shift: (0.908, 0.989),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_L,
            },
            Subregion::M => Equation {
                reducing: (0.0028, 23.0, 650.0),
                shift: (1.000, 0.997),
                exponents: Some((1.0, 0.25, 1.0)),
                terms: &TERMS_M,
            },
            Subregion::N => Equation {
                reducing: (0.0031, 23.0, 650.0),
                shift: (0.976, 0.997),
                exponents: None,
                terms: &TERMS_N,
            },
            Subregion::O => Equation {
                reducing: (0.0034, 23.0, 650.0),
                shift: (0.974, 0.996),
                exponents: Some((0.5, 1.0, 1.0)),
                terms: &TERMS_O,
            },
            Subregion::P => Equation {
                reducing: (0.0041, 23.0, 650.0),
                shift: (0.972, 0.997),
                exponents: Some((0.5, 1.0, 1.0)),
                terms: &TERMS_P,
            },
            Subregion::Q => Equation {
                reducing: (0.0022, 23.0, 650.0),
                shift: (0.848, 0.983),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_Q,
            },
            Subregion::R => Equation {
                reducing: (0.0054, 23.0, 650.0),
                shift: (0.874, 0.982),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_R,
            },
            Subregion::S => Equation {
                reducing: (0.0022, 21.0, 640.0),
                shift: (0.886, 0.990),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_S,
            },
            Subregion::T => Equation {
                reducing: (0.0088, 20.0, 650.0),
                shift: (0.803, 1.020),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_T,
            },
            Subregion::U => Equation {
                reducing: (0.0026, 23.0, 650.0),
                shift: (0.902, 0.988),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_U,
            },
            Subregion::V => Equation {
                reducing: (0.0031, 23.0, 650.0),
                shift: (0.960, 0.995),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_V,
            },
            Subregion::W => Equation {
                reducing: (0.0039, 23.0, 650.0),
                shift: (0.959, 0.995),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_W,
            },
            Subregion::X => Equation {
                reducing: (0.0049, 23.0, 650.0),
                shift: (0.910, 0.988),
                exponents: Some((1.0, 1.0, 1.0)),
                terms: &TERMS_X,
            },
            Subregion::Y => Equation {
                reducing: (0.0031, 22.0, 650.0),
                shift: (0.996, 0.994),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_Y,
            },
            Subregion::Z => Equation {
                reducing: (0.0038, 22.0, 650.0),
                shift: (0.993, 0.994),
                exponents: Some((1.0, 1.0, 4.0)),
                terms: &TERMS_Z,
            },
        }
    }
}

/// Reduced-volume equation of one subregion.
///
/// With `π = p/p* − a` and `θ = T/T* − b`, the volume is
/// `v* · (Σ n·(π^c)^I·(θ^d)^J)^e`, or `v* · exp(Σ n·π^I·θ^J)` when
/// `exponents` is `None`.
struct Equation {
    /// `(v*, p*, T*)`.
    reducing: (f64, f64, f64),
    /// `(a, b)`.
    shift: (f64, f64),
    /// `(c, d, e)`.
    exponents: Option<(f64, f64, f64)>,
    terms: &'static [Term],
}

impl Equation {
    fn specific_volume(&self, p: f64, t: f64) -> f64 {
        let (volume, pressure, temperature) = self.reducing;
        let pi = p / pressure - self.shift.0;
        let theta = t / temperature - self.shift.1;

        match self.exponents {
            Some((c, d, e)) => {
                volume * polynomial::evaluate(self.terms, pi.powf(c), theta.powf(d)).powf(e)
            }
            None => volume * polynomial::evaluate(self.terms, pi, theta).exp(),
        }
    }
}

const BOUNDARY_AB: [Coefficient; 5] = [
    (0, 0.154793642129415e4),
    (1, -0.187661219490113e3),
    (2, 0.213144632222112e2),
    (-1, -0.191887498864292e4),
    (-2, 0.918419702359447e3),
];

const BOUNDARY_CD: [Coefficient; 4] = [
    (0, 0.585276966696349e3),
    (1, 0.278233532206915e1),
    (2, -0.127283549295878e-1),
    (3, 0.159090746562729e-3),
];

const BOUNDARY_GH: [Coefficient; 5] = [
    (0, -0.249284240900418e5),
    (1, 0.428143584791546e4),
    (2, -0.269029173140130e3),
    (3, 0.751608051114157e1),
    (4, -0.787105249910383e-1),
];

const BOUNDARY_IJ: [Coefficient; 5] = [
    (0, 0.584814781649163e3),
    (1, -0.616179320924617),
    (2, 0.260763050899562),
    (3, -0.587071076864459e-2),
    (4, 0.515308185433082e-4),
];

const BOUNDARY_JK: [Coefficient; 5] = [
    (0, 0.617229772068439e3),
    (1, -0.770600270141675e1),
    (2, 0.697072596851896),
    (3, -0.157391839848015e-1),
    (4, 0.137897492684194e-3),
];

const BOUNDARY_MN: [Coefficient; 4] = [
    (0, 0.535339483742384e3),
    (1, 0.761978122720128e1),
    (2, -0.158365725441648),
    (3, 0.192871054508108e-2),
];

const BOUNDARY_OP: [Coefficient; 5] = [
    (0, 0.969461372400213e3),
    (1, -0.332500170441278e3),
    (2, 0.642859598466067e2),
    (-1, 0.773845935768222e3),
    (-2, -0.152313732937084e4),
];

const BOUNDARY_QU: [Coefficient; 4] = [
    (0, 0.565603648239126e3),
    (1, 0.529062258221222e1),
    (2, -0.102020639611016),
    (3, 0.122240301070145e-2),
];

const BOUNDARY_RX: [Coefficient; 4] = [
    (0, 0.584561202520006e3),
    (1, -0.102961025163669e1),
    (2, 0.243293362700452),
    (3, -0.294905044740799e-2),
];

const BOUNDARY_UV: [Coefficient; 4] = [
    (0, 0.528199646263062e3),
    (1, 0.890579602135307e1),
    (2, -0.222814134903755),
    (3, 0.286791682263697e-2),
];

const BOUNDARY_WX: [Coefficient; 5] = [
    (0, 0.728052609145380e1),
    (1, 0.973505869861952e2),
    (2, 0.147370491183191e2),
    (-1, 0.329196213998375e3),
    (-2, 0.873371668682417e3),
];

const TERMS_A: [Term; 30] = [
    (-12, 5, 0.110879558823853e-2),
    (-12, 10, 0.572616740810616e3),
    (-12, 12, -0.767051948380852e5),
    (-10, 5, -0.253321069529674e-1),
    (-10, 10, 0.628008049345689e4),
    (-10, 12, 0.234105654131876e6),
    (-8, 5, 0.216867826045856),
    (-8, 8, -0.156237904341963e3),
    (-8, 10, -0.269893956176613e5),
    (-6, 1, -0.180407100085505e-3),
    (-5, 1, 0.116732227668261e-2),
    (-5, 5, 0.266987040856040e2),
    (-5, 10, 0.282776617243286e5),
    (-4, 8, -0.242431520029523e4),
    (-3, 0, 0.435217323022733e-3),
    (-3, 1, -0.122494831387411e-1),
    (-3, 3, 0.179357604019989e1),
    (-3, 6, 0.442729521058314e2),
    (-2, 0, -0.593223489018342e-2),
    (-2, 2, 0.453186261685774),
    (-2, 3, 0.135825703129140e1),
    (-1, 0, 0.408748415856745e-1),
    (-1, 1, 0.474686397863312),
    (-1, 2, 0.118646814997915e1),
    (0, 0, 0.546987265727549),
    (0, 1, 0.195266770452643),
    (1, 0, -0.502268790869663e-1),
    (1, 2, -0.369645308193377),
    (2, 0, 0.633828037528420e-2),
    (2, 2, 0.797441793901017e-1),
];

const TERMS_B: [Term; 32] = [
    (-12, 10, -0.827670470003621e-1),
    (-12, 12, 0.416887126010565e2),
    (-10, 8, 0.483651982197059e-1),
    (-10, 14, -0.291032084950276e5),
    (-8, 8, -0.111422582236948e3),
    (-6, 5, -0.202300083904014e-1),
    (-6, 6, 0.294002509338515e3),
    (-6, 8, 0.140244997609658e3),
    (-5, 5, -0.344384158811459e3),
    (-5, 8, 0.361182452612149e3),
    (-5, 10, -0.140699677420738e4),
    (-4, 2, -0.202023902676481e-2),
    (-4, 4, 0.171346792457471e3),
    (-4, 5, -0.425597804058632e1),
    (-3, 0, 0.691346085000334e-5),
    (-3, 1, 0.151140509678925e-2),
    (-3, 2, -0.416375290166236e-1),
    (-3, 3, -0.413754957011042e2),
    (-3, 5, -0.506673295721637e2),
    (-2, 0, -0.572212965569023e-3),
    (-2, 2, 0.608817368401785e1),
    (-2, 5, 0.239600660256161e2),
    (-1, 0, 0.122261479925384e-1),
    (-1, 2, 0.216356057692938e1),
    (0, 0, 0.3981989034),
    (0, 1, -0.1168928278),
    (1, 0, -0.1028459194),
    (1, 2, -0.4926766376),
    (2, 0, 0.655540456406790e-1),
    (3, 2, -0.2404625351),
    (4, 0, -0.269798180310075e-1),
    (4, 1, 0.128369435967012),
];

const TERMS_C: [Term; 35] = [
    (-12, 6, 0.311967788763030e1),
    (-12, 8, 0.276713458847564e5),
    (-12, 10, 0.322583103403269e8),
    (-10, 6, -0.342416065095363e3),
    (-10, 8, -0.899732529907377e6),
    (-10, 10, -0.793892049821251e8),
    (-8, 5, 0.953193003217388e2),
    (-8, 6, 0.229784742345072e4),
    (-8, 7, 0.175336675322499e6),
    (-6, 8, 0.791214365222792e7),
    (-5, 1, 0.319933345844209e-4),
    (-5, 4, -0.659508863555767e2),
    (-5, 7, -0.833426563212851e6),
    (-4, 2, 0.645734680583292e-1),
    (-4, 8, -0.382031020570813e7),
    (-3, 0, 0.406398848470079e-4),
    (-3, 3, 0.310327498492008e2),
    (-2, 0, -0.892996718483724e-3),
    (-2, 4, 0.234604891591616e3),
    (-2, 5, 0.377515668966951e4),
    (-1, 0, 0.158646812591361e-1),
    (-1, 1, 0.7079063362),
    (-1, 2, 0.126016225146570e2),
    (0, 0, 0.7361436558),
    (0, 1, 0.676544269),
    (0, 2, -0.178100588189137e2),
    (1, 0, -0.1565319755),
    (1, 2, 0.117707430048158e2),
    (2, 0, 0.840143653860447e-1),
    (2, 1, -0.1864424675),
    (2, 3, -0.440170203949645e2),
    (2, 7, 0.123290423502494e7),
    (3, 0, -0.240650039730845e-1),
    (3, 7, -0.107077716660869e7),
    (8, 1, 0.438319858566475e-1),
];

const TERMS_D: [Term; 38] = [
    (-12, 4, -4.52484847171645e-10),
    (-12, 6, 3.15210389538801e-5),
    (-12, 7, -2.14991352047545e-3),
    (-12, 10, 5.08058874808345e2),
    (-12, 12, -1.27123036845932e7),
    (-12, 16, 1.15371133120497e12),
    (-10, 0, -1.97805728776273e-16),
    (-10, 2, 2.41554806033972e-11),
    (-10, 4, -1.56481703640525e-6),
    (-10, 6, 2.77211346836625e-3),
    (-10, 8, -2.03578994462286e1),
    (-10, 10, 1.44369489909053e6),
    (-10, 14, -4.11254217946539e10),
    (-8, 3, 6.23449786243773e-6),
    (-8, 7, -2.21774281146038e1),
    (-8, 8, -6.89315087933158e4),
    (-8, 10, -1.95419525060713e7),
    (-6, 6, 3.16373510564015e3),
    (-6, 8, 2.24040754426988e6),
    (-5, 1, -4.36701347922356e-6),
    (-5, 2, -4.04213852833996e-4),
    (-5, 5, -3.48153203414663e2),
    (-5, 7, -3.85294213555289e5),
    (-4, 0, 1.35203700099403e-7),
    (-4, 1, 1.34648383271089e-4),
    (-4, 7, 1.25031835351736e5),
    (-3, 2, 9.68123678455841e-2),
    (-3, 4, 2.25660517512438e2),
    (-2, 0, -1.90102435341872e-4),
    (-2, 1, -2.99628410819229e-2),
    (-1, 0, 5.00833915372121e-3),
    (-1, 1, 3.87842482998411e-1),
    (-1, 5, -1.38535367777182e3),
    (0, 0, 8.70745245971773e-1),
    (0, 2, 1.71946252068742),
    (1, 0, -3.26650121426383e-2),
    (1, 6, 4.98044171727877e3),
    (3, 0, 5.51478022765087e-3),
];

const TERMS_E: [Term; 29] = [
    (-12, 14, 0.715815808404721e9),
    (-12, 16, -0.114328360753449e12),
    (-10, 3, 0.376531002015720e-11),
    (-10, 6, -0.903983668691157e-4),
    (-10, 10, 0.665695908836252e6),
    (-10, 14, 0.535364174960127e10),
    (-10, 16, 0.794977402335603e11),
    (-8, 7, 0.922230563421437e2),
    (-8, 8, -0.142586073991215e6),
    (-8, 10, -0.111796381424162e7),
    (-6, 6, 0.896121629640760e4),
    (-5, 6, -0.669989239070491e4),
    (-4, 2, 0.451242538486834e-2),
    (-4, 4, -0.339731325977713e2),
    (-3, 2, -0.120523111552278e1),
    (-3, 6, 0.475992667717124e5),
    (-3, 7, -0.266627750390341e6),
    (-2, 0, -0.153314954386524e-3),
    (-2, 1, 0.305638404828265),
    (-2, 3, 0.123654999499486e3),
    (-2, 4, -0.104390794213011e4),
    (-1, 0, -0.157496516174308e-1),
    (0, 0, 0.685331118940253),
    (0, 1, 0.178373462873903e1),
    (1, 0, -0.544674124878910),
    (1, 4, 0.204529931318843e4),
    (1, 6, -0.228342359328752e5),
    (2, 0, 0.413197481515899),
    (2, 2, -0.341931835910405e2),
];

const TERMS_F: [Term; 42] = [
    (0, -3, -0.251756547792325e-7),
    (0, -2, 0.601307193668763e-5),
    (0, -1, -0.100615977450049e-2),
    (0, 0, 0.999969140252192),
    (0, 1, 0.214107759236486e1),
    (0, 2, -0.165175571959086e2),
    (1, -1, -0.141987303638727e-2),
    (1, 1, 0.269251915156554e1),
    (1, 2, 0.349741815858722e2),
    (1, 3, -0.300208695771783e2),
    (2, 0, -0.131546288252539e1),
    (2, 1, -0.839091277286169e1),
    (3, -5, 0.181545608337015e-9),
    (3, -2, -0.591099206478909e-3),
    (3, 0, 0.152115067087106e1),
    (4, -3, 0.252956470663225e-4),
    (5, -8, 0.100726265203786e-14),
    (5, 1, -0.149774533860650e1),
    (6, -6, -0.793940970562969e-9),
    (7, -4, -0.150290891264717e-3),
    (7, 1, 0.151205531275133e1),
    (10, -6, 0.470942606221652e-5),
    (12, -10, 0.195049710391712e-12),
    (12, -8, -0.911627886266077e-8),
    (12, -4, 0.604374640201265e-3),
    (14, -12, -0.225132933900136e-15),
    (14, -10, 0.610916973582981e-11),
    (14, -8, -0.303063908043404e-6),
    (14, -6, -0.137796070798409e-4),
    (14, -4, -0.919296736666106e-3),
    (16, -10, 0.639288223132545e-9),
    (16, -8, 0.753259479898699e-6),
    (18, -12, -0.400321478682929e-12),
    (18, -10, 0.756140294351614e-8),
    (20, -12, -0.912082054034891e-11),
    (20, -10, -0.237612381140539e-7),
    (20, -6, 0.269586010591874e-4),
    (22, -12, -0.732828135157839e-10),
    (24, -12, 0.241995578306660e-9),
    (24, -4, -0.405735532730322e-3),
    (28, -12, 0.189424143498011e-9),
    (32, -12, -0.486632965074563e-9),
];

const TERMS_G: [Term; 38] = [
    (-12, 7, 0.412209020652996e-4),
    (-12, 12, -0.114987238280587e7),
    (-12, 14, 0.948180885032080e10),
    (-12, 18, -0.195788865718971e18),
    (-12, 22, 0.496250704871300e25),
    (-12, 24, -0.105549884548496e29),
    (-10, 14, -0.758642165988278e12),
    (-10, 20, -0.922172769596101e23),
    (-10, 24, 0.725379072059348e30),
    (-8, 7, -0.617718249205859e2),
    (-8, 8, 0.107555033344858e5),
    (-8, 10, -0.379545802336487e8),
    (-8, 12, 0.228646846221831e12),
    (-6, 8, -0.499741093010619e7),
    (-6, 22, -0.280214310054101e31),
    (-5, 7, 0.104915406769586e7),
    (-5, 20, 0.613754229168619e28),
    (-4, 22, 0.802056715528378e32),
    (-3, 7, -0.298617819828065e8),
    (-2, 3, -0.910782540134681e2),
    (-2, 5, 0.135033227281565e6),
    (-2, 14, -0.712949383408211e19),
    (-2, 24, -0.104578785289542e37),
    (-1, 2, 0.304331584444093e2),
    (-1, 8, 0.593250797959445e10),
    (-1, 18, -0.364174062110798e28),
    (0, 0, 0.921791403532461),
    (0, 1, -0.337693609657471),
    (0, 2, -0.724644143758508e2),
    (1, 0, -0.110480239272601),
    (1, 1, 0.536516031875059e1),
    (1, 3, -0.291441872156205e4),
    (3, 24, 0.616338176535305e40),
    (5, 22, -0.120889175861180e39),
    (6, 12, 0.818396024524612e23),
    (8, 3, 0.940781944835829e9),
    (10, 0, -0.367279669545448e5),
    (10, 6, -0.837513931798655e16),
];

const TERMS_H: [Term; 29] = [
    (-12, 8, 0.561379678887577e-1),
    (-12, 12, 0.774135421587083e10),
    (-10, 4, 0.111482975877938e-8),
    (-10, 6, -0.143987128208183e-2),
    (-10, 8, 0.193696558764920e4),
    (-10, 10, -0.605971823585005e9),
    (-10, 14, 0.171951568124337e14),
    (-10, 16, -0.185461154985145e17),
    (-8, 0, 0.387851168078010e-16),
    (-8, 1, -0.395464327846105e-13),
    (-8, 6, -0.170875935679023e3),
    (-8, 7, -0.212010620701220e4),
    (-8, 8, 0.177683337348191e8),
    (-6, 4, 0.110177443629575e2),
    (-6, 6, -0.234396091693313e6),
    (-6, 8, -0.656174421999594e7),
    (-5, 2, 0.156362212977396e-4),
    (-5, 3, -0.212946257021400e1),
    (-5, 4, 0.135249306374858e2),
    (-4, 2, 0.177189164145813),
    (-4, 4, 0.139499167345464e4),
    (-3, 1, -0.703670932036388e-2),
    (-3, 2, -0.152011044389648),
    (-2, 0, 0.981916922991113e-4),
    (-1, 0, 0.147199658618076e-2),
    (-1, 2, 0.202618487025578e2),
    (0, 0, 0.899345518944240),
    (1, 0, -0.211346402240858),
    (1, 2, 0.249971752957491e2),
];

const TERMS_I: [Term; 42] = [
    (0, 0, 0.106905684359136e1),
    (0, 1, -0.148620857922333e1),
    (0, 10, 0.259862256980408e15),
    (1, -4, -0.446352055678749e-11),
    (1, -2, -0.566620757170032e-6),
    (1, -1, -0.235302885736849e-2),
    (1, 0, -0.269226321968839),
    (2, 0, 0.922024992944392e1),
    (3, -5, 0.357633505503772e-11),
    (3, 0, -0.173942565562222e2),
    (4, -3, 0.700681785556229e-5),
    (4, -2, -0.267050351075768e-3),
    (4, -1, -0.231779669675624e1),
    (5, -6, -0.753533046979752e-12),
    (5, -1, 0.481337131452891e1),
    (5, 12, -0.223286270422356e22),
    (7, -4, -0.118746004987383e-4),
    (7, -3, 0.646412934136496e-2),
    (8, -6, -0.410588536330937e-9),
    (8, 10, 0.422739537057241e20),
    (10, -8, 0.313698180473812e-12),
    (12, -12, 0.164395334345040e-23),
    (12, -6, -0.339823323754373e-5),
    (12, -4, -0.135268639905021e-1),
    (14, -10, -0.723252514211625e-14),
    (14, -8, 0.184386437538366e-8),
    (14, -4, -0.463959533752385e-1),
    (14, 5, -0.992263100376750e14),
    (18, -12, 0.688169154439335e-16),
    (18, -10, -0.222620998452197e-10),
    (18, -8, -0.540843018624083e-7),
    (18, -6, 0.345570606200257e-2),
    (18, 2, 0.422275800304086e11),
    (20, -12, -0.126974478770487e-14),
    (20, -10, 0.927237985153679e-9),
    (22, -12, 0.612670812016489e-13),
    (24, -12, -0.722693924063497e-11),
    (24, -8, -0.383669502636822e-3),
    (32, -10, 0.374684572410204e-3),
    (32, -5, -0.931976897511086e5),
    (36, -10, -0.247690616026922e-1),
    (36, -8, 0.658110546759474e2),
];

const TERMS_J: [Term; 29] = [
    (0, -1, -0.111371317395540e-3),
    (0, 0, 0.100342892423685e1),
    (0, 1, 0.530615581928979e1),
    (1, -2, 0.179058760078792e-5),
    (1, -1, -0.728541958464774e-3),
    (1, 1, -0.187576133371704e2),
    (2, -1, 0.199060874071849e-2),
    (2, 1, 0.243574755377290e2),
    (3, -2, -0.177040785499444e-3),
    (4, -2, -0.259680385227130e-2),
    (4, 2, -0.198704578406823e3),
    (5, -3, 0.738627790224287e-4),
    (5, -2, -0.236264692844138e-2),
    (5, 0, -0.161023121314333e1),
    (6, 3, 0.622322971786473e4),
    (10, -6, -0.960754116701669e-8),
    (12, -8, -0.510572269720488e-10),
    (12, -3, 0.767373781404211e-2),
    (14, -10, 0.663855469485254e-14),
    (14, -8, -0.717590735526745e-9),
    (14, -5, 0.146564542926508e-4),
    (16, -10, 0.309029474277013e-11),
    (18, -12, -0.464216300971708e-15),
    (20, -12, -0.390499637961161e-13),
    (20, -10, -0.236716126781431e-9),
    (24, -12, 0.454652854268717e-11),
    (24, -6, -0.422271787482497e-2),
    (28, -12, 0.283911742354706e-10),
    (28, -5, 0.270929002720228e1),
];

const TERMS_K: [Term; 34] = [
    (-2, 10, -0.401215699576099e9),
    (-2, 12, 0.484501478318406e11),
    (-1, -5, 0.394721471363678e-14),
    (-1, 6, 0.372629967374147e5),
    (0, -12, -0.369794374168666e-29),
    (0, -6, -0.380436407012452e-14),
    (0, -2, 0.475361629970233e-6),
    (0, -1, -0.879148916140706e-3),
    (0, 0, 0.844317863844331),
    (0, 1, 0.122433162656600e2),
    (0, 2, -0.104529634830279e3),
    (0, 3, 0.589702771277429e3),
    (0, 14, -0.291026851164444e14),
    (1, -3, 0.170343072841850e-5),
    (1, -2, -0.277617606975748e-3),
    (1, 0, -0.344709605486686e1),
    (1, 1, 0.221333862447095e2),
    (1, 2, -0.194646110037079e3),
    (2, -8, 0.808354639772825e-15),
    (2, -6, -0.180845209145470e-10),
    (2, -3, -0.696664158132412e-5),
    (2, -2, -0.181057560300994e-2),
    (2, 0, 0.255830298579027e1),
    (2, 4, 0.328913873658481e4),
    (5, -12, -0.173270241249904e-18),
    (5, -6, -0.661876792558034e-6),
    (5, -3, -0.395688923421250e-2),
    (6, -12, 0.604203299819132e-17),
    (6, -10, -0.400879935920517e-13),
    (6, -8, 0.160751107464958e-8),
    (6, -5, 0.383719409025556e-4),
    (8, -12, -0.649565446702457e-14),
    (10, -12, -0.149095328506000e-11),
    (12, -10, 0.541449377329581e-8),
];

const TERMS_L: [Term; 43] = [
    (-12, 14, 0.260702058647537e10),
    (-12, 16, -0.188277213604704e15),
    (-12, 18, 0.554923870289667e19),
    (-12, 20, -0.758966946387758e23),
    (-12, 22, 0.413865186848908e27),
    (-10, 14, -0.815038000738060e12),
    (-10, 24, -0.381458260489955e33),
    (-8, 6, -0.123239564600519e-1),
    (-8, 10, 0.226095631437174e8),
    (-8, 12, -0.495017809506720e12),
    (-8, 14, 0.529482996422863e16),
    (-8, 18, -0.444359478746295e23),
    (-8, 24, 0.521635864527315e35),
    (-8, 36, -0.487095672740742e55),
    (-6, 8, -0.714430209937547e6),
    (-5, 4, 0.127868634615495),
    (-5, 5, -0.100752127917598e2),
    (-4, 7, 0.777451437960990e7),
    (-4, 16, -0.108105480796471e25),
    (-3, 1, -0.357578581169659e-5),
    (-3, 3, -0.212857169423484e1),
    (-3, 18, 0.270706111085238e30),
    (-3, 20, -0.695953622348829e33),
    (-2, 2, 0.110609027472280),
    (-2, 3, 0.721559163361354e2),
    (-2, 10, -0.306367307532219e15),
    (-1, 0, 0.265839618885530e-4),
    (-1, 1, 0.253392392889754e-1),
    (-1, 3, -0.214443041836579e3),
    (0, 0, 0.937846601489667),
    (0, 1, 0.223184043101700e1),
    (0, 2, 0.338401222509191e2),
    (0, 12, 0.494237237179718e21),
    (1, 0, -0.198068404154428),
    (1, 16, -0.141415349881140e31),
    (2, 1, -0.993862421613651e2),
    (4, 0, 0.125070534142731e3),
    (5, 0, -0.996473529004439e3),
    (5, 1, 0.473137909872765e5),
    (6, 14, 0.116662121219322e33),
    (10, 4, -0.315874976271533e16),
    (10, 12, -0.445703369196945e33),
    (14, 10, 0.642794932373694e33),
];

const TERMS_M: [Term; 40] = [
    (0, 0, 0.811384363481847),
    (3, 0, -0.568199310990094e4),
    (8, 0, -0.178657198172556e11),
    (20, 2, 0.795537657613427e32),
    (1, 5, -0.814568209346872e5),
    (3, 5, -0.659774567602874e8),
    (4, 5, -0.152861148659302e11),
    (5, 5, -0.560165667510446e12),
    (1, 6, 0.458384828593949e6),
    (6, 6, -0.385754000383848e14),
    (2, 7, 0.453735800004273e8),
    (4, 8, 0.939454935735563e12),
    (14, 8, 0.266572856432938e28),
    (2, 10, -0.547578313899097e10),
    (5, 10, 0.200725701112386e15),
    (3, 12, 0.185007245563239e13),
    (0, 14, 0.185135446828337e9),
    (1, 14, -0.170451090076385e12),
    (1, 18, 0.157890366037614e15),
    (1, 20, -0.202530509748774e16),
    (28, 20, 0.368193926183570e60),
    (2, 22, 0.170215539458936e18),
    (16, 22, 0.639234909918741e42),
    (0, 24, -0.821698160721956e15),
    (5, 24, -0.795260241872306e24),
    (0, 28, 0.233415869478510e18),
    (3, 28, -0.600079934586803e23),
    (4, 28, 0.594584382273384e25),
    (12, 28, 0.189461279349492e40),
    (16, 28, -0.810093428842645e46),
    (1, 32, 0.188813911076809e22),
    (8, 32, 0.111052244098768e36),
    (14, 32, 0.291133958602503e46),
    (0, 36, -0.329421923951460e22),
    (2, 36, -0.137570282536696e26),
    (3, 36, 0.181508996303902e28),
    (4, 36, -0.346865122768353e30),
    (8, 36, -0.211961148774260e38),
    (14, 36, -0.128617899887675e49),
    (24, 36, 0.479817895699239e65),
];

const TERMS_N: [Term; 39] = [
    (0, -12, 0.280967799943151e-38),
    (3, -12, 0.614869006573609e-30),
    (4, -12, 0.582238667048942e-27),
    (6, -12, 0.390628369238462e-22),
    (7, -12, 0.821445758255119e-20),
    (10, -12, 0.402137961842776e-14),
    (12, -12, 0.651718171878301e-12),
    (14, -12, -0.211773355803058e-7),
    (18, -12, 0.264953354380072e-2),
    (0, -10, -0.135031446451331e-31),
    (3, -10, -0.607246643970893e-23),
    (5, -10, -0.402352115234494e-18),
    (6, -10, -0.744938506925544e-16),
    (8, -10, 0.189917206526237e-12),
    (12, -10, 0.364975183508473e-5),
    (0, -8, 0.177274872361946e-25),
    (3, -8, -0.334952758812999e-18),
    (7, -8, -0.421537726098389e-8),
    (12, -8, -0.391048167929649e-1),
    (2, -6, 0.541276911564176e-13),
    (3, -6, 0.705412100773699e-11),
    (4, -6, 0.258585887897486e-8),
    (2, -5, -0.493111362030162e-10),
    (4, -5, -0.158649699894543e-5),
    (7, -5, -0.525037427886100),
    (4, -4, 0.220019901729615e-2),
    (3, -3, -0.643064132636925e-2),
    (5, -3, 0.629154149015048e2),
    (6, -3, 0.135147318617061e3),
    (0, -2, 0.240560808321713e-6),
    (0, -1, -0.890763306701305e-3),
    (3, -1, -0.440209599407714e4),
    (1, 0, -0.302807107747776e3),
    (0, 1, 0.159158748314599e4),
    (1, 1, 0.232534272709876e6),
    (0, 2, -0.792681207132600e6),
    (1, 4, -0.869871364662769e11),
    (0, 5, 0.354542769185671e12),
    (1, 6, 0.400849240129329e15),
];

const TERMS_O: [Term; 24] = [
    (0, -12, 0.128746023979718e-34),
    (0, -4, -0.735234770382342e-11),
    (0, -1, 0.289078692149150e-2),
    (2, -1, 0.244482731907223),
    (3, -10, 0.141733492030985e-23),
    (4, -12, -0.354533853059476e-28),
    (4, -8, -0.594539202901431e-17),
    (4, -5, -0.585188401782779e-8),
    (4, -4, 0.201377325411803e-5),
    (4, -1, 0.138647388209306e1),
    (5, -4, -0.173959365084772e-4),
    (5, -3, 0.137680878349369e-2),
    (6, -8, 0.814897605805513e-14),
    (7, -12, 0.425596631351839e-25),
    (8, -10, -0.387449113787755e-17),
    (8, -8, 0.139814747930240e-12),
    (8, -4, -0.171849638951521e-2),
    (10, -12, 0.641890529513296e-21),
    (10, -8, 0.118960578072018e-10),
    (14, -12, -0.155282762571611e-17),
    (14, -8, 0.233907907347507e-7),
    (20, -12, -0.174093247766213e-12),
    (20, -10, 0.377682649089149e-8),
    (24, -12, -0.516720236575302e-10),
];

const TERMS_P: [Term; 27] = [
    (0, -1, -0.982825342010366e-4),
    (0, 0, 0.105145700850612e1),
    (0, 1, 0.116033094095084e3),
    (0, 2, 0.324664750281543e4),
    (1, 1, -0.123592348610137e4),
    (2, -1, -0.561403450013495e-1),
    (3, -3, 0.856677401640869e-7),
    (3, 0, 0.236313425393924e3),
    (4, -2, 0.972503292350109e-2),
    (6, -2, -0.103001994531927e1),
    (7, -5, -0.149653706199162e-8),
    (7, -4, -0.215743778861592e-4),
    (8, -2, -0.834452198291445e1),
    (10, -3, 0.586602660564988),
    (12, -12, 0.343480022104968e-25),
    (12, -6, 0.816256095947021e-5),
    (12, -5, 0.294985697916798e-2),
    (14, -10, 0.711730466276584e-16),
    (14, -8, 0.400954763806941e-9),
    (14, -3, 0.107766027032853e2),
    (16, -8, -0.409449599138182e-6),
    (18, -8, -0.729121307758902e-5),
    (20, -10, 0.677107970938909e-8),
    (22, -10, 0.602745973022975e-7),
    (24, -12, -0.382323011855257e-10),
    (24, -8, 0.179946628317437e-2),
    (36, -12, -0.345042834640005e-3),
];

const TERMS_Q: [Term; 24] = [
    (-12, 10, -0.820433843259950e5),
    (-12, 12, 0.473271518461586e11),
    (-10, 6, -0.805950021005413e-1),
    (-10, 7, 0.328600025435980e2),
    (-10, 8, -0.356617029982490e4),
    (-10, 10, -0.172985781433335e10),
    (-8, 8, 0.351769232729192e8),
    (-6, 6, -0.775489259985144e6),
    (-5, 2, 0.710346691966018e-4),
    (-5, 5, 0.993499883820274e5),
    (-4, 3, -0.642094171904570),
    (-4, 4, -0.612842816820083e4),
    (-3, 3, 0.232808472983776e3),
    (-2, 0, -0.142808220416837e-4),
    (-2, 1, -0.643596060678456e-2),
    (-2, 2, -0.428577227475614e1),
    (-2, 4, 0.225689939161918e4),
    (-1, 0, 0.100355651721510e-2),
    (-1, 1, 0.333491455143516),
    (-1, 2, 0.109697576888873e1),
    (0, 0, 0.961917379376452),
    (1, 0, -0.838165632204598e-1),
    (1, 1, 0.247795908411492e1),
    (1, 3, -0.319114969006533e4),
];

const TERMS_R: [Term; 27] = [
    (-8, 6, 0.144165955660863e-2),
    (-8, 14, -0.701438599628258e13),
    (-3, -3, -0.830946716459219e-16),
    (-3, 3, 0.261975135368109),
    (-3, 4, 0.393097214706245e3),
    (-3, 5, -0.104334030654021e5),
    (-3, 8, 0.490112654154211e9),
    (0, -1, -0.147104222772069e-3),
    (0, 0, 0.103602748043408e1),
    (0, 1, 0.305308890065089e1),
    (0, 5, -0.399745276971264e7),
    (3, -6, 0.569233719593750e-11),
    (3, -2, -0.464923504407778e-1),
    (8, -12, -0.535400396512906e-17),
    (8, -10, 0.399988795693162e-12),
    (8, -8, -0.536479560201811e-6),
    (8, -5, 0.159536722411202e-1),
    (10, -12, 0.270303248860217e-14),
    (10, -10, 0.244247453858506e-7),
    (10, -8, -0.983430636716454e-5),
    (10, -6, 0.663513144224454e-1),
    (10, -5, -0.993456957845006e1),
    (10, -4, 0.546491323528491e3),
    (10, -3, -0.143365406393758e5),
    (10, -2, 0.150764974125511e6),
    (12, -12, -0.337209709340105e-9),
    (14, -12, 0.377501980025469e-8),
];

const TERMS_S: [Term; 29] = [
    (-12, 20, -0.532466612140254e23),
    (-12, 24, 0.100415480000824e32),
    (-10, 22, -0.191540001821367e30),
    (-8, 14, 0.105618377808847e17),
    (-6, 36, 0.202281884477061e59),
    (-5, 8, 0.884585472596134e8),
    (-5, 16, 0.166540181638363e23),
    (-4, 6, -0.313563197669111e6),
    (-4, 32, -0.185662327545324e54),
    (-3, 3, -0.624942093918942e-1),
    (-3, 8, -0.504160724132590e10),
    (-2, 4, 0.187514491833092e5),
    (-1, 1, 0.121399979993217e-2),
    (-1, 2, 0.188317043049455e1),
    (-1, 3, -0.167073503962060e4),
    (0, 0, 0.965961650599775),
    (0, 1, 0.294885696802488e1),
    (0, 4, -0.653915627346115e5),
    (0, 28, 0.604012200163444e50),
    (1, 0, -0.198339358557937),
    (1, 32, -0.175984090163501e58),
    (3, 0, 0.356314881403987e1),
    (3, 1, -0.575991255144384e3),
    (3, 2, 0.456213415338071e5),
    (4, 3, -0.109174044987829e8),
    (4, 18, 0.437796099975134e34),
    (4, 24, -0.616552611135792e46),
    (5, 4, 0.193568768917797e10),
    (14, 24, 0.950898170425042e54),
];

const TERMS_T: [Term; 33] = [
    (0, 0, 0.155287249586268e1),
    (0, 1, 0.664235115009031e1),
    (0, 4, -0.289366236727210e4),
    (0, 12, -0.385923202309848e13),
    (1, 0, -0.291002915783761e1),
    (1, 10, -0.829088246858083e12),
    (2, 0, 0.176814899675218e1),
    (2, 6, -0.534686695713469e9),
    (2, 14, 0.160464608687834e18),
    (3, 3, 0.196435366560186e6),
    (3, 8, 0.156637427541729e13),
    (4, 0, -0.178154560260006e1),
    (4, 10, -0.229746237623692e16),
    (7, 3, 0.385659001648006e8),
    (7, 4, 0.110554446790543e10),
    (7, 7, -0.677073830687349e14),
    (7, 20, -0.327910592086523e31),
    (7, 36, -0.341552040860644e51),
    (10, 10, -0.527251339709047e21),
    (10, 12, 0.245375640937055e24),
    (10, 14, -0.168776617209269e27),
    (10, 16, 0.358958955867578e29),
    (10, 22, -0.656475280339411e36),
    (18, 18, 0.355286045512301e39),
    (20, 32, 0.569021454413270e58),
    (22, 22, -0.700584546433113e48),
    (22, 36, -0.705772623326374e65),
    (24, 24, 0.166861176200148e53),
    (28, 28, -0.300475129680486e61),
    (32, 22, -0.668481295196808e51),
    (32, 32, 0.428432338620678e69),
    (32, 36, -0.444227367758304e72),
    (36, 36, -0.281396013562745e77),
];

const TERMS_U: [Term; 38] = [
    (-12, 14, 0.122088349258355e18),
    (-10, 10, 0.104216468608488e10),
    (-10, 12, -0.882666931564652e16),
    (-10, 14, 0.259929510849499e20),
    (-8, 10, 0.222612779142211e15),
    (-8, 12, -0.878473585050085e18),
    (-8, 14, -0.314432577551552e22),
    (-6, 8, -0.216934916996285e13),
    (-6, 12, 0.159079648196849e21),
    (-5, 4, -0.339567617303423e3),
    (-5, 8, 0.884387651337836e13),
    (-5, 12, -0.843405926846418e21),
    (-3, 2, 0.114178193518022e2),
    (-1, -1, -0.122708229235641e-3),
    (-1, 1, -0.106201671767107e3),
    (-1, 12, 0.903443213959313e25),
    (-1, 14, -0.693996270370852e28),
    (0, -3, 0.648916718965575e-8),
    (0, 1, 0.718957567127851e4),
    (1, -2, 0.105581745346187e-2),
    (2, 5, -0.651903203602581e15),
    (2, 10, -0.160116813274676e25),
    (3, -5, -0.510254294237837e-8),
    (5, -4, -0.152355388953402),
    (5, 2, 0.677143292290144e12),
    (5, 3, 0.276378438378930e15),
    (6, -5, 0.116862983141686e-1),
    (6, 2, -0.301426947980171e14),
    (8, -8, 0.169719813884840e-7),
    (8, 8, 0.104674840020929e27),
    (10, -4, -0.108016904560140e5),
    (12, -12, -0.990623601934295e-12),
    (12, -4, 0.536116483602738e7),
    (12, 4, 0.226145963747881e22),
    (14, -12, -0.488731565776210e-9),
    (14, -10, 0.151001548880670e-4),
    (14, -6, -0.227700464643920e5),
    (14, 6, -0.781754507698846e28),
];

const TERMS_V: [Term; 39] = [
    (-10, -8, -0.415652812061591e-54),
    (-8, -12, 0.177441742924043e-60),
    (-6, -12, -0.357078668203377e-54),
    (-6, -3, 0.359252213604114e-25),
    (-6, 5, -0.259123736380269e2),
    (-6, 6, 0.594619766193460e5),
    (-6, 8, -0.624184007103158e11),
    (-6, 10, 0.313080299915944e17),
    (-5, 1, 0.105006446192036e-8),
    (-5, 2, -0.192824336984852e-5),
    (-5, 6, 0.654144373749937e6),
    (-5, 8, 0.513117462865044e13),
    (-5, 10, -0.697595750347391e19),
    (-5, 14, -0.103977184454767e29),
    (-4, -12, 0.119563135540666e-47),
    (-4, -10, -0.436677034051655e-41),
    (-4, -6, 0.926990036530639e-29),
    (-4, 10, 0.587793105620748e21),
    (-3, -3, 0.280375725094731e-17),
    (-3, 10, -0.192359972440634e23),
    (-3, 12, 0.742705723302738e27),
    (-2, 2, -0.517429682450605e2),
    (-2, 4, 0.820612048645469e7),
    (-1, -2, -0.188214882341448e-8),
    (-1, 0, 0.184587261114837e-1),
    (0, -2, -0.135830407782663e-5),
    (0, 6, -0.723681885626348e17),
    (0, 10, -0.223449194054124e27),
    (1, -12, -0.111526741826431e-34),
    (1, -10, 0.276032601145151e-28),
    (3, 3, 0.134856491567853e15),
    (4, -6, 0.652440293345860e-9),
    (4, 3, 0.510655119774360e17),
    (4, 10, -0.468138358908732e32),
    (5, 2, -0.760667491183279e16),
    (8, -12, -0.417247986986821e-18),
    (10, -2, 0.312545677756104e14),
    (12, -3, -0.100375333864186e15),
    (14, 1, 0.247761392329058e27),
];

const TERMS_W: [Term; 35] = [
    (-12, 8, -0.586219133817016e-7),
    (-12, 14, -0.894460355005526e11),
    (-10, -1, 0.531168037519774e-30),
    (-10, 8, 0.109892402329239),
    (-8, 6, -0.575368389425212e-1),
    (-8, 8, 0.228276853990249e5),
    (-8, 14, -0.158548609655002e19),
    (-6, -4, 0.329865748576503e-27),
    (-6, -3, -0.634987981190669e-24),
    (-6, 2, 0.615762068640611e-8),
    (-6, 8, -0.961109240985747e8),
    (-5, -10, -0.406274286652625e-44),
    (-4, -1, -0.471103725498077e-12),
    (-4, 3, 0.725937724828145),
    (-3, -10, 0.187768525763682e-38),
    (-3, 3, -0.103308436323771e4),
    (-2, 1, -0.662552816342168e-1),
    (-2, 2, 0.579514041765710e3),
    (-1, -8, 0.237416732616644e-26),
    (-1, -4, 0.271700235739893e-14),
    (-1, 1, -0.907886213483600e2),
    (0, -12, -0.171242509570207e-36),
    (0, 1, 0.156792067854621e3),
    (1, -1, 0.923261357901470),
    (2, -1, -0.597865988422577e1),
    (2, 2, 0.321988767636389e7),
    (3, -12, -0.399441390042203e-29),
    (3, -5, 0.493429086046981e-7),
    (5, -10, 0.812036983370565e-19),
    (5, -8, -0.207610284654137e-11),
    (5, -6, -0.340821291419719e-6),
    (8, -12, 0.542000573372233e-17),
    (8, -10, -0.856711586510214e-12),
    (10, -12, 0.266170454405981e-13),
    (10, -8, 0.858133791857099e-5),
];

const TERMS_X: [Term; 36] = [
    (-8, 14, 0.377373741298151e19),
    (-6, 10, -0.507100883722913e13),
    (-5, 10, -0.103363225598860e16),
    (-4, 1, 0.184790814320773e-5),
    (-4, 2, -0.924729378390945e-3),
    (-4, 14, -0.425999562292738e24),
    (-3, -2, -0.462307771873973e-12),
    (-3, 12, 0.107319065855767e22),
    (-1, 5, 0.648662492280682e11),
    (0, 0, 0.244200600688281e1),
    (0, 4, -0.851535733484258e10),
    (0, 10, 0.169894481433592e22),
    (1, -10, 0.215780222509020e-26),
    (1, -1, -0.320850551367334),
    (2, 6, -0.382642448458610e17),
    (3, -12, -0.275386077674421e-28),
    (3, 0, -0.563199253391666e6),
    (3, 8, -0.326068646279314e21),
    (4, 3, 0.397949001553184e14),
    (5, -6, 0.100824008584757e-6),
    (5, -2, 0.162234569738433e5),
    (5, 1, -0.432355225319745e11),
    (6, 1, -0.592874245598610e12),
    (8, -6, 0.133061647281106e1),
    (8, -3, 0.157338197797544e7),
    (8, 1, 0.258189614270853e14),
    (8, 8, 0.262413209706358e25),
    (10, -8, -0.920011937431142e-1),
    (12, -10, 0.220213765905426e-2),
    (12, -8, -0.110433759109547e2),
    (12, -5, 0.847004870612087e7),
    (12, -4, -0.592910695762536e9),
    (14, -12, -0.183027173269660e-4),
    (14, -10, 0.181339603516302),
    (14, -8, -0.119228759669889e4),
    (14, -6, 0.430867658061468e7),
];

const TERMS_Y: [Term; 20] = [
    (0, -3, -0.525597995024633e-9),
    (0, 1, 0.583441305228407e4),
    (0, 5, -0.134778968457925e17),
    (0, 8, 0.118973500934212e26),
    (1, 8, -0.159096490904708e27),
    (2, -4, -0.315839902302021e-6),
    (2, -1, 0.496212197158239e3),
    (2, 4, 0.327777227273171e19),
    (2, 5, -0.527114657850696e22),
    (3, -8, 0.210017506281863e-16),
    (3, 4, 0.705106224399834e21),
    (3, 8, -0.266713136106469e31),
    (4, -6, -0.145370512554562e-7),
    (4, 6, 0.149333917053130e28),
    (5, -2, -0.149795620287641e8),
    (5, 1, -0.381881906271100e16),
    (8, -8, 0.724660165585797e-4),
    (8, -2, -0.937808169550193e14),
    (10, -5, 0.514411468376383e10),
    (12, -8, -0.828198594040141e5),
];

const TERMS_Z: [Term; 23] = [
    (-8, 3, 0.244007892290650e-10),
    (-6, 6, -0.463057430331242e7),
    (-5, 6, 0.728803274777712e10),
    (-5, 8, 0.327776302858856e16),
    (-4, 5, -0.110598170118409e10),
    (-4, 6, -0.323899915729957e13),
    (-4, 8, 0.923814007023245e16),
    (-3, -2, 0.842250080413712e-12),
    (-3, 5, 0.663221436245506e12),
    (-3, 6, -0.167170186672139e15),
    (-2, 2, 0.253749358701391e4),
    (-1, -6, -0.819731559610523e-20),
    (0, 3, 0.328380587890663e12),
    (1, 1, -0.625004791171543e8),
    (2, 6, 0.803197957462023e21),
    (3, -6, -0.204397011338353e-10),
    (3, -2, -0.378391047055938e4),
    (6, -6, 0.972876545938620e-2),
    (6, -5, 0.154355721681459e2),
    (6, -4, -0.373962862928643e4),
    (6, -1, -0.682859011374572e11),
    (8, -8, -0.248488015614543e-3),
    (8, -4, 0.394536049497068e7),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use Subregion::*;

    // Two points per subregion, (subregion, p, T, v).
    const CASES: [(Subregion, f64, f64, f64); 52] = [
        (A, 50.0, 630.0, 1.470_853_100e-3),
        (A, 80.0, 670.0, 1.503_831_359e-3),
        (B, 50.0, 710.0, 2.204_728_587e-3),
        (B, 80.0, 750.0, 1.973_692_940e-3),
        (C, 20.0, 630.0, 1.761_696_406e-3),
        (C, 30.0, 650.0, 1.819_560_617e-3),
        (D, 26.0, 656.0, 2.245_587_720e-3),
        (D, 30.0, 670.0, 2.506_897_702e-3),
        (E, 26.0, 661.0, 2.970_225_962e-3),
        (E, 30.0, 675.0, 3.004_627_086e-3),
        (F, 26.0, 671.0, 5.019_029_401e-3),
        (F, 30.0, 690.0, 4.656_470_142e-3),
        (G, 23.6, 649.0, 2.163_198_378e-3),
        (G, 24.0, 650.0, 2.166_044_161e-3),
        (H, 23.6, 652.0, 2.651_081_407e-3),
        (H, 24.0, 654.0, 2.967_802_335e-3),
        (I, 23.6, 653.0, 3.273_916_816e-3),
        (I, 24.0, 655.0, 3.550_329_864e-3),
        (J, 23.5, 655.0, 4.545_001_142e-3),
        (J, 24.0, 660.0, 5.100_267_704e-3),
        (K, 23.0, 660.0, 6.109_525_997e-3),
        (K, 24.0, 670.0, 6.427_325_645e-3),
        (L, 22.6, 646.0, 2.117_860_851e-3),
        (L, 23.0, 646.0, 2.062_374_674e-3),
        (M, 22.6, 648.6, 2.533_063_780e-3),
        (M, 22.8, 649.3, 2.572_971_781e-3),
        (N, 22.6, 649.0, 2.923_432_711e-3),
        (N, 22.8, 649.7, 2.913_311_494e-3),
        (O, 22.6, 649.1, 3.131_208_996e-3),
        (O, 22.8, 649.9, 3.221_160_278e-3),
        (P, 22.6, 649.4, 3.715_596_186e-3),
        (P, 22.8, 650.2, 3.664_754_790e-3),
        (Q, 21.1, 640.0, 1.970_999_272e-3),
        (Q, 21.8, 643.0, 2.043_919_161e-3),
        (R, 21.1, 644.0, 5.251_009_921e-3),
        (R, 21.8, 648.0, 5.256_844_741e-3),
        (S, 19.1, 635.0, 1.932_829_079e-3),
        (S, 20.0, 638.0, 1.985_387_227e-3),
        (T, 17.0, 626.0, 8.483_262_001e-3),
        (T, 20.0, 640.0, 6.227_528_101e-3),
        (U, 21.5, 644.6, 2.268_366_647e-3),
        (U, 22.0, 646.1, 2.296_350_553e-3),
        (V, 22.5, 648.6, 2.832_373_260e-3),
        (V, 22.3, 647.9, 2.811_424_405e-3),
        (W, 22.15, 647.5, 3.694_032_281e-3),
        (W, 22.3, 648.1, 3.622_226_305e-3),
        (X, 22.11, 648.0, 4.528_072_649e-3),
        (X, 22.3, 649.0, 4.556_905_799e-3),
        (Y, 22.0, 646.84, 2.698_354_719e-3),
        (Y, 22.064, 647.05, 2.717_655_648e-3),
        (Z, 22.0, 646.89, 3.798_732_962e-3),
        (Z, 22.064, 647.15, 3.701_940_010e-3),
    ];

    #[test]
    fn locates_subregions() -> Result<(), OutOfRange> {
        for (expected, p, t, _) in CASES {
            assert_eq!(Subregion::locate(p, t)?, expected, "p = {p}, T = {t}");
        }
        Ok(())
    }

    #[test]
    fn specific_volumes() -> Result<(), OutOfRange> {
        for (_, p, t, v) in CASES {
            assert_relative_eq!(specific_volume_pt(p, t)?, v, max_relative = 1e-8);
        }
        Ok(())
    }

    #[test]
    fn boundary_curves() {
        let log_curves = [
            (&BOUNDARY_AB, 40.0_f64, 693.034_140_8),
            (&BOUNDARY_OP, 22.8, 650.010_694_3),
            (&BOUNDARY_WX, 22.3, 648.204_948_0),
        ];
        for (curve, p, t) in log_curves {
            assert_relative_eq!(polynomial::series(curve, p.ln()), t, max_relative = 1e-9);
        }

        let curves: [(&[Coefficient], f64, f64); 8] = [
            (&BOUNDARY_CD, 25.0, 649.365_920_8),
            (&BOUNDARY_GH, 23.0, 649.887_375_9),
            (&BOUNDARY_IJ, 23.0, 651.577_809_1),
            (&BOUNDARY_JK, 23.0, 655.833_834_4),
            (&BOUNDARY_MN, 22.8, 649.605_413_3),
            (&BOUNDARY_QU, 22.0, 645.635_502_7),
            (&BOUNDARY_RX, 22.0, 648.262_275_4),
            (&BOUNDARY_UV, 22.3, 647.799_612_1),
        ];
        for (curve, p, t) in curves {
            assert_relative_eq!(polynomial::series(curve, p), t, max_relative = 1e-9);
        }
    }

    #[test]
    fn qu_boundary_belongs_to_3q() -> Result<(), OutOfRange> {
        let p = 22.0;
        let t3qu = polynomial::series(&BOUNDARY_QU, p);

        assert_eq!(Subregion::locate(p, t3qu)?, Subregion::Q);
        assert_eq!(Subregion::locate(p, t3qu + 1e-6)?, Subregion::U);
        Ok(())
    }

    #[test]
    fn rejects_pressure_below_region() {
        let error = specific_volume_pt(10.0, 630.0).unwrap_err();

        assert_eq!(error.quantity(), Quantity::Pressure);
        assert_relative_eq!(error.limit(), DERIVED.ps13);
    }
}
