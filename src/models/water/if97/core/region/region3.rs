//! Region 3: near-critical fluid, bounded by Regions 1 and 2, the B23 curve and 100 MPa.
//!
//! The equation of state is a Helmholtz free energy in `(ρ, T)`. The backward
//! equations split the region into subregions 3a and 3b along the critical
//! isentrope (for `s`) or along `h3ab(p)` (for `h`). The `v(p, T)` equations
//! and their 26 subregions live in [`volume`].

mod volume;

pub(crate) use volume::specific_volume_pt;

use tracing::trace;

use super::Properties;
use crate::models::water::if97::core::{
    constants::{DERIVED, R, RHOC, TC},
    polynomial::{self, Derivatives},
};

/// Coefficient of the `ln δ` term of the Helmholtz free energy.
const N1: f64 = 0.106_580_700_285_13e1;

/// Backward-equation subregion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subregion {
    A,
    B,
}

impl Subregion {
    /// Splits on the `h3ab(p)` boundary.
    pub(crate) fn from_ph(p: f64, h: f64) -> Self {
        let subregion = if h < enthalpy_3ab(p) {
            Subregion::A
        } else {
            Subregion::B
        };
        trace!(p, h, ?subregion, "region 3 subregion from (p, h)");
        subregion
    }

    /// Splits on the critical entropy.
    pub(crate) fn from_s(s: f64) -> Self {
        if s > DERIVED.sc {
            Subregion::B
        } else {
            Subregion::A
        }
    }
}

/// Enthalpy on the 3a/3b boundary, a cubic in pressure.
pub(crate) fn enthalpy_3ab(p: f64) -> f64 {
    polynomial::series(&ENTHALPY_3AB, p)
}

/// A state evaluated from the Region 3 Helmholtz free energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HelmholtzState {
    density: f64,
    temperature: f64,
    delta: f64,
    tau: f64,
    phi: Derivatives,
}

impl HelmholtzState {
    /// Evaluates Region 3 at density `rho` and temperature `t`.
    pub(crate) fn new(rho: f64, t: f64) -> Self {
        let delta = rho / RHOC;
        let tau = TC / t;
        let d = polynomial::derivatives(&HELMHOLTZ, delta, tau);

        Self {
            density: rho,
            temperature: t,
            delta,
            tau,
            phi: Derivatives {
                value: N1 * delta.ln() + d.value,
                dx: N1 / delta + d.dx,
                dxx: -N1 / (delta * delta) + d.dxx,
                ..d
            },
        }
    }

    /// Relative pressure coefficient `αp = (∂p/∂T)v / p`, 1/K.
    pub(crate) fn relative_pressure_coefficient(&self) -> f64 {
        (1.0 - self.tau * self.phi.dxy / self.phi.dx) / self.temperature
    }

    /// Isothermal stress coefficient `βp = −(∂p/∂v)T / p`, kg/m³.
    pub(crate) fn isothermal_stress_coefficient(&self) -> f64 {
        self.density * (2.0 + self.delta * self.phi.dxx / self.phi.dx)
    }

    /// `2δφδ + δ²φδδ`, the reduced isothermal bulk modulus.
    fn delta_term(&self) -> f64 {
        let delta = self.delta;
        2.0 * delta * self.phi.dx + delta * delta * self.phi.dxx
    }

    /// `δφδ − δτφδτ`.
    fn delta_tau_term(&self) -> f64 {
        self.delta * self.phi.dx - self.delta * self.tau * self.phi.dxy
    }
}

impl Properties for HelmholtzState {
    fn pressure(&self) -> f64 {
        self.delta * self.phi.dx * self.density * R * self.temperature / 1e3
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn specific_volume(&self) -> f64 {
        1.0 / self.density
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn specific_enthalpy(&self) -> f64 {
        (self.tau * self.phi.dy + self.delta * self.phi.dx) * R * self.temperature
    }

    fn specific_entropy(&self) -> f64 {
        (self.tau * self.phi.dy - self.phi.value) * R
    }

    fn specific_internal_energy(&self) -> f64 {
        self.tau * self.phi.dy * R * self.temperature
    }

    fn specific_helmholtz_free_energy(&self) -> f64 {
        self.phi.value * R * self.temperature
    }

    fn isobaric_heat_capacity(&self) -> f64 {
        let x = self.delta_tau_term();
        (-self.tau * self.tau * self.phi.dyy + x * x / self.delta_term()) * R
    }

    fn isochoric_heat_capacity(&self) -> f64 {
        -self.tau * self.tau * self.phi.dyy * R
    }

    fn speed_of_sound(&self) -> f64 {
        let x = self.delta_tau_term();
        let bulk = self.delta_term() - x * x / (self.tau * self.tau * self.phi.dyy);

        (bulk * 1e3 * R * self.temperature).sqrt()
    }

    fn isobaric_cubic_expansion_coefficient(&self) -> f64 {
        let phi = &self.phi;
        let numerator = phi.dx - self.tau * phi.dxy;

        numerator / (2.0 * phi.dx + self.delta * phi.dxx) / self.temperature
    }

    fn isothermal_compressibility(&self) -> f64 {
        1e3 / self.delta_term() / (self.density * R * self.temperature)
    }
}

/// Pressure from density and temperature.
pub(crate) fn pressure_rho_t(rho: f64, t: f64) -> f64 {
    HelmholtzState::new(rho, t).pressure()
}

/// Backward equation `T(p, h)`.
pub(crate) fn temperature_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;

    match Subregion::from_ph(p, h) {
        Subregion::A => {
            760.0 * polynomial::evaluate(&TEMPERATURE_PH_A, pi + 0.240, h / 2300.0 - 0.615)
        }
        Subregion::B => {
            860.0 * polynomial::evaluate(&TEMPERATURE_PH_B, pi + 0.298, h / 2800.0 - 0.720)
        }
    }
}

/// Backward equation `v(p, h)`.
pub(crate) fn specific_volume_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;

    match Subregion::from_ph(p, h) {
        Subregion::A => 0.0028 * polynomial::evaluate(&VOLUME_PH_A, pi + 0.128, h / 2100.0 - 0.727),
        Subregion::B => {
            0.0088 * polynomial::evaluate(&VOLUME_PH_B, pi + 0.0661, h / 2800.0 - 0.720)
        }
    }
}

/// Backward equation `T(p, s)`.
pub(crate) fn temperature_ps(p: f64, s: f64) -> f64 {
    let pi = p / 100.0;

    match Subregion::from_s(s) {
        Subregion::A => {
            760.0 * polynomial::evaluate(&TEMPERATURE_PS_A, pi + 0.240, s / 4.4 - 0.703)
        }
        Subregion::B => {
            860.0 * polynomial::evaluate(&TEMPERATURE_PS_B, pi + 0.760, s / 5.3 - 0.818)
        }
    }
}

/// Backward equation `v(p, s)`.
pub(crate) fn specific_volume_ps(p: f64, s: f64) -> f64 {
    let pi = p / 100.0;

    match Subregion::from_s(s) {
        Subregion::A => 0.0028 * polynomial::evaluate(&VOLUME_PS_A, pi + 0.187, s / 4.4 - 0.755),
        Subregion::B => 0.0088 * polynomial::evaluate(&VOLUME_PS_B, pi + 0.298, s / 5.3 - 0.816),
    }
}

/// Backward equation `p(h, s)`.
pub(crate) fn pressure_hs(h: f64, s: f64) -> f64 {
    match Subregion::from_s(s) {
        Subregion::A => {
            99.0 * polynomial::evaluate(&PRESSURE_HS_A, h / 2300.0 - 1.01, s / 4.4 - 0.75)
        }
        Subregion::B => {
            16.6 / polynomial::evaluate(&PRESSURE_HS_B, h / 2800.0 - 0.681, s / 5.3 - 0.792)
        }
    }
}

/// Temperature from `(h, s)`, through `p(h, s)` and `T(p, h)`.
pub(crate) fn temperature_hs(h: f64, s: f64) -> f64 {
    temperature_ph(pressure_hs(h, s), h)
}

/// Specific volume from `(h, s)`, through `p(h, s)` and `v(p, h)`.
pub(crate) fn specific_volume_hs(h: f64, s: f64) -> f64 {
    specific_volume_ph(pressure_hs(h, s), h)
}

const ENTHALPY_3AB: [(i32, f64); 4] = [
    (0, 0.201464004206875e4),
    (1, 0.374696550136983e1),
    (2, -0.219921901054187e-1),
    (3, 0.875131686009950e-4),
];

const HELMHOLTZ: [(i32, i32, f64); 39] = [
    (0, 0, -0.15732845290239e2),
    (0, 1, 0.20944396974307e2),
    (0, 2, -0.76867707878716e1),
    (0, 7, 0.26185947787954e1),
    (0, 10, -0.28080781148620e1),
    (0, 12, 0.12053369696517e1),
    (0, 23, -0.84566812812502e-2),
    (1, 2, -0.12654315477714e1),
    (1, 6, -0.11524407806681e1),
    (1, 15, 0.88521043984318),
    (1, 17, -0.64207765181607),
    (2, 0, 0.38493460186671),
    (2, 2, -0.85214708824206),
    (2, 6, 0.48972281541877e1),
    (2, 7, -0.30502617256965e1),
    (2, 22, 0.39420536879154e-1),
    (2, 26, 0.12558408424308),
    (3, 0, -0.27999329698710),
    (3, 2, 0.13899799569460e1),
    (3, 4, -0.20189915023570e1),
    (3, 16, -0.82147637173963e-2),
    (3, 26, -0.47596035734923),
    (4, 0, 0.43984074473500e-1),
    (4, 2, -0.44476435428739),
    (4, 4, 0.90572070719733),
    (4, 26, 0.70522450087967),
    (5, 1, 0.10770512626332),
    (5, 3, -0.32913623258954),
    (5, 26, -0.50871062041158),
    (6, 0, -0.22175400873096e-1),
    (6, 2, 0.94260751665092e-1),
    (6, 26, 0.16436278447961),
    (7, 2, -0.13503372241348e-1),
    (8, 26, -0.14834345352472e-1),
    (9, 2, 0.57922953628084e-3),
    (9, 26, 0.32308904703711e-2),
    (10, 0, 0.80964802996215e-4),
    (10, 1, -0.16557679795037e-3),
    (11, 26, -0.44923899061815e-4),
];

const TEMPERATURE_PH_A: [(i32, i32, f64); 31] = [
    (-12, 0, -1.33645667811215e-7),
    (-12, 1, 4.55912656802978e-6),
    (-12, 2, -1.46294640700979e-5),
    (-12, 6, 6.39341312970080e-3),
    (-12, 14, 3.72783927268847e2),
    (-12, 16, -7.18654377460447e3),
    (-12, 20, 5.73494752103400e5),
    (-12, 22, -2.67569329111439e6),
    (-10, 1, -3.34066283302614e-5),
    (-10, 5, -2.45479214069597e-2),
    (-10, 12, 4.78087847764996e1),
    (-8, 0, 7.64664131818904e-6),
    (-8, 2, 1.28350627676972e-3),
    (-8, 4, 1.71219081377331e-2),
    (-8, 10, -8.51007304583213),
    (-5, 2, -1.36513461629781e-2),
    (-3, 0, -3.84460997596657e-6),
    (-2, 1, 3.37423807911655e-3),
    (-2, 3, -5.51624873066791e-1),
    (-2, 4, 7.29202277107470e-1),
    (-1, 0, -9.92522757376041e-3),
    (-1, 2, -1.19308831407288e-1),
    (0, 0, 7.93929190615421e-1),
    (0, 1, 4.54270731799386e-1),
    (1, 1, 2.09998591259910e-1),
    (3, 0, -6.42109823904738e-3),
    (3, 1, -2.35155868604540e-2),
    (4, 0, 2.52233108341612e-3),
    (4, 3, -7.64885133368119e-3),
    (10, 4, 1.36176427574291e-2),
    (12, 5, -1.33027883575669e-2),
];

const TEMPERATURE_PH_B: [(i32, i32, f64); 33] = [
    (-12, 0, 3.23254573644920e-5),
    (-12, 1, -1.27575556587181e-4),
    (-10, 0, -4.75851877356068e-4),
    (-10, 1, 1.56183014181602e-3),
    (-10, 5, 1.05724860113781e-1),
    (-10, 10, -8.58514221132534e1),
    (-10, 12, 7.24140095480911e2),
    (-8, 0, 2.96475810273257e-3),
    (-8, 1, -5.92721983365988e-3),
    (-8, 2, -1.26305422818666e-2),
    (-8, 4, -1.15716196364853e-1),
    (-8, 10, 8.49000969739595e1),
    (-6, 0, -1.08602260086615e-2),
    (-6, 1, 1.54304475328851e-2),
    (-6, 2, 7.50455441524466e-2),
    (-4, 0, 2.52520973612982e-2),
    (-4, 1, -6.02507901232996e-2),
    (-3, 5, -3.07622221350501),
    (-2, 0, -5.74011959864879e-2),
    (-2, 4, 5.03471360939849),
    (-1, 2, -9.25081888584834e-1),
    (-1, 4, 3.91733882917546),
    (-1, 6, -7.73146007130190e1),
    (-1, 10, 9.49308762098587e3),
    (-1, 14, -1.41043719679409e6),
    (-1, 16, 8.49166230819026e6),
    (0, 0, 8.61095729446704e-1),
    (0, 2, 3.23346442811720e-1),
    (1, 1, 8.73281936020439e-1),
    (3, 1, -4.36653048526683e-1),
    (5, 1, 2.86596714529479e-1),
    (6, 1, -1.31778331276228e-1),
    (8, 1, 6.76682064330275e-3),
];

const TEMPERATURE_PS_A: [(i32, i32, f64); 33] = [
    (-12, 28, 0.150042008263875e10),
    (-12, 32, -0.159397258480424e12),
    (-10, 4, 0.502181140217975e-3),
    (-10, 10, -0.672057767855466e2),
    (-10, 12, 0.145058545404456e4),
    (-10, 14, -0.823889534888890e4),
    (-8, 5, -0.154852214233853),
    (-8, 7, 0.112305046746695e2),
    (-8, 8, -0.297000213482822e2),
    (-8, 28, 0.438565132635495e11),
    (-6, 2, 0.137837838635464e-2),
    (-6, 6, -0.297478527157462e1),
    (-6, 32, 0.971777947349413e13),
    (-5, 0, -0.571527767052398e-4),
    (-5, 14, 0.288307949778420e5),
    (-5, 32, -0.744428289262703e14),
    (-4, 6, 0.128017324848921e2),
    (-4, 10, -0.368275545889071e3),
    (-4, 36, 0.664768904779177e16),
    (-2, 1, 0.449359251958880e-1),
    (-2, 4, -0.422897836099655e1),
    (-1, 1, -0.240614376434179),
    (-1, 6, -0.474341365254924e1),
    (0, 0, 0.724093999126110),
    (0, 1, 0.923874349695897),
    (0, 4, 0.399043655281015e1),
    (1, 0, 0.384066651868009e-1),
    (2, 0, -0.359344365571848e-2),
    (2, 3, -0.735196448821653),
    (3, 2, 0.188367048396131),
    (8, 0, 0.141064266818704e-3),
    (8, 1, -0.257418501496337e-2),
    (10, 2, 0.123220024851555e-2),
];

const TEMPERATURE_PS_B: [(i32, i32, f64); 28] = [
    (-12, 1, 0.527111701601660),
    (-12, 3, -0.401317830052742e2),
    (-12, 4, 0.153020073134484e3),
    (-12, 7, -0.224799398218827e4),
    (-8, 0, -0.193993484669048),
    (-8, 1, -0.140467557893768e1),
    (-8, 3, 0.426799878114024e2),
    (-6, 0, 0.752810643416743),
    (-6, 2, 0.226657238616417e2),
    (-6, 4, -0.622873556909932e3),
    (-5, 0, -0.660823667935396),
    (-5, 1, 0.841267087271658),
    (-5, 2, -0.253717501764397e2),
    (-5, 4, 0.485708963532948e3),
    (-5, 6, 0.880531517490555e3),
    (-4, 12, 0.265015592794626e7),
    (-3, 1, -0.359287150025783),
    (-3, 6, -0.656991567673753e3),
    (-2, 2, 0.241768149185367e1),
    (0, 0, 0.856873461222588),
    (2, 1, 0.655143675313458),
    (3, 1, -0.213535213206406),
    (4, 0, 0.562974957606348e-2),
    (5, 24, -0.316955725450471e15),
    (6, 0, -0.699997000152457e-3),
    (8, 3, 0.119845803210767e-1),
    (12, 1, 0.193848122022095e-4),
    (14, 2, -0.215095749182309e-4),
];

const VOLUME_PH_A: [(i32, i32, f64); 32] = [
    (-12, 6, 5.29944062966028e-3),
    (-12, 8, -1.70099690234461e-1),
    (-12, 12, 1.11323814312927e1),
    (-12, 18, -2.17898123145125e3),
    (-10, 4, -5.06061827980875e-4),
    (-10, 7, 5.56495239685324e-1),
    (-10, 10, -9.43672726094016),
    (-8, 5, -2.97856807561527e-1),
    (-8, 12, 9.39353943717186e1),
    (-6, 3, 1.92944939465981e-2),
    (-6, 4, 4.21740664704763e-1),
    (-6, 22, -3.68914126282330e6),
    (-4, 2, -7.37566847600639e-3),
    (-4, 3, -3.54753242424366e-1),
    (-3, 7, -1.99768169338727),
    (-2, 3, 1.15456297059049),
    (-2, 16, 5.68366875815960e3),
    (-1, 0, 8.08169540124668e-3),
    (-1, 1, 1.72416341519307e-1),
    (-1, 2, 1.04270175292927),
    (-1, 3, -2.97691372792847e-1),
    (0, 0, 5.60394465163593e-1),
    (0, 1, 2.75234661176914e-1),
    (1, 0, -1.48347894866012e-1),
    (1, 1, -6.51142513478515e-2),
    (1, 2, -2.92468715386302),
    (2, 0, 6.64876096952665e-2),
    (2, 2, 3.52335014263844),
    (3, 0, -1.46340792313332e-2),
    (4, 2, -2.24503486668184),
    (5, 2, 1.10533464706142),
    (8, 2, -4.08757344495612e-2),
];

const VOLUME_PH_B: [(i32, i32, f64); 30] = [
    (-12, 0, -2.25196934336318e-9),
    (-12, 1, 1.40674363313486e-8),
    (-8, 0, 2.33784085280560e-6),
    (-8, 1, -3.31833715229001e-5),
    (-8, 3, 1.07956778514318e-3),
    (-8, 6, -2.71382067378863e-1),
    (-8, 7, 1.07202262490333),
    (-8, 8, -8.53821329075382e-1),
    (-6, 0, -2.15214194340526e-5),
    (-6, 1, 7.69656088222730e-4),
    (-6, 2, -4.31136580433864e-3),
    (-6, 5, 4.53342167309331e-1),
    (-6, 6, -5.07749535873652e-1),
    (-6, 10, -1.00475154528389e2),
    (-4, 3, -2.19201924648793e-1),
    (-4, 6, -3.21087965668917),
    (-4, 10, 6.07567815637771e2),
    (-3, 0, 5.57686450685932e-4),
    (-3, 2, 1.87499040029550e-1),
    (-2, 1, 9.05368030448107e-3),
    (-2, 2, 2.85417173048685e-1),
    (-1, 0, 3.29924030996098e-2),
    (-1, 1, 2.39897419685483e-1),
    (-1, 4, 4.82754995951394),
    (-1, 5, -1.18035753702231e1),
    (0, 0, 1.69490044091791e-1),
    (1, 0, -1.79967222507787e-2),
    (1, 1, 3.71810116332674e-2),
    (2, 2, -5.36288335065096e-2),
    (2, 6, 1.60697101092520),
];

const VOLUME_PS_A: [(i32, i32, f64); 28] = [
    (-12, 10, 0.795544074093975e2),
    (-12, 12, -0.238261242984590e4),
    (-12, 14, 0.176813100617787e5),
    (-10, 4, -0.110524727080379e-2),
    (-10, 8, -0.153213833655326e2),
    (-10, 10, 0.297544599376982e3),
    (-10, 20, -0.350315206871242e8),
    (-8, 5, 0.277513761062119),
    (-8, 6, -0.523964271036888),
    (-8, 14, -0.148011182995403e6),
    (-8, 16, 0.160014899374266e7),
    (-6, 28, 0.170802322663427e13),
    (-5, 1, 0.246866996006494e-3),
    (-4, 5, 0.165326084797980e1),
    (-3, 2, -0.118008384666987),
    (-3, 4, 0.253798642355900e1),
    (-2, 3, 0.965127704669424),
    (-2, 8, -0.282172420532826e2),
    (-1, 1, 0.203224612353823),
    (-1, 2, 0.110648186063513e1),
    (0, 0, 0.526127948451280),
    (0, 1, 0.277000018736321),
    (0, 3, 0.108153340501132e1),
    (1, 0, -0.744127885357893e-1),
    (2, 0, 0.164094443541384e-1),
    (4, 2, -0.680468275301065e-1),
    (5, 2, 0.257988576101640e-1),
    (6, 0, -0.145749861944416e-3),
];

const VOLUME_PS_B: [(i32, i32, f64); 31] = [
    (-12, 0, 0.591599780322238e-4),
    (-12, 1, -0.185465997137856e-2),
    (-12, 2, 0.104190510480013e-1),
    (-12, 3, 0.598647302038590e-2),
    (-12, 5, -0.771391189901699),
    (-12, 6, 0.172549765557036e1),
    (-10, 0, -0.467076079846526e-3),
    (-10, 1, 0.134533823384439e-1),
    (-10, 2, -0.808094336805495e-1),
    (-10, 4, 0.508139374365767),
    (-8, 0, 0.128584643361683e-2),
    (-5, 1, -0.163899353915435e1),
    (-5, 2, 0.586938199318063e1),
    (-5, 3, -0.292466667918613e1),
    (-4, 0, -0.614076301499537e-2),
    (-4, 1, 0.576199014049172e1),
    (-4, 2, -0.121613320606788e2),
    (-4, 3, 0.167637540957944e1),
    (-3, 1, -0.744135838773463e1),
    (-2, 0, 0.378168091437659e-1),
    (-2, 1, 0.401432203027688e1),
    (-2, 2, 0.160279837479185e2),
    (-2, 3, 0.317848779347728e1),
    (-2, 4, -0.358362310304853e1),
    (-2, 12, -0.115995260446827e7),
    (0, 0, 0.199256573577909),
    (0, 1, -0.122270624794624),
    (0, 2, -0.191449143716586e2),
    (1, 0, -0.150448002905284e-1),
    (1, 2, 0.146407900162154e2),
    (2, 2, -0.327477787188230e1),
];

const PRESSURE_HS_A: [(i32, i32, f64); 33] = [
    (0, 0, 0.770889828326934e1),
    (0, 1, -0.260835009128688e2),
    (0, 5, 0.267416218930389e3),
    (1, 0, 0.172221089496844e2),
    (1, 3, -0.293542332145970e3),
    (1, 4, 0.614135601882478e3),
    (1, 8, -0.610562757725674e5),
    (1, 14, -0.651272251118219e8),
    (2, 6, 0.735919313521937e5),
    (2, 16, -0.116646505914191e11),
    (3, 0, 0.355267086434461e2),
    (3, 2, -0.596144543825955e3),
    (3, 3, -0.475842430145708e3),
    (4, 0, 0.696781965359503e2),
    (4, 1, 0.335674250377312e3),
    (4, 4, 0.250526809130882e5),
    (4, 5, 0.146997380630766e6),
    (5, 28, 0.538069315091534e20),
    (6, 28, 0.143619827291346e22),
    (7, 24, 0.364985866165994e20),
    (8, 1, -0.254741561156775e4),
    (10, 32, 0.240120197096563e28),
    (10, 36, -0.393847464679496e30),
    (14, 22, 0.147073407024852e25),
    (18, 28, -0.426391250432059e32),
    (20, 36, 0.194509340621077e39),
    (22, 16, 0.666212132114896e24),
    (22, 28, 0.706777016552858e34),
    (24, 36, 0.175563621975576e42),
    (28, 16, 0.108408607429124e29),
    (28, 36, 0.730872705175151e44),
    (32, 10, 0.159145847398870e25),
    (32, 28, 0.377121605943324e41),
];

const PRESSURE_HS_B: [(i32, i32, f64); 35] = [
    (-12, 2, 0.125244360717979e-12),
    (-12, 10, -0.126599322553713e-1),
    (-12, 12, 0.506878030140626e1),
    (-12, 14, 0.317847171154202e2),
    (-12, 20, -0.391041161399932e6),
    (-10, 2, -0.975733406392044e-10),
    (-10, 10, -0.186312419488279e2),
    (-10, 14, 0.510973543414101e3),
    (-10, 18, 0.373847005822362e6),
    (-8, 2, 0.299804024666572e-7),
    (-8, 8, 0.200544393820342e2),
    (-6, 2, -0.498030487662829e-5),
    (-6, 6, -0.102301806360030e2),
    (-6, 7, 0.552819126990325e2),
    (-6, 8, -0.206211367510878e3),
    (-5, 10, -0.794012232324823e4),
    (-4, 4, 0.782248472028153e1),
    (-4, 5, -0.586544326902468e2),
    (-4, 8, 0.355073647696481e4),
    (-3, 1, -0.115303107290162e-3),
    (-3, 3, -0.175092403171802e1),
    (-3, 5, 0.257981687748160e3),
    (-3, 6, -0.727048374179467e3),
    (-2, 0, 0.121644822609198e-3),
    (-2, 1, 0.393137871762692e-1),
    (-1, 0, 0.704181005909296e-2),
    (0, 3, -0.829108200698110e2),
    (2, 0, -0.265178818131250),
    (2, 1, 0.137531682453991e2),
    (5, 0, -0.522394090753046e2),
    (6, 1, 0.240556298941048e4),
    (8, 1, -0.227361631268929e5),
    (10, 1, 0.890746343932567e5),
    (14, 3, -0.239234565822486e8),
    (14, 7, 0.568795808129714e10),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::water::if97::core::{constants::T13, region::boundary::temperature_b23};

    #[test]
    fn forward_equation() {
        // (ρ, T, p, h, u, s, cp, cv, w)
        let cases = [
            (500.0, 650.0, 25.583_701_8, 1_863.430_19, 1_812.262_79, 4.054_272_73, 13.893_571_7, 3.191_317_87, 502.005_554),
            (200.0, 650.0, 22.293_064_3, 2_375.124_01, 2_263.658_68, 4.854_387_92, 44.657_934_2, 4.041_180_76, 383.444_594),
            (500.0, 750.0, 78.309_563_9, 2_258.688_45, 2_102.069_32, 4.469_719_06, 6.341_653_59, 2.717_016_77, 760.696_041),
        ];

        for (rho, t, p, h, u, s, cp, cv, w) in cases {
            let state = HelmholtzState::new(rho, t);

            assert_relative_eq!(state.pressure(), p, max_relative = 1e-8);
            assert_relative_eq!(state.specific_enthalpy(), h, max_relative = 1e-8);
            assert_relative_eq!(state.specific_internal_energy(), u, max_relative = 1e-8);
            assert_relative_eq!(state.specific_entropy(), s, max_relative = 1e-8);
            assert_relative_eq!(state.isobaric_heat_capacity(), cp, max_relative = 1e-8);
            assert_relative_eq!(state.isochoric_heat_capacity(), cv, max_relative = 1e-8);
            assert_relative_eq!(state.speed_of_sound(), w, max_relative = 1e-8);
            assert_relative_eq!(pressure_rho_t(rho, t), p, max_relative = 1e-8);
        }
    }

    #[test]
    fn expansion_and_compressibility() {
        let cases = [
            (500.0, 650.0, 0.168_653_107e-1, 0.345_506_956e-1),
            (200.0, 650.0, 0.685_312_229e-1, 0.375_798_565),
            (500.0, 750.0, 0.441_515_098e-2, 0.806_710_817e-2),
        ];

        for (rho, t, alpha_v, kappa_t) in cases {
            let state = HelmholtzState::new(rho, t);
            assert_relative_eq!(state.isobaric_cubic_expansion_coefficient(), alpha_v, max_relative = 1e-7);
            assert_relative_eq!(state.isothermal_compressibility(), kappa_t, max_relative = 1e-7);
        }
    }

    #[test]
    fn pressure_coefficients_satisfy_cycle_relation() {
        // αv = p·αp·κT and κT = 1/(p·βp·v), with p in MPa and βp·v dimensionless.
        let state = HelmholtzState::new(500.0, 650.0);
        let p = state.pressure();

        assert_relative_eq!(
            state.isobaric_cubic_expansion_coefficient(),
            p * state.relative_pressure_coefficient() * state.isothermal_compressibility(),
            max_relative = 1e-10
        );
        assert_relative_eq!(
            state.isothermal_compressibility(),
            1.0 / (p * state.isothermal_stress_coefficient() * state.specific_volume()),
            max_relative = 1e-10
        );
    }

    #[test]
    fn boundary_3ab() {
        assert_relative_eq!(enthalpy_3ab(25.0), 2_095.936_454, max_relative = 1e-9);
    }

    #[test]
    fn backward_ph() {
        let cases = [
            (20.0, 1700.0, 629.308_389_2, 1.749_903_962e-3),
            (50.0, 2000.0, 690.571_833_8, 1.908_139_035e-3),
            (100.0, 2100.0, 733.616_301_4, 1.676_229_776e-3),
            (20.0, 2500.0, 641.841_805_3, 6.670_547_043e-3),
            (50.0, 2400.0, 735.184_861_8, 2.801_244_590e-3),
            (100.0, 2700.0, 842.046_087_6, 2.404_234_998e-3),
        ];

        for (p, h, t, v) in cases {
            assert_relative_eq!(temperature_ph(p, h), t, max_relative = 1e-9);
            assert_relative_eq!(specific_volume_ph(p, h), v, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_ps() {
        let cases = [
            (20.0, 3.8, 628.295_986_9, 1.733_791_463e-3),
            (50.0, 3.6, 629.715_872_6, 1.469_680_170e-3),
            (100.0, 4.0, 705.688_023_7, 1.555_893_131e-3),
            (20.0, 5.0, 640.117_644_3, 6.262_101_987e-3),
            (50.0, 4.5, 716.368_751_7, 2.332_634_294e-3),
            (100.0, 5.0, 847.433_282_5, 2.449_610_757e-3),
        ];

        for (p, s, t, v) in cases {
            assert_relative_eq!(temperature_ps(p, s), t, max_relative = 1e-9);
            assert_relative_eq!(specific_volume_ps(p, s), v, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_hs() {
        let cases = [
            (1700.0, 3.8, 25.557_032_46),
            (2000.0, 4.2, 45.408_734_68),
            (2100.0, 4.3, 60.781_233_40),
            (2600.0, 5.1, 34.349_992_63),
            (2400.0, 4.7, 63.639_248_87),
            (2700.0, 5.0, 88.390_432_81),
        ];

        for (h, s, p) in cases {
            assert_relative_eq!(pressure_hs(h, s), p, max_relative = 1e-9);
        }
    }

    #[test]
    fn hs_round_trip_through_forward_equation() {
        let state = HelmholtzState::new(500.0, 650.0);
        let (h, s) = (state.specific_enthalpy(), state.specific_entropy());

        assert_relative_eq!(temperature_hs(h, s), 650.0, max_relative = 1e-3);
        assert_relative_eq!(specific_volume_hs(h, s), 2e-3, max_relative = 1e-3);
    }

    #[test]
    fn subregions() {
        assert_eq!(Subregion::from_ph(25.0, 2000.0), Subregion::A);
        assert_eq!(Subregion::from_ph(25.0, 2200.0), Subregion::B);
        assert_eq!(Subregion::from_s(4.0), Subregion::A);
        assert_eq!(Subregion::from_s(4.5), Subregion::B);
    }

    proptest! {
        #[test]
        fn backward_temperatures_stay_within_25_mk(p in 25.0_f64..99.0, f in 0.0_f64..1.0) {
            let t = T13 + f * (temperature_b23(p) - T13);
            let v = specific_volume_pt(p, t).map_err(|error| TestCaseError::fail(error.to_string()))?;
            let state = HelmholtzState::new(1.0 / v, t);
            let p = state.pressure();

            prop_assert!((temperature_ph(p, state.specific_enthalpy()) - t).abs() < 0.025);
            prop_assert!((temperature_ps(p, state.specific_entropy()) - t).abs() < 0.025);
        }
    }
}
