//! Arbitrary partial derivatives `(∂z/∂x)_y` of single-phase states.
//!
//! Every quantity in [`Quantity::PARTIAL_DERIVATIVES`] has closed-form
//! partials with respect to the natural variables of its equation of state:
//! `(T, p)` for the Gibbs regions and `(T, v)` for Region 3. Given those
//! pairs for `x`, `y` and `z`, the Jacobian identity
//!
//! ```text
//! (∂z/∂x)_y = (∂z/∂b·∂y/∂T − ∂z/∂T·∂y/∂b) / (∂x/∂b·∂y/∂T − ∂x/∂T·∂y/∂b)
//! ```
//!
//! gives the requested derivative, with `b` the second natural variable.
//! Internally pressures are in kPa so `p·v` is in kJ/kg.

use crate::models::water::if97::{If97Error, Quantity};

use super::region::{GibbsState, Properties, SinglePhaseState, region3::HelmholtzState};

/// Partials of one quantity with respect to temperature and the second
/// natural variable of the state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Partials {
    temperature: f64,
    other: f64,
}

impl Partials {
    const fn new(temperature: f64, other: f64) -> Self {
        Self { temperature, other }
    }
}

/// Primitives of a Gibbs state, in kPa-consistent units.
struct GibbsPrimitives {
    p: f64,
    t: f64,
    v: f64,
    s: f64,
    cp: f64,
    alpha_v: f64,
    kappa_t: f64,
}

impl GibbsPrimitives {
    fn new(state: &GibbsState) -> Self {
        Self {
            p: 1e3 * state.pressure(),
            t: state.temperature(),
            v: state.specific_volume(),
            s: state.specific_entropy(),
            cp: state.isobaric_heat_capacity(),
            alpha_v: state.isobaric_cubic_expansion_coefficient(),
            kappa_t: 1e-3 * state.isothermal_compressibility(),
        }
    }

    /// Partials with respect to `(T, p)`.
    fn partials(&self, quantity: Quantity) -> Partials {
        let Self {
            p,
            t,
            v,
            s,
            cp,
            alpha_v,
            kappa_t,
        } = *self;

        match quantity {
            Quantity::Pressure => Partials::new(0.0, 1.0),
            Quantity::Temperature => Partials::new(1.0, 0.0),
            Quantity::SpecificVolume => Partials::new(v * alpha_v, -v * kappa_t),
            Quantity::SpecificInternalEnergy => {
                Partials::new(cp - p * v * alpha_v, v * (p * kappa_t - t * alpha_v))
            }
            Quantity::SpecificEnthalpy => Partials::new(cp, v * (1.0 - t * alpha_v)),
            Quantity::SpecificEntropy => Partials::new(cp / t, -v * alpha_v),
            Quantity::SpecificGibbsFreeEnergy => Partials::new(-s, v),
            Quantity::SpecificHelmholtzFreeEnergy => {
                Partials::new(-s - p * v * alpha_v, p * v * kappa_t)
            }
            _ => Partials::new(-alpha_v / v, kappa_t / v),
        }
    }
}

/// Primitives of a Helmholtz state, in kPa-consistent units.
struct HelmholtzPrimitives {
    p: f64,
    t: f64,
    v: f64,
    s: f64,
    cv: f64,
    alpha_p: f64,
    beta_p: f64,
}

impl HelmholtzPrimitives {
    fn new(state: &HelmholtzState) -> Self {
        Self {
            p: 1e3 * state.pressure(),
            t: state.temperature(),
            v: state.specific_volume(),
            s: state.specific_entropy(),
            cv: state.isochoric_heat_capacity(),
            alpha_p: state.relative_pressure_coefficient(),
            beta_p: state.isothermal_stress_coefficient(),
        }
    }

    /// Partials with respect to `(T, v)`.
    fn partials(&self, quantity: Quantity) -> Partials {
        let Self {
            p,
            t,
            v,
            s,
            cv,
            alpha_p,
            beta_p,
        } = *self;

        match quantity {
            Quantity::Pressure => Partials::new(p * alpha_p, -p * beta_p),
            Quantity::Temperature => Partials::new(1.0, 0.0),
            Quantity::SpecificVolume => Partials::new(0.0, 1.0),
            Quantity::SpecificInternalEnergy => Partials::new(cv, p * (t * alpha_p - 1.0)),
            Quantity::SpecificEnthalpy => {
                Partials::new(cv + p * v * alpha_p, p * (t * alpha_p - v * beta_p))
            }
            Quantity::SpecificEntropy => Partials::new(cv / t, p * alpha_p),
            Quantity::SpecificGibbsFreeEnergy => {
                Partials::new(p * v * alpha_p - s, -p * v * beta_p)
            }
            Quantity::SpecificHelmholtzFreeEnergy => Partials::new(-s, -p),
            _ => Partials::new(0.0, -1.0 / (v * v)),
        }
    }
}

/// Returns `(∂z/∂x)_y` at `state`, in default units.
///
/// The caller must not pass `x == y`; the result is then not finite.
///
/// # Errors
///
/// Fails with [`If97Error::InvalidQuantity`] if `x`, `y` or `z` is not in
/// [`Quantity::PARTIAL_DERIVATIVES`].
pub(crate) fn partial_derivative(
    state: &SinglePhaseState,
    x: Quantity,
    y: Quantity,
    z: Quantity,
) -> Result<f64, If97Error> {
    for quantity in [x, y, z] {
        if !quantity.is_partial_derivative_variable() {
            return Err(If97Error::invalid_quantity(
                quantity,
                "not a partial derivative variable",
            ));
        }
    }

    let [dx, dy, dz] = match state {
        SinglePhaseState::Gibbs(state) => {
            let primitives = GibbsPrimitives::new(state);
            [x, y, z].map(|quantity| primitives.partials(quantity))
        }
        SinglePhaseState::Helmholtz(state) => {
            let primitives = HelmholtzPrimitives::new(state);
            [x, y, z].map(|quantity| primitives.partials(quantity))
        }
    };

    let numerator = dz.other * dy.temperature - dz.temperature * dy.other;
    let denominator = dx.other * dy.temperature - dx.temperature * dy.other;

    Ok(numerator / denominator * pressure_scale(z) / pressure_scale(x))
}

/// Factor taking a kPa-based value of `quantity` back to MPa.
fn pressure_scale(quantity: Quantity) -> f64 {
    if quantity == Quantity::Pressure {
        1e-3
    } else {
        1.0
    }
}
