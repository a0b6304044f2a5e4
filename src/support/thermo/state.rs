use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` captures the thermodynamic state of a specific fluid,
/// including its temperature, density, and any fluid-specific data.
///
/// The `Fluid` type parameter is usually a marker type such as
/// [`Water`](super::fluid::Water). Temperature and density fix the state
/// everywhere, including inside the saturation dome, where the density sets
/// the vapour fraction.
///
/// Models in [`model`](super::model) read everything else, pressure included,
/// back from these two numbers.
///
/// # Example
///
/// ```
/// use twine_if97::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{ThermodynamicTemperature, MassDensity},
///     thermodynamic_temperature::kelvin,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
///     density: MassDensity::new::<kilogram_per_cubic_meter>(996.5),
///     fluid: Water,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Same density and fluid at another temperature, as in isochoric heating.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Same temperature and fluid at another density.
    ///
    /// Lowering the density of a compressed liquid far enough moves the state
    /// into the saturation dome.
    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self { density, ..self }
    }
}
