use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// Each input pair a model can resolve is one implementation, so an
/// unsupported pair is a compile error rather than a runtime one. Inputs are
/// plain tuples of [`uom`] quantities led by the fluid:
///
/// - `(Fluid, ThermodynamicTemperature, MassDensity)`
/// - `(Fluid, ThermodynamicTemperature, Pressure)`
/// - `(Fluid, Pressure, SpecificEnthalpy)`
/// - `(Fluid, Pressure, SpecificEntropy)`
/// - `(Fluid, SpecificEnthalpy, SpecificEntropy)`
///
/// When the fluid is a marker with a [`Default`], the blanket impl below also
/// accepts the pair without it, as in `thermo.state_from((t, p))`.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Resolves `(A, B)` as `(Fluid::default(), A, B)`.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
