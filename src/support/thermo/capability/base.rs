/// A thermodynamic model for a single fluid type.
///
/// Property and construction capabilities build on this trait, so a model
/// names its fluid once.
pub trait ThermoModel {
    type Fluid;
}
