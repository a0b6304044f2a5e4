use std::fmt;

/// The physical quantities the IF97 model computes or accepts.
///
/// A `Quantity` is a dispatch tag.
/// It selects a property in the generic property methods of
/// [`If97`](super::If97), the variables of a partial derivative, and the
/// unit conversion applied by a [`UnitSystem`](super::UnitSystem).
/// It is not a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Absolute pressure, `p`.
    Pressure,
    /// Temperature, `T`.
    Temperature,
    /// Specific volume, `v`.
    SpecificVolume,
    /// Specific internal energy, `u`.
    SpecificInternalEnergy,
    /// Specific enthalpy, `h`.
    SpecificEnthalpy,
    /// Specific entropy, `s`.
    SpecificEntropy,
    /// Specific Gibbs free energy, `g`.
    SpecificGibbsFreeEnergy,
    /// Specific Helmholtz free energy, `f`.
    SpecificHelmholtzFreeEnergy,
    /// Density, `ρ`.
    Density,
    /// Thermal diffusivity, `a`.
    ThermalDiffusivity,
    /// Specific isobaric heat capacity, `cp`.
    IsobaricHeatCapacity,
    /// Specific isochoric heat capacity, `cv`.
    IsochoricHeatCapacity,
    /// Refractive index, `n`.
    RefractiveIndex,
    /// Speed of sound, `w`.
    SpeedOfSound,
    /// Vapour fraction (quality), `x`.
    VapourFraction,
    /// Compression factor, `z`.
    CompressionFactor,
    /// Isobaric cubic expansion coefficient, `αv`.
    IsobaricCubicExpansionCoefficient,
    /// Static dielectric constant, `ε`.
    DielectricConstant,
    /// Dynamic viscosity, `μ`.
    DynamicViscosity,
    /// Isentropic exponent, `κ`.
    IsentropicExponent,
    /// Isothermal compressibility, `κT`.
    IsothermalCompressibility,
    /// Thermal conductivity, `λ`.
    ThermalConductivity,
    /// Wavelength of light, `λL`.
    Wavelength,
    /// Kinematic viscosity, `ν`.
    KinematicViscosity,
    /// Surface tension, `σ`.
    SurfaceTension,
    /// Prandtl number, `Pr`.
    PrandtlNumber,
}

impl Quantity {
    /// Quantities usable as `x`, `y` or `z` in a partial derivative `(∂z/∂x)_y`.
    pub const PARTIAL_DERIVATIVES: [Quantity; 9] = [
        Quantity::Pressure,
        Quantity::Temperature,
        Quantity::SpecificVolume,
        Quantity::SpecificInternalEnergy,
        Quantity::SpecificEnthalpy,
        Quantity::SpecificEntropy,
        Quantity::SpecificGibbsFreeEnergy,
        Quantity::SpecificHelmholtzFreeEnergy,
        Quantity::Density,
    ];

    /// Returns the lowercase name of the quantity, e.g. `"specific enthalpy"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Quantity::Pressure => "absolute pressure",
            Quantity::Temperature => "temperature",
            Quantity::SpecificVolume => "specific volume",
            Quantity::SpecificInternalEnergy => "specific internal energy",
            Quantity::SpecificEnthalpy => "specific enthalpy",
            Quantity::SpecificEntropy => "specific entropy",
            Quantity::SpecificGibbsFreeEnergy => "specific Gibbs free energy",
            Quantity::SpecificHelmholtzFreeEnergy => "specific Helmholtz free energy",
            Quantity::Density => "density",
            Quantity::ThermalDiffusivity => "thermal diffusivity",
            Quantity::IsobaricHeatCapacity => "specific isobaric heat capacity",
            Quantity::IsochoricHeatCapacity => "specific isochoric heat capacity",
            Quantity::RefractiveIndex => "refractive index",
            Quantity::SpeedOfSound => "speed of sound",
            Quantity::VapourFraction => "vapour fraction",
            Quantity::CompressionFactor => "compression factor",
            Quantity::IsobaricCubicExpansionCoefficient => "isobaric cubic expansion coefficient",
            Quantity::DielectricConstant => "dielectric constant",
            Quantity::DynamicViscosity => "dynamic viscosity",
            Quantity::IsentropicExponent => "isentropic exponent",
            Quantity::IsothermalCompressibility => "isothermal compressibility",
            Quantity::ThermalConductivity => "thermal conductivity",
            Quantity::Wavelength => "wavelength",
            Quantity::KinematicViscosity => "kinematic viscosity",
            Quantity::SurfaceTension => "surface tension",
            Quantity::PrandtlNumber => "Prandtl number",
        }
    }

    /// Returns the conventional symbol of the quantity, e.g. `"h"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Quantity::Pressure => "p",
            Quantity::Temperature => "T",
            Quantity::SpecificVolume => "v",
            Quantity::SpecificInternalEnergy => "u",
            Quantity::SpecificEnthalpy => "h",
            Quantity::SpecificEntropy => "s",
            Quantity::SpecificGibbsFreeEnergy => "g",
            Quantity::SpecificHelmholtzFreeEnergy => "f",
            Quantity::Density => "ρ",
            Quantity::ThermalDiffusivity => "a",
            Quantity::IsobaricHeatCapacity => "cp",
            Quantity::IsochoricHeatCapacity => "cv",
            Quantity::RefractiveIndex => "n",
            Quantity::SpeedOfSound => "w",
            Quantity::VapourFraction => "x",
            Quantity::CompressionFactor => "z",
            Quantity::IsobaricCubicExpansionCoefficient => "αv",
            Quantity::DielectricConstant => "ε",
            Quantity::DynamicViscosity => "μ",
            Quantity::IsentropicExponent => "κ",
            Quantity::IsothermalCompressibility => "κT",
            Quantity::ThermalConductivity => "λ",
            Quantity::Wavelength => "λL",
            Quantity::KinematicViscosity => "ν",
            Quantity::SurfaceTension => "σ",
            Quantity::PrandtlNumber => "Pr",
        }
    }

    /// Returns `true` if the quantity may appear in a partial derivative.
    #[must_use]
    pub fn is_partial_derivative_variable(self) -> bool {
        Self::PARTIAL_DERIVATIVES.contains(&self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_name() {
        assert_eq!(Quantity::Pressure.to_string(), "absolute pressure");
        assert_eq!(Quantity::PrandtlNumber.to_string(), "Prandtl number");
    }

    #[test]
    fn partial_derivative_set() {
        assert!(Quantity::SpecificEnthalpy.is_partial_derivative_variable());
        assert!(Quantity::Density.is_partial_derivative_variable());
        assert!(!Quantity::IsobaricHeatCapacity.is_partial_derivative_variable());
        assert!(!Quantity::VapourFraction.is_partial_derivative_variable());
    }
}
