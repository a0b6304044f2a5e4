//! IAPWS-IF97 properties of water and steam.
//!
//! [`If97`] is the entry point. It is an immutable, `Copy` value carrying
//! the [`UnitSystem`] its inputs and outputs are expressed in, so one
//! instance can be shared freely across threads.
//!
//! The computational core is in the internal `core` module and works in
//! default units throughout.
//!
//! # Example
//!
//! ```
//! use twine_if97::models::water::if97::{If97, Quantity, UnitSystem};
//!
//! let if97 = If97::default();
//! let h = if97.specific_enthalpy_pt(3.0, 300.0)?;
//! assert!((h - 115.331_273).abs() < 1e-6);
//!
//! // Saturation temperature at 1 bar, in °C.
//! let engineering = If97::new(UnitSystem::Engineering);
//! let t = engineering.saturation_temperature_p(1.0)?;
//! assert!((t - 99.606).abs() < 1e-3);
//!
//! let rho = if97.property_ph(Quantity::Density, 3.0, 500.0)?;
//! assert!(rho > 900.0);
//! # Ok::<(), twine_if97::models::water::if97::If97Error>(())
//! ```

pub(crate) mod core;
mod error;
mod model;
mod quantity;
mod unit_system;

pub use self::core::Region;
pub use error::{If97Error, OutOfRange, RangeEntry};
pub use model::{StateInput, StateProperties};
pub use quantity::Quantity;
pub use unit_system::UnitSystem;

use self::core::{Phase, State};

/// IAPWS-IF97 property calculator.
///
/// All methods take and return values in [`If97::unit_system`]. Range
/// violations are reported in the same unit system. Partial derivatives
/// are scaled to the units of the quantities involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct If97 {
    unit_system: UnitSystem,
}

impl If97 {
    /// Creates a calculator working in `unit_system`.
    #[must_use]
    pub const fn new(unit_system: UnitSystem) -> Self {
        Self { unit_system }
    }

    /// Returns a copy working in `unit_system`.
    #[must_use]
    pub const fn with_unit_system(self, unit_system: UnitSystem) -> Self {
        Self { unit_system }
    }

    #[must_use]
    pub const fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    fn to_default(&self, quantity: Quantity, value: f64) -> f64 {
        self.unit_system.to_default(quantity, value)
    }

    /// Runs `resolve` on default-unit inputs and converts its output for `quantity`.
    fn evaluate(
        &self,
        quantity: Quantity,
        resolve: impl FnOnce() -> Result<f64, If97Error>,
    ) -> Result<f64, If97Error> {
        resolve()
            .map(|value| self.unit_system.from_default(quantity, value))
            .map_err(|error| error.convert_from_default(self.unit_system))
    }

    fn property(
        &self,
        quantity: Quantity,
        resolve: impl FnOnce() -> Result<State, If97Error>,
    ) -> Result<f64, If97Error> {
        self.evaluate(quantity, || resolve()?.property(quantity))
    }

    fn region(
        &self,
        select: impl FnOnce() -> Result<Region,
        OutOfRange>,
    ) -> Result<Region, If97Error> {
        select().map_err(|error| If97Error::from(error).convert_from_default(self.unit_system))
    }

    /// Evaluates `quantity` at pressure and temperature.
    ///
    /// # Errors
    ///
    /// Fails if `(p, T)` lies outside the formulation, or if `quantity`
    /// needs further input (the refractive index needs a wavelength).
    ///
    /// # Example
    ///
    /// ```
    /// use twine_if97::models::water::if97::{If97, Quantity};
    ///
    /// let w = If97::default().property_pt(Quantity::SpeedOfSound, 3.0, 300.0)?;
    /// assert!((w - 1_507.739_21).abs() < 1e-4);
    /// # Ok::<(), twine_if97::models::water::if97::If97Error>(())
    /// ```
    pub fn property_pt(
        &self,
        quantity: Quantity,
        pressure: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.property(quantity, || core::state_pt(p, t))
    }

    /// Evaluates `quantity` at pressure and specific enthalpy.
    ///
    /// Two-phase states are mixtures of the saturated endpoints.
    pub fn property_ph(
        &self,
        quantity: Quantity,
        pressure: f64,
        enthalpy: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        self.property(quantity, || core::state_ph(p, h))
    }

    /// Evaluates `quantity` at pressure and specific entropy.
    pub fn property_ps(
        &self,
        quantity: Quantity,
        pressure: f64,
        entropy: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.property(quantity, || core::state_ps(p, s))
    }

    /// Evaluates `quantity` at specific enthalpy and specific entropy.
    ///
    /// # Errors
    ///
    /// Two-phase states above 623.15 K are [`If97Error::Unsupported`].
    pub fn property_hs(
        &self,
        quantity: Quantity,
        enthalpy: f64,
        entropy: f64,
    ) -> Result<f64, If97Error> {
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.property(quantity, || core::state_hs(h, s))
    }

    /// Evaluates `quantity` at density and temperature, in Region 3.
    pub fn property_rho_t(
        &self,
        quantity: Quantity,
        density: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.property(quantity, || core::state_rho_t(rho, t))
    }

    /// Evaluates `quantity` for a two-phase mixture at pressure and vapour fraction.
    pub fn property_px(
        &self,
        quantity: Quantity,
        pressure: f64,
        vapour_fraction: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        self.property(quantity, || core::mixture_px(p, vapour_fraction))
    }

    /// Evaluates `quantity` for a two-phase mixture at temperature and vapour fraction.
    pub fn property_tx(
        &self,
        quantity: Quantity,
        temperature: f64,
        vapour_fraction: f64,
    ) -> Result<f64, If97Error> {
        let t = self.to_default(Quantity::Temperature, temperature);
        self.property(quantity, || core::mixture_tx(t, vapour_fraction))
    }

    /// Evaluates `quantity` for saturated liquid at pressure `pressure`.
    pub fn saturated_liquid_p(&self, quantity: Quantity, pressure: f64) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        self.property(quantity, || core::saturated_p(p, Phase::Liquid))
    }

    /// Evaluates `quantity` for saturated vapour at pressure `pressure`.
    pub fn saturated_vapour_p(&self, quantity: Quantity, pressure: f64) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        self.property(quantity, || core::saturated_p(p, Phase::Vapour))
    }

    /// Evaluates `quantity` for saturated liquid at temperature `temperature`.
    pub fn saturated_liquid_t(
        &self,
        quantity: Quantity,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let t = self.to_default(Quantity::Temperature, temperature);
        self.property(quantity, || core::saturated_t(t, Phase::Liquid))
    }

    /// Evaluates `quantity` for saturated vapour at temperature `temperature`.
    pub fn saturated_vapour_t(
        &self,
        quantity: Quantity,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let t = self.to_default(Quantity::Temperature, temperature);
        self.property(quantity, || core::saturated_t(t, Phase::Vapour))
    }

    /// Evaluates `quantity` with the metastable-vapour formulation at `(p, T)`.
    ///
    /// Region selection never picks this formulation, so it must be
    /// requested here explicitly. Valid up to 10 MPa.
    pub fn metastable_vapour_pt(
        &self,
        quantity: Quantity,
        pressure: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.property(quantity, || core::metastable_vapour_pt(p, t))
    }

    /// Region containing `(p, T)`. Never [`Region::Region4`].
    pub fn region_pt(&self, pressure: f64, temperature: f64) -> Result<Region, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.region(|| core::select_pt(p, t))
    }

    pub fn region_ph(&self, pressure: f64, enthalpy: f64) -> Result<Region, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        self.region(|| core::select_ph(p, h))
    }

    pub fn region_ps(&self, pressure: f64, entropy: f64) -> Result<Region, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.region(|| core::select_ps(p, s))
    }

    pub fn region_hs(&self, enthalpy: f64, entropy: f64) -> Result<Region, If97Error> {
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.region(|| core::select_hs(h, s))
    }

    /// Saturation pressure at `temperature`.
    pub fn saturation_pressure_t(&self, temperature: f64) -> Result<f64, If97Error> {
        let t = self.to_default(Quantity::Temperature, temperature);
        self.evaluate(Quantity::Pressure, || Ok(core::saturation_pressure(t)?))
    }

    /// Saturation temperature at `pressure`.
    pub fn saturation_temperature_p(&self, pressure: f64) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        self.evaluate(Quantity::Temperature, || Ok(core::saturation_temperature(p)?))
    }

    /// Saturation pressure of a two-phase state given by enthalpy and entropy.
    pub fn saturation_pressure_hs(&self, enthalpy: f64, entropy: f64) -> Result<f64, If97Error> {
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.evaluate(Quantity::Pressure, || Ok(core::saturation_hs(h, s)?.1))
    }

    /// Saturation temperature of a two-phase state given by enthalpy and entropy.
    pub fn saturation_temperature_hs(&self, enthalpy: f64, entropy: f64) -> Result<f64, If97Error> {
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.evaluate(Quantity::Temperature, || Ok(core::saturation_hs(h, s)?.0))
    }

    /// Vapour fraction at pressure and specific enthalpy, clamped to `[0, 1]`.
    pub fn vapour_fraction_ph(&self, pressure: f64, enthalpy: f64) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        self.evaluate(Quantity::VapourFraction, || Ok(core::vapour_fraction_ph(p, h)?))
    }

    /// Vapour fraction at pressure and specific entropy, clamped to `[0, 1]`.
    pub fn vapour_fraction_ps(&self, pressure: f64, entropy: f64) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.evaluate(Quantity::VapourFraction, || Ok(core::vapour_fraction_ps(p, s)?))
    }

    /// Vapour fraction at temperature and specific entropy, clamped to `[0, 1]`.
    pub fn vapour_fraction_ts(&self, temperature: f64, entropy: f64) -> Result<f64, If97Error> {
        let t = self.to_default(Quantity::Temperature, temperature);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.evaluate(Quantity::VapourFraction, || Ok(core::vapour_fraction_ts(t, s)?))
    }

    /// Vapour fraction at specific enthalpy and specific entropy.
    ///
    /// # Errors
    ///
    /// Saturation temperatures above 623.15 K are [`If97Error::Unsupported`].
    pub fn vapour_fraction_hs(&self, enthalpy: f64, entropy: f64) -> Result<f64, If97Error> {
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.evaluate(Quantity::VapourFraction, || core::vapour_fraction_hs(h, s))
    }

    /// Surface tension at `temperature`.
    pub fn surface_tension_t(&self, temperature: f64) -> Result<f64, If97Error> {
        let t = self.to_default(Quantity::Temperature, temperature);
        self.evaluate(Quantity::SurfaceTension, || Ok(core::surface_tension(t)?))
    }

    /// Surface tension at the saturation temperature of `pressure`.
    pub fn surface_tension_p(&self, pressure: f64) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        self.evaluate(Quantity::SurfaceTension, || Ok(core::surface_tension_p(p)?))
    }

    /// Dynamic viscosity at density and temperature, for any single-phase state.
    pub fn dynamic_viscosity_rho_t(
        &self,
        density: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.evaluate(Quantity::DynamicViscosity, || Ok(core::dynamic_viscosity(rho, t)))
    }

    /// Kinematic viscosity at density and temperature.
    pub fn kinematic_viscosity_rho_t(
        &self,
        density: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.evaluate(Quantity::KinematicViscosity, || Ok(core::kinematic_viscosity(rho, t)))
    }

    /// Thermal conductivity at density and temperature.
    pub fn thermal_conductivity_rho_t(
        &self,
        density: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.evaluate(Quantity::ThermalConductivity, || Ok(core::thermal_conductivity(rho, t)))
    }

    /// Static dielectric constant at density and temperature.
    pub fn dielectric_constant_rho_t(
        &self,
        density: f64,
        temperature: f64,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.evaluate(Quantity::DielectricConstant, || Ok(core::dielectric_constant(rho, t)?))
    }

    /// Refractive index at density, temperature and wavelength.
    pub fn refractive_index_rho_t_lambda(
        &self,
        density: f64,
        temperature: f64,
        wavelength: f64,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        let lambda = self.to_default(Quantity::Wavelength, wavelength);
        self.evaluate(Quantity::RefractiveIndex, || Ok(core::refractive_index(rho, t, lambda)?))
    }

    /// Refractive index at pressure, temperature and wavelength.
    pub fn refractive_index_pt_lambda(
        &self,
        pressure: f64,
        temperature: f64,
        wavelength: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.refractive_index(wavelength, || core::state_pt(p, t))
    }

    /// Refractive index at pressure, specific enthalpy and wavelength.
    pub fn refractive_index_ph_lambda(
        &self,
        pressure: f64,
        enthalpy: f64,
        wavelength: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        self.refractive_index(wavelength, || core::state_ph(p, h))
    }

    /// Refractive index at pressure, specific entropy and wavelength.
    pub fn refractive_index_ps_lambda(
        &self,
        pressure: f64,
        entropy: f64,
        wavelength: f64,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.refractive_index(wavelength, || core::state_ps(p, s))
    }

    /// Refractive index at specific enthalpy, specific entropy and wavelength.
    pub fn refractive_index_hs_lambda(
        &self,
        enthalpy: f64,
        entropy: f64,
        wavelength: f64,
    ) -> Result<f64, If97Error> {
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        let s = self.to_default(Quantity::SpecificEntropy, entropy);
        self.refractive_index(wavelength, || core::state_hs(h, s))
    }

    fn refractive_index(
        &self,
        wavelength: f64,
        resolve: impl FnOnce() -> Result<State, If97Error>,
    ) -> Result<f64, If97Error> {
        let lambda = self.to_default(Quantity::Wavelength, wavelength);
        self.evaluate(Quantity::RefractiveIndex, || {
            Ok(resolve()?.refractive_index(lambda)?)
        })
    }

    /// Partial derivative `(∂z/∂x)_y` at pressure and temperature.
    ///
    /// `x`, `y` and `z` must be in [`Quantity::PARTIAL_DERIVATIVES`].
    ///
    /// # Example
    ///
    /// ```
    /// use twine_if97::models::water::if97::{If97, Quantity};
    ///
    /// let if97 = If97::default();
    /// // (∂h/∂T)_p is the isobaric heat capacity.
    /// let dh_dt = if97.partial_derivative_pt(
    ///     3.0,
    ///     300.0,
    ///     Quantity::Temperature,
    ///     Quantity::Pressure,
    ///     Quantity::SpecificEnthalpy,
    /// )?;
    /// let cp = if97.property_pt(Quantity::IsobaricHeatCapacity, 3.0, 300.0)?;
    /// assert!((dh_dt - cp).abs() < 1e-9);
    /// # Ok::<(), twine_if97::models::water::if97::If97Error>(())
    /// ```
    pub fn partial_derivative_pt(
        &self,
        pressure: f64,
        temperature: f64,
        x: Quantity,
        y: Quantity,
        z: Quantity,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.partial_derivative(x, y, z, || core::state_pt(p, t))
    }

    /// Partial derivative `(∂z/∂x)_y` at pressure and specific enthalpy.
    ///
    /// # Errors
    ///
    /// Two-phase states are [`If97Error::Unsupported`].
    pub fn partial_derivative_ph(
        &self,
        pressure: f64,
        enthalpy: f64,
        x: Quantity,
        y: Quantity,
        z: Quantity,
    ) -> Result<f64, If97Error> {
        let p = self.to_default(Quantity::Pressure, pressure);
        let h = self.to_default(Quantity::SpecificEnthalpy, enthalpy);
        self.partial_derivative(x, y, z, || core::state_ph(p, h))
    }

    /// Partial derivative `(∂z/∂x)_y` at density and temperature, in Region 3.
    pub fn partial_derivative_rho_t(
        &self,
        density: f64,
        temperature: f64,
        x: Quantity,
        y: Quantity,
        z: Quantity,
    ) -> Result<f64, If97Error> {
        let rho = self.to_default(Quantity::Density, density);
        let t = self.to_default(Quantity::Temperature, temperature);
        self.partial_derivative(x, y, z, || core::state_rho_t(rho, t))
    }

    fn partial_derivative(
        &self,
        x: Quantity,
        y: Quantity,
        z: Quantity,
        resolve: impl FnOnce() -> Result<State, If97Error>,
    ) -> Result<f64, If97Error> {
        let units = self.unit_system;

        resolve()
            .and_then(|state| state.partial_derivative(x, y, z))
            .map(|value| {
                // Biases cancel in a derivative; only the scales apply.
                let z_scale = units.from_default(z, 1.0) - units.from_default(z, 0.0);
                let x_scale = units.to_default(x, 1.0) - units.to_default(x, 0.0);
                value * z_scale * x_scale
            })
            .map_err(|error| error.convert_from_default(units))
    }
}

/// Generates named shortcuts for the generic property methods.
macro_rules! shortcuts {
    ($generic:ident($a:ident, $b:ident) { $($name:ident => $quantity:ident,)* }) => {
        impl If97 {
            $(
                #[doc = concat!(
                    "[`Quantity::", stringify!($quantity), "`] at `(",
                    stringify!($a), ", ", stringify!($b), ")`."
                )]
                pub fn $name(&self, $a: f64, $b: f64) -> Result<f64, If97Error> {
                    self.$generic(Quantity::$quantity, $a, $b)
                }
            )*
        }
    };
}

shortcuts!(property_pt(pressure, temperature) {
    specific_volume_pt => SpecificVolume,
    density_pt => Density,
    specific_enthalpy_pt => SpecificEnthalpy,
    specific_entropy_pt => SpecificEntropy,
    specific_internal_energy_pt => SpecificInternalEnergy,
    specific_gibbs_free_energy_pt => SpecificGibbsFreeEnergy,
    specific_helmholtz_free_energy_pt => SpecificHelmholtzFreeEnergy,
    isobaric_heat_capacity_pt => IsobaricHeatCapacity,
    isochoric_heat_capacity_pt => IsochoricHeatCapacity,
    speed_of_sound_pt => SpeedOfSound,
    isobaric_cubic_expansion_coefficient_pt => IsobaricCubicExpansionCoefficient,
    compressibility_pt => IsothermalCompressibility,
    isentropic_exponent_pt => IsentropicExponent,
    compression_factor_pt => CompressionFactor,
    dynamic_viscosity_pt => DynamicViscosity,
    kinematic_viscosity_pt => KinematicViscosity,
    thermal_conductivity_pt => ThermalConductivity,
    thermal_diffusivity_pt => ThermalDiffusivity,
    prandtl_pt => PrandtlNumber,
    dielectric_constant_pt => DielectricConstant,
});

shortcuts!(property_ph(pressure, enthalpy) {
    temperature_ph => Temperature,
    specific_volume_ph => SpecificVolume,
    density_ph => Density,
    specific_entropy_ph => SpecificEntropy,
    specific_internal_energy_ph => SpecificInternalEnergy,
    isobaric_heat_capacity_ph => IsobaricHeatCapacity,
    isochoric_heat_capacity_ph => IsochoricHeatCapacity,
    speed_of_sound_ph => SpeedOfSound,
    isobaric_cubic_expansion_coefficient_ph => IsobaricCubicExpansionCoefficient,
    compressibility_ph => IsothermalCompressibility,
    isentropic_exponent_ph => IsentropicExponent,
    dynamic_viscosity_ph => DynamicViscosity,
    kinematic_viscosity_ph => KinematicViscosity,
    thermal_conductivity_ph => ThermalConductivity,
    thermal_diffusivity_ph => ThermalDiffusivity,
    prandtl_ph => PrandtlNumber,
    dielectric_constant_ph => DielectricConstant,
});

shortcuts!(property_ps(pressure, entropy) {
    temperature_ps => Temperature,
    specific_volume_ps => SpecificVolume,
    density_ps => Density,
    specific_enthalpy_ps => SpecificEnthalpy,
    specific_internal_energy_ps => SpecificInternalEnergy,
    isobaric_heat_capacity_ps => IsobaricHeatCapacity,
    isochoric_heat_capacity_ps => IsochoricHeatCapacity,
    speed_of_sound_ps => SpeedOfSound,
    isobaric_cubic_expansion_coefficient_ps => IsobaricCubicExpansionCoefficient,
    compressibility_ps => IsothermalCompressibility,
    isentropic_exponent_ps => IsentropicExponent,
    dynamic_viscosity_ps => DynamicViscosity,
    kinematic_viscosity_ps => KinematicViscosity,
    thermal_conductivity_ps => ThermalConductivity,
    thermal_diffusivity_ps => ThermalDiffusivity,
    prandtl_ps => PrandtlNumber,
    dielectric_constant_ps => DielectricConstant,
});

shortcuts!(property_hs(enthalpy, entropy) {
    pressure_hs => Pressure,
    temperature_hs => Temperature,
    specific_volume_hs => SpecificVolume,
    density_hs => Density,
    specific_internal_energy_hs => SpecificInternalEnergy,
    isobaric_heat_capacity_hs => IsobaricHeatCapacity,
    isochoric_heat_capacity_hs => IsochoricHeatCapacity,
    speed_of_sound_hs => SpeedOfSound,
    isobaric_cubic_expansion_coefficient_hs => IsobaricCubicExpansionCoefficient,
    compressibility_hs => IsothermalCompressibility,
    isentropic_exponent_hs => IsentropicExponent,
    dynamic_viscosity_hs => DynamicViscosity,
    kinematic_viscosity_hs => KinematicViscosity,
    thermal_conductivity_hs => ThermalConductivity,
    thermal_diffusivity_hs => ThermalDiffusivity,
    prandtl_hs => PrandtlNumber,
    dielectric_constant_hs => DielectricConstant,
});

shortcuts!(property_rho_t(density, temperature) {
    pressure_rho_t => Pressure,
    specific_enthalpy_rho_t => SpecificEnthalpy,
    specific_entropy_rho_t => SpecificEntropy,
    specific_internal_energy_rho_t => SpecificInternalEnergy,
    isobaric_heat_capacity_rho_t => IsobaricHeatCapacity,
    isochoric_heat_capacity_rho_t => IsochoricHeatCapacity,
    speed_of_sound_rho_t => SpeedOfSound,
});

shortcuts!(property_px(pressure, vapour_fraction) {
    specific_volume_px => SpecificVolume,
    density_px => Density,
    specific_enthalpy_px => SpecificEnthalpy,
    specific_entropy_px => SpecificEntropy,
    specific_internal_energy_px => SpecificInternalEnergy,
});

shortcuts!(property_tx(temperature, vapour_fraction) {
    specific_volume_tx => SpecificVolume,
    density_tx => Density,
    specific_enthalpy_tx => SpecificEnthalpy,
    specific_entropy_tx => SpecificEntropy,
    specific_internal_energy_tx => SpecificInternalEnergy,
});
