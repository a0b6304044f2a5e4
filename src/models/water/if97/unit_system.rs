use std::fmt;

use super::Quantity;

const T0: f64 = 273.15;

const BTU: f64 = 1.055_056; // kJ
const FT: f64 = 0.3048; // m
const G: f64 = 9.806_65; // m/s²
const HR: f64 = 3600.0; // s
const IN: f64 = FT / 12.0;
const LB: f64 = 0.453_592_37; // kg
const LBF: f64 = LB * G; // N
const PSI: f64 = 1e-6 * LBF / (IN * IN); // MPa
const RA: f64 = 5.0 / 9.0; // K

/// The unit system that values passed to and returned from [`If97`](super::If97) are expressed in.
///
/// Every dimensional [`Quantity`] has a linear conversion to the default
/// unit system, `default = value · scale + bias`.
/// Dimensionless quantities (vapour fraction, compression factor, refractive
/// index, dielectric constant, isentropic exponent and Prandtl number)
/// pass through unchanged.
///
/// | Kind                  | `Default`   | `Engineering` | `Si`       | `Imperial`     |
/// |-----------------------|-------------|---------------|------------|----------------|
/// | pressure              | MPa         | bar           | Pa         | psi            |
/// | temperature           | K           | °C            | K          | °F             |
/// | specific energy       | kJ/kg       | kJ/kg         | J/kg       | BTU/lb         |
/// | specific entropy      | kJ/(kg·K)   | kJ/(kg·K)     | J/(kg·K)   | BTU/(lb·R)     |
/// | specific volume       | m³/kg       | m³/kg         | m³/kg      | ft³/lb         |
/// | density               | kg/m³       | kg/m³         | kg/m³      | lb/ft³         |
/// | thermal conductivity  | W/(m·K)     | kW/(m·K)      | W/(m·K)    | BTU/(hr·ft·R)  |
/// | wavelength            | μm          | μm            | m          | in             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// MPa, K, kJ/kg, kJ/(kg·K), m³/kg, kg/m³, m/s, Pa·s, W/(m·K), μm.
    #[default]
    Default,
    /// Like [`UnitSystem::Default`], with bar, °C and kW/(m·K).
    Engineering,
    /// Coherent SI units: Pa, K, J/kg, J/(kg·K), m.
    Si,
    /// British imperial units: psi, °F, BTU/lb, BTU/(lb·R), ft³/lb, lb/ft³.
    Imperial,
}

/// Groups of quantities sharing a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitKind {
    Compressibility,
    Density,
    DynamicViscosity,
    Expansion,
    KinematicViscosity,
    Pressure,
    SpecificEnergy,
    SpecificEntropy,
    SpecificVolume,
    SpeedOfSound,
    SurfaceTension,
    Temperature,
    ThermalConductivity,
    Wavelength,
}

impl UnitKind {
    fn of(quantity: Quantity) -> Option<Self> {
        use Quantity as Q;

        let kind = match quantity {
            Q::IsothermalCompressibility => Self::Compressibility,
            Q::Density => Self::Density,
            Q::DynamicViscosity => Self::DynamicViscosity,
            Q::IsobaricCubicExpansionCoefficient => Self::Expansion,
            Q::KinematicViscosity | Q::ThermalDiffusivity => Self::KinematicViscosity,
            Q::Pressure => Self::Pressure,
            Q::SpecificInternalEnergy
            | Q::SpecificEnthalpy
            | Q::SpecificGibbsFreeEnergy
            | Q::SpecificHelmholtzFreeEnergy => Self::SpecificEnergy,
            Q::SpecificEntropy | Q::IsobaricHeatCapacity | Q::IsochoricHeatCapacity => {
                Self::SpecificEntropy
            }
            Q::SpecificVolume => Self::SpecificVolume,
            Q::SpeedOfSound => Self::SpeedOfSound,
            Q::SurfaceTension => Self::SurfaceTension,
            Q::Temperature => Self::Temperature,
            Q::ThermalConductivity => Self::ThermalConductivity,
            Q::Wavelength => Self::Wavelength,
            Q::RefractiveIndex
            | Q::VapourFraction
            | Q::CompressionFactor
            | Q::DielectricConstant
            | Q::IsentropicExponent
            | Q::PrandtlNumber => return None,
        };

        Some(kind)
    }
}

impl UnitSystem {
    /// Converts a value of `quantity` from this unit system to the default one.
    #[must_use]
    pub fn to_default(self, quantity: Quantity, value: f64) -> f64 {
        let (scale, bias) = self.scale_and_bias(quantity);
        value * scale + bias
    }

    /// Converts a value of `quantity` from the default unit system to this one.
    #[must_use]
    pub fn from_default(self, quantity: Quantity, value: f64) -> f64 {
        let (scale, bias) = self.scale_and_bias(quantity);
        (value - bias) / scale
    }

    /// Returns the unit `quantity` is expressed in, e.g. `"kJ/kg"`.
    ///
    /// Dimensionless quantities return `""`.
    #[must_use]
    pub fn unit(self, quantity: Quantity) -> &'static str {
        let Some(kind) = UnitKind::of(quantity) else {
            return "";
        };

        match (self, kind) {
            (_, UnitKind::Density) if self != Self::Imperial => "kg/m³",
            (_, UnitKind::SpecificVolume) if self != Self::Imperial => "m³/kg",
            (_, UnitKind::SpeedOfSound) if self != Self::Imperial => "m/s",
            (_, UnitKind::SurfaceTension) if self != Self::Imperial => "N/m",
            (_, UnitKind::DynamicViscosity) if self != Self::Imperial => "Pa·s",
            (_, UnitKind::KinematicViscosity) if self != Self::Imperial => "m²/s",
            (_, UnitKind::Expansion) if self != Self::Imperial => "1/K",

            (Self::Default | Self::Engineering, UnitKind::SpecificEnergy) => "kJ/kg",
            (Self::Default | Self::Engineering, UnitKind::SpecificEntropy) => "kJ/(kg·K)",
            (Self::Default | Self::Engineering, UnitKind::Compressibility) => "1/MPa",
            (Self::Default | Self::Engineering, UnitKind::Wavelength) => "μm",
            (Self::Default, UnitKind::Pressure) => "MPa",
            (Self::Default | Self::Si, UnitKind::Temperature) => "K",
            (Self::Default | Self::Si, UnitKind::ThermalConductivity) => "W/(m·K)",

            (Self::Engineering, UnitKind::Pressure) => "bar",
            (Self::Engineering, UnitKind::Temperature) => "°C",
            (Self::Engineering, UnitKind::ThermalConductivity) => "kW/(m·K)",

            (Self::Si, UnitKind::Pressure) => "Pa",
            (Self::Si, UnitKind::SpecificEnergy) => "J/kg",
            (Self::Si, UnitKind::SpecificEntropy) => "J/(kg·K)",
            (Self::Si, UnitKind::Compressibility) => "1/Pa",
            (Self::Si, UnitKind::Wavelength) => "m",

            (Self::Imperial, UnitKind::Compressibility) => "in²/lbf",
            (Self::Imperial, UnitKind::Density) => "lb/ft³",
            (Self::Imperial, UnitKind::DynamicViscosity) => "cP",
            (Self::Imperial, UnitKind::Expansion) => "1/R",
            (Self::Imperial, UnitKind::KinematicViscosity) => "cSt",
            (Self::Imperial, UnitKind::Pressure) => "psi",
            (Self::Imperial, UnitKind::SpecificEnergy) => "BTU/lb",
            (Self::Imperial, UnitKind::SpecificEntropy) => "BTU/(lb·R)",
            (Self::Imperial, UnitKind::SpecificVolume) => "ft³/lb",
            (Self::Imperial, UnitKind::SpeedOfSound) => "ft/s",
            (Self::Imperial, UnitKind::SurfaceTension) => "lbf/ft",
            (Self::Imperial, UnitKind::Temperature) => "°F",
            (Self::Imperial, UnitKind::ThermalConductivity) => "BTU/(hr·ft·R)",
            (Self::Imperial, UnitKind::Wavelength) => "in",

            _ => "-",
        }
    }

    /// Returns a label such as `"specific enthalpy [kJ/kg]"`.
    ///
    /// Dimensionless quantities are labelled `[-]`.
    #[must_use]
    pub fn label(self, quantity: Quantity) -> String {
        let unit = match self.unit(quantity) {
            "" => "-",
            unit => unit,
        };
        format!("{quantity} [{unit}]")
    }

    fn scale_and_bias(self, quantity: Quantity) -> (f64, f64) {
        let Some(kind) = UnitKind::of(quantity) else {
            return (1.0, 0.0);
        };

        match self {
            Self::Default => (1.0, 0.0),
            Self::Engineering => match kind {
                UnitKind::Pressure => (0.1, 0.0),
                UnitKind::Temperature => (1.0, T0),
                UnitKind::ThermalConductivity => (1e3, 0.0),
                _ => (1.0, 0.0),
            },
            Self::Si => match kind {
                UnitKind::Compressibility => (1e6, 0.0),
                UnitKind::Pressure => (1e-6, 0.0),
                UnitKind::SpecificEnergy | UnitKind::SpecificEntropy => (1e-3, 0.0),
                UnitKind::Wavelength => (1e6, 0.0),
                _ => (1.0, 0.0),
            },
            Self::Imperial => match kind {
                UnitKind::Compressibility => (1e6 * IN * IN / LBF, 0.0),
                UnitKind::Density => (LB / (FT * FT * FT), 0.0),
                UnitKind::DynamicViscosity => (1e-3, 0.0),
                UnitKind::Expansion => (1.0 / RA, 0.0),
                UnitKind::KinematicViscosity => (1e-6, 0.0),
                UnitKind::Pressure => (PSI, 0.0),
                UnitKind::SpecificEnergy => (BTU / LB, 0.0),
                UnitKind::SpecificEntropy => (BTU / (LB * RA), 0.0),
                UnitKind::SpecificVolume => (FT * FT * FT / LB, 0.0),
                UnitKind::SpeedOfSound => (FT, 0.0),
                UnitKind::SurfaceTension => (LBF / FT, 0.0),
                UnitKind::Temperature => (RA, 459.67 * RA),
                UnitKind::ThermalConductivity => (1e3 * BTU / (HR * FT * RA), 0.0),
                UnitKind::Wavelength => (IN * 1e6, 0.0),
            },
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Engineering => "engineering",
            Self::Si => "SI",
            Self::Imperial => "imperial",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn pound_force() {
        assert_relative_eq!(LBF, 4.448_221_615_260_5, epsilon = 1e-12);
    }

    #[test]
    fn engineering_units() {
        let units = UnitSystem::Engineering;

        assert_relative_eq!(units.to_default(Quantity::Pressure, 10.0), 1.0);
        assert_relative_eq!(units.to_default(Quantity::Temperature, 100.0), 373.15);
        assert_relative_eq!(units.from_default(Quantity::Temperature, 273.15), 0.0);
        assert_relative_eq!(units.from_default(Quantity::ThermalConductivity, 0.6), 6e-4);
        assert_eq!(units.unit(Quantity::Pressure), "bar");
        assert_eq!(units.unit(Quantity::SpecificEnthalpy), "kJ/kg");
    }

    #[test]
    fn si_units() {
        let units = UnitSystem::Si;

        assert_relative_eq!(units.to_default(Quantity::Pressure, 101_325.0), 0.101_325);
        assert_relative_eq!(units.from_default(Quantity::SpecificEnthalpy, 2.5), 2500.0);
        assert_relative_eq!(units.from_default(Quantity::IsobaricHeatCapacity, 4.18), 4180.0);
        assert_relative_eq!(units.from_default(Quantity::IsothermalCompressibility, 1.0), 1e-6);
        assert_relative_eq!(units.to_default(Quantity::Wavelength, 0.5e-6), 0.5);
    }

    #[test]
    fn imperial_units() {
        let units = UnitSystem::Imperial;

        assert_relative_eq!(units.to_default(Quantity::Temperature, 32.0), 273.15, epsilon = 1e-12);
        assert_relative_eq!(units.to_default(Quantity::Temperature, 212.0), 373.15, epsilon = 1e-12);
        assert_relative_eq!(
            units.from_default(Quantity::Pressure, 0.101_325),
            14.695_948_8,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            units.from_default(Quantity::SpecificEnthalpy, 2326.0),
            1000.0,
            max_relative = 1e-4
        );
        assert_eq!(units.unit(Quantity::IsothermalCompressibility), "in²/lbf");
    }

    #[test]
    fn dimensionless_quantities_pass_through() {
        for units in [UnitSystem::Engineering, UnitSystem::Si, UnitSystem::Imperial] {
            assert_relative_eq!(units.to_default(Quantity::VapourFraction, 0.3), 0.3);
            assert_relative_eq!(units.from_default(Quantity::PrandtlNumber, 6.1), 6.1);
            assert_eq!(units.unit(Quantity::IsentropicExponent), "");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(
            UnitSystem::Default.label(Quantity::SpecificEnthalpy),
            "specific enthalpy [kJ/kg]"
        );
        assert_eq!(UnitSystem::Imperial.label(Quantity::Temperature), "temperature [°F]");
        assert_eq!(UnitSystem::Si.label(Quantity::VapourFraction), "vapour fraction [-]");
    }

    proptest! {
        #[test]
        fn conversions_round_trip(value in -1e6_f64..1e6) {
            let systems = [UnitSystem::Engineering, UnitSystem::Si, UnitSystem::Imperial];
            let quantities = [
                Quantity::Pressure,
                Quantity::Temperature,
                Quantity::SpecificEnthalpy,
                Quantity::SpecificEntropy,
                Quantity::Density,
                Quantity::ThermalConductivity,
            ];

            for units in systems {
                for quantity in quantities {
                    let back = units.from_default(quantity, units.to_default(quantity, value));
                    prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
                }
            }
        }
    }
}
