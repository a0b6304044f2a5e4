//! Extensions to [`uom`].
//!
//! [`uom`] has no named quantities for specific enthalpy, entropy or internal
//! energy, so they are defined here by dimension. Construct them with the
//! units of the matching [`uom`] quantities:
//!
//! ```
//! use twine_if97::support::units::{SpecificEnthalpy, SpecificEntropy};
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
//! };
//!
//! let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(2_675.0);
//! let s = SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(7.36);
//! assert!(h.value > 0.0 && s.value > 0.0);
//! ```

mod quantities;

pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};
