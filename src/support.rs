//! Utilities shared by the models.
//!
//! - [`constraint`]: numeric domain checks carried in the type.
//! - [`thermo`]: the capability-based thermodynamic state API.
//! - [`units`]: quantities missing from [`uom`].
//!
//! These modules are public but their APIs are not stable.

pub mod constraint;
pub mod thermo;
pub mod units;
