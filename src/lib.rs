//! # Twine IF97
//!
//! IAPWS-IF97 properties of water and steam for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: the [`If97`](models::water::if97::If97) property calculator
//!   and its [`twine_core::Model`] implementation.
//! - [`support`]: supporting utilities, including the capability-based
//!   [`Iapws97`](support::thermo::model::Iapws97) thermo model.
//!
//! ## Quick start
//!
//! ```
//! use twine_if97::models::water::if97::{If97, Region};
//!
//! let if97 = If97::default();
//! assert_eq!(if97.region_pt(0.1, 500.0)?, Region::Region2);
//!
//! let h = if97.specific_enthalpy_pt(0.1, 500.0)?;
//! let t = if97.temperature_ph(0.1, h)?;
//! assert!((t - 500.0).abs() < 0.05);
//! # Ok::<(), twine_if97::models::water::if97::If97Error>(())
//! ```
//!
//! ## Stability
//!
//! Modules in [`support`] are public because they're useful, but their APIs
//! are not stable. Model-specific utility code stays private to its model.

pub mod models;
pub mod support;
