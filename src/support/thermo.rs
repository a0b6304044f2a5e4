//! Capability-based thermodynamic states.
//!
//! A model implements [`ThermoModel`](capability::ThermoModel) plus the
//! `Has*` traits for the properties it can evaluate, and
//! [`StateFrom`](capability::StateFrom) for each input pair it can resolve.
//! States carry temperature and density, so any model can round-trip them.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
