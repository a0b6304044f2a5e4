//! Public Twine models.
//!
//! Models are the primary public interface of this crate, organized into
//! domain-specific submodules. Today that is [`water`], home of the
//! IAPWS-IF97 formulation.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the computation lives. The `core` module is an
//! implementation detail and is not re-exported.
//!
//! Public entry points are thin adapters over the core: the model's own
//! facade, a [`twine_core::Model`] implementation, and a capability model in
//! [`support::thermo`](crate::support::thermo) can all share one core.

pub mod water;
