//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Each model decides which fluids it
//! accepts, usually through a marker trait implemented on the fluid.

mod water;

pub use water::Water;
