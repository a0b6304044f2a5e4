//! Thermodynamic property models.

pub mod iapws97;

pub use iapws97::Iapws97;
