use crate::support::thermo::model::iapws97::Iapws97Fluid;

/// Canonical identifier for water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl Iapws97Fluid for Water {}
