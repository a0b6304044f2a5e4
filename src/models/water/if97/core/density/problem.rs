//! Problem formulation for the pressure solve at fixed `(ρ, T)`.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::water::if97::core::region::{GibbsState, Properties};

/// One Gibbs region at a fixed temperature, with pressure as its only input.
pub(super) struct IsothermModel {
    state: fn(f64, f64) -> GibbsState,
    temperature: f64,
}

impl IsothermModel {
    pub(super) fn new(state: fn(f64, f64) -> GibbsState, temperature: f64) -> Self {
        Self { state, temperature }
    }
}

impl Model for IsothermModel {
    type Input = f64;
    type Output = GibbsState;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.state)(*input, self.temperature))
    }
}

/// Matches the density of the isotherm to a target.
///
/// The residual is `ρ/ρ(p) − 1`, which falls as pressure rises. It is
/// relative because liquid densities barely move with pressure.
pub(super) struct DensityProblem {
    density: f64,
}

impl DensityProblem {
    pub(super) fn new(density: f64) -> Self {
        Self { density }
    }

    pub(super) fn residual(&self, state: &GibbsState) -> f64 {
        self.density / state.density() - 1.0
    }
}

impl EquationProblem<1> for DensityProblem {
    type Input = f64;
    type Output = GibbsState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::water::if97::core::region::region1;

    #[test]
    fn residual_vanishes_at_the_matching_pressure() {
        let model = IsothermModel::new(region1::state, 300.0);
        let Ok(state) = model.call(&3.0);
        let problem = DensityProblem::new(state.density());

        let Ok([at_root]) = problem.residuals(&3.0, &state);
        assert_relative_eq!(at_root, 0.0);

        let Ok(higher) = model.call(&10.0);
        assert!(problem.residual(&higher) < 0.0);
    }
}
