/// Configuration shared by the Ridders and Brent solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SolverConfig {
    /// Maximum iteration count.
    pub(crate) max_iters: usize,

    /// Absolute tolerance on the function value.
    pub(crate) tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-9,
        }
    }
}

/// Configuration of the outward bracketing sweep that precedes a Brent solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BracketConfig {
    /// Step size, relative to the starting point.
    pub(crate) step: f64,

    /// Maximum number of steps taken by each end of the bracket.
    pub(crate) max_steps: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            step: 1e-3,
            max_steps: 1000,
        }
    }
}
