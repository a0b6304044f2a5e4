//! Bounded bracketing root finders.
//!
//! Both solvers stop after [`SolverConfig::max_iters`] iterations. A solve
//! that does not reach the residual tolerance is not an error: the last
//! iterate is returned with `converged` unset, and callers decide whether
//! to log it.

mod brent;
mod config;
mod ridders;

pub(crate) use brent::brent;
pub(crate) use config::{BracketConfig, SolverConfig};
pub(crate) use ridders::ridders;

/// Outcome of a bracketed solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Solution {
    /// Last iterate.
    pub(crate) x: f64,

    /// Function value at `x`.
    pub(crate) residual: f64,

    /// Iteration count performed by the solver.
    pub(crate) iters: usize,

    /// Whether `|residual|` reached the configured tolerance.
    pub(crate) converged: bool,
}

impl Solution {
    fn converged(x: f64, residual: f64, iters: usize) -> Self {
        Self {
            x,
            residual,
            iters,
            converged: true,
        }
    }

    fn stopped(x: f64, residual: f64, iters: usize) -> Self {
        Self {
            x,
            residual,
            iters,
            converged: false,
        }
    }
}

/// Searches outward from `x0` for an interval `[lo, hi]` with `f(lo) > 0 > f(hi)`.
///
/// The two ends move independently in steps of `config.step · x0`, the lower
/// end never reaching zero. Returns `None` if no such interval is found
/// within `config.max_steps` steps.
pub(crate) fn bracket_decreasing(
    f: impl Fn(f64) -> f64,
    x0: f64,
    config: &BracketConfig,
) -> Option<(f64, f64)> {
    let step = config.step * x0;
    let (mut lo, mut hi) = (x0, x0);
    let (mut f_lo, mut f_hi) = (f(lo), f(hi));

    for _ in 0..config.max_steps {
        if f_lo > 0.0 && f_hi < 0.0 {
            return Some((lo, hi));
        }
        if f_lo <= 0.0 && lo - step > 0.0 {
            lo -= step;
            f_lo = f(lo);
        }
        if f_hi >= 0.0 {
            hi += step;
            f_hi = f(hi);
        }
    }

    (f_lo > 0.0 && f_hi < 0.0).then_some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_a_decreasing_function() {
        let f = |x: f64| 2.0 - x;
        let config = BracketConfig::default();

        let (lo, hi) = bracket_decreasing(f, 1.5, &config).expect("bracket");
        assert!(f(lo) > 0.0 && f(hi) < 0.0);

        let (lo, hi) = bracket_decreasing(f, 2.5, &config).expect("bracket");
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn gives_up_without_sign_change() {
        let f = |x: f64| 1.0 + x * x;
        assert_eq!(bracket_decreasing(f, 1.0, &BracketConfig::default()), None);
    }
}
