use super::{Solution, SolverConfig};

/// Finds a root of `f` in `[a, b]` by Ridders' method.
///
/// If `f(a)` and `f(b)` share a sign, the end with the smaller residual is
/// returned unconverged.
pub(crate) fn ridders(f: impl Fn(f64) -> f64, a: f64, b: f64, config: &SolverConfig) -> Solution {
    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));

    if fa.abs() <= config.tolerance {
        return Solution::converged(a, fa, 0);
    }
    if fb.abs() <= config.tolerance {
        return Solution::converged(b, fb, 0);
    }
    if fa.signum() == fb.signum() {
        return if fa.abs() < fb.abs() {
            Solution::stopped(a, fa, 0)
        } else {
            Solution::stopped(b, fb, 0)
        };
    }

    let mut best = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };

    for iter in 1..=config.max_iters {
        let m = 0.5 * (a + b);
        let fm = f(m);

        let s = (fm * fm - fa * fb).sqrt();
        if s == 0.0 {
            return Solution::stopped(m, fm, iter);
        }

        let x = m + (m - a) * (fa - fb).signum() * fm / s;
        let fx = f(x);

        if fx.abs() < best.1.abs() {
            best = (x, fx);
        }
        if fx.abs() <= config.tolerance {
            return Solution::converged(x, fx, iter);
        }

        // Keep the tightest interval with a sign change.
        if fm.signum() != fx.signum() {
            (a, fa, b, fb) = (m, fm, x, fx);
        } else if fa.signum() != fx.signum() {
            (b, fb) = (x, fx);
        } else {
            (a, fa) = (x, fx);
        }

        if a == b {
            break;
        }
    }

    Solution::stopped(best.0, best.1, config.max_iters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root() {
        let solution = ridders(|x| x * x - 2.0, 0.0, 2.0, &SolverConfig::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-9);
        assert!(solution.iters < 10);
    }

    #[test]
    fn handles_reversed_bracket() {
        let solution = ridders(|x| (x - 1.0).exp() - 1.0, 3.0, -1.0, &SolverConfig::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn reports_missing_sign_change() {
        let solution = ridders(|x| x * x + 1.0, -1.0, 2.0, &SolverConfig::default());

        assert!(!solution.converged);
        assert_relative_eq!(solution.x, -1.0);
    }

    #[test]
    fn stops_at_iteration_cap() {
        let config = SolverConfig {
            max_iters: 1,
            tolerance: 0.0,
        };
        let solution = ridders(|x| x.powi(3) - 0.3, 0.0, 1.0, &config);

        assert!(!solution.converged);
        assert_eq!(solution.iters, 1);
        assert!(solution.residual.abs() < 0.3);
    }
}
