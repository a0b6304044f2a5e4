use super::{Solution, SolverConfig};

/// Finds a root of `f` in `[a, b]` by Brent's method.
///
/// Combines bisection, the secant method and inverse quadratic
/// interpolation. If `f(a)` and `f(b)` share a sign, the end with the
/// smaller residual is returned unconverged.
pub(crate) fn brent(f: impl Fn(f64) -> f64, a: f64, b: f64, config: &SolverConfig) -> Solution {
    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));

    if fa.signum() == fb.signum() && fa != 0.0 && fb != 0.0 {
        return if fa.abs() < fb.abs() {
            Solution::stopped(a, fa, 0)
        } else {
            Solution::stopped(b, fb, 0)
        };
    }

    let (mut c, mut fc) = (b, fb);
    let (mut d, mut e) = (b - a, b - a);

    for iter in 1..=config.max_iters {
        if fb.signum() == fc.signum() {
            (c, fc) = (a, fa);
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            (a, fa) = (b, fb);
            (b, fb) = (c, fc);
            (c, fc) = (a, fa);
        }

        if fb.abs() <= config.tolerance {
            return Solution::converged(b, fb, iter - 1);
        }

        let tol = 2.0 * f64::EPSILON * b.abs();
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol {
            return Solution::stopped(b, fb, iter - 1);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant step.
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation.
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        (a, fa) = (b, fb);
        b += if d.abs() > tol { d } else { tol.copysign(xm) };
        fb = f(b);
    }

    if fb.abs() <= config.tolerance {
        Solution::converged(b, fb, config.max_iters)
    } else {
        Solution::stopped(b, fb, config.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_cube_root() {
        let solution = brent(|x| x.powi(3) - 5.0, 0.0, 3.0, &SolverConfig::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.x, 5.0_f64.cbrt(), epsilon = 1e-9);
    }

    #[test]
    fn solves_steep_function() {
        let solution = brent(|x| 1.0 / x - 1e3, 1e-4, 1e-2, &SolverConfig::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.x, 1e-3, max_relative = 1e-9);
    }

    #[test]
    fn accepts_root_at_bracket_end() {
        let solution = brent(|x| x - 1.0, 1.0, 2.0, &SolverConfig::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn reports_missing_sign_change() {
        let solution = brent(|x| x * x + 1.0, 1.0, 2.0, &SolverConfig::default());
        assert!(!solution.converged);
    }
}
