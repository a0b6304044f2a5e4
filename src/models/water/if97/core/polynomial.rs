//! Evaluation of the sparse power series used by every IF97 equation.
//!
//! A coefficient table is a slice of `(I, J, n)` terms and represents
//! `Σ n·x^I·y^J`. Callers reduce and shift their arguments (`7.1 − π`,
//! `τ − 0.5`, `η + 0.240`, ...) before handing them over, so the evaluator
//! stays oblivious to the region it serves.

/// One `(I, J, n)` term of a two-variable series.
pub(crate) type Term = (i32, i32, f64);

/// One `(I, n)` term of a single-variable series.
pub(crate) type Coefficient = (i32, f64);

/// Value and partial derivatives of a two-variable series, up to second order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Derivatives {
    pub(crate) value: f64,
    pub(crate) dx: f64,
    pub(crate) dy: f64,
    pub(crate) dxx: f64,
    pub(crate) dyy: f64,
    pub(crate) dxy: f64,
}

/// Returns `Σ n·x^I·y^J`.
pub(crate) fn evaluate(terms: &[Term], x: f64, y: f64) -> f64 {
    terms
        .iter()
        .map(|&(i, j, n)| n * x.powi(i) * y.powi(j))
        .sum()
}

/// Returns `Σ n·x^I`.
pub(crate) fn series(coefficients: &[Coefficient], x: f64) -> f64 {
    coefficients.iter().map(|&(i, n)| n * x.powi(i)).sum()
}

/// Returns `Σ n·x^I` with its first and second derivatives.
pub(crate) fn series_derivatives(coefficients: &[Coefficient], x: f64) -> (f64, f64, f64) {
    coefficients
        .iter()
        .fold((0.0, 0.0, 0.0), |(value, dx, dxx), &(i, n)| {
            let fi = f64::from(i);
            (
                value + n * x.powi(i),
                dx + n * power_derivative(x, i),
                dxx + n * fi * (fi - 1.0) * x.powi(i - 2),
            )
        })
}

/// Returns the series value together with its first and second partial derivatives.
pub(crate) fn derivatives(terms: &[Term], x: f64, y: f64) -> Derivatives {
    let mut out = Derivatives::default();

    for &(i, j, n) in terms {
        let (fi, fj) = (f64::from(i), f64::from(j));

        let xi = x.powi(i);
        let yj = y.powi(j);
        let dxi = power_derivative(x, i);
        let dyj = power_derivative(y, j);

        out.value += n * xi * yj;
        out.dx += n * dxi * yj;
        out.dy += n * xi * dyj;
        out.dxy += n * dxi * dyj;

        if i != 0 && i != 1 {
            out.dxx += n * fi * (fi - 1.0) * x.powi(i - 2) * yj;
        }
        if j != 0 && j != 1 {
            out.dyy += n * xi * fj * (fj - 1.0) * y.powi(j - 2);
        }
    }

    out
}

/// Returns `d(x^k)/dx`, treating the constant term as exactly zero.
fn power_derivative(x: f64, k: i32) -> f64 {
    if k == 0 {
        0.0
    } else {
        f64::from(k) * x.powi(k - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const TERMS: [Term; 3] = [(0, 0, 2.0), (1, 2, 3.0), (-1, 3, 0.5)];

    #[test]
    fn evaluates_sum_of_terms() {
        // 2 + 3·x·y² + 0.5·y³/x at x = 2, y = 3
        assert_relative_eq!(evaluate(&TERMS, 2.0, 3.0), 2.0 + 54.0 + 6.75);
    }

    #[test]
    fn single_variable_series() {
        let coefficients = [(0, 1.0), (1, -2.0), (-2, 4.0)];
        assert_relative_eq!(series(&coefficients, 2.0), 1.0 - 4.0 + 1.0);
    }

    #[test]
    fn single_variable_derivatives() {
        let coefficients = [(0, 1.0), (2, 3.0), (-1, 2.0)];
        let (value, dx, dxx) = series_derivatives(&coefficients, 2.0);

        assert_relative_eq!(value, 1.0 + 12.0 + 1.0);
        assert_relative_eq!(dx, 12.0 - 0.5);
        assert_relative_eq!(dxx, 6.0 + 0.5);
    }

    #[test]
    fn derivatives_match_closed_form() {
        let (x, y) = (2.0, 3.0);
        let d = derivatives(&TERMS, x, y);

        assert_relative_eq!(d.value, evaluate(&TERMS, x, y));
        assert_relative_eq!(d.dx, 3.0 * y * y - 0.5 * y.powi(3) / (x * x));
        assert_relative_eq!(d.dy, 6.0 * x * y + 1.5 * y * y / x);
        assert_relative_eq!(d.dxx, y.powi(3) / x.powi(3));
        assert_relative_eq!(d.dyy, 6.0 * x + 3.0 * y / x);
        assert_relative_eq!(d.dxy, 6.0 * y - 1.5 * y * y / (x * x));
    }

    #[test]
    fn constant_terms_have_no_slope_at_origin() {
        let d = derivatives(&[(0, 0, 1.0)], 0.0, 0.0);

        assert_relative_eq!(d.value, 1.0);
        assert_relative_eq!(d.dx, 0.0);
        assert_relative_eq!(d.dy, 0.0);
        assert_relative_eq!(d.dxy, 0.0);
    }
}
