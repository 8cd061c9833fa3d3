//! Error metrics between a target function and an approximant.
//!
//! All reductions run over `f(x_i) - p(x_i)` on the caller's grid.
//! Non-finite values are not filtered: a NaN anywhere in the differences
//! makes both metrics NaN, an infinity makes them infinite. An empty grid
//! has no meaningful error and yields NaN.

use crate::error_metrics::report::ErrorReport;
use crate::functions::Univariate;


#[inline]
fn differences<'g, F, P>(f: &'g F, p: &'g P, x: &'g [f64]) -> impl Iterator<Item = f64> + 'g
where
    F: Univariate + ?Sized,
    P: Univariate + ?Sized,
{
    x.iter().map(move |&xi| f.eval(xi) - p.eval(xi))
}

/// NaN-propagating max; `f64::max` would drop NaNs.
#[inline]
fn nan_max(acc: f64, v: f64) -> f64 {
    if v.is_nan() || v > acc { v } else { acc }
}


/// Pointwise `|f(x_i) - p(x_i)|`, same length as `x`.
pub fn abs_errors<F, P>(f: &F, p: &P, x: &[f64]) -> Vec<f64>
where
    F: Univariate + ?Sized,
    P: Univariate + ?Sized,
{
    differences(f, p, x).map(f64::abs).collect()
}


/// `max_i |f(x_i) - p(x_i)|` over the grid `x`.
///
/// ```
/// use runge::calculate_max_error;
///
/// let x = [0.0, 0.5, 1.0];
/// let err = calculate_max_error(&|t: f64| t * t, &|t: f64| t, &x);
/// assert_eq!(err, 0.25);
/// ```
pub fn calculate_max_error<F, P>(f: &F, p: &P, x: &[f64]) -> f64
where
    F: Univariate + ?Sized,
    P: Univariate + ?Sized,
{
    if x.is_empty() {
        return f64::NAN;
    }
    differences(f, p, x).map(f64::abs).fold(0.0, nan_max)
}


/// `mean_i (f(x_i) - p(x_i))^2` over the grid `x`.
pub fn calculate_mse<F, P>(f: &F, p: &P, x: &[f64]) -> f64
where
    F: Univariate + ?Sized,
    P: Univariate + ?Sized,
{
    if x.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = differences(f, p, x).map(|d| d * d).sum();
    sum / x.len() as f64
}


/// Both metrics in one pass.
pub fn evaluate<F, P>(f: &F, p: &P, x: &[f64]) -> ErrorReport
where
    F: Univariate + ?Sized,
    P: Univariate + ?Sized,
{
    reduce(differences(f, p, x), x.len())
}


/// [`evaluate`] over values already computed on the same grid.
///
/// `target` and `approx` must have equal lengths.
pub fn report_from_values(target: &[f64], approx: &[f64]) -> ErrorReport {
    reduce(target.iter().zip(approx).map(|(&t, &a)| t - a), target.len())
}


/// [`abs_errors`] over values already computed on the same grid.
pub fn abs_differences(target: &[f64], approx: &[f64]) -> Vec<f64> {
    target.iter().zip(approx).map(|(&t, &a)| (t - a).abs()).collect()
}


fn reduce(diffs: impl Iterator<Item = f64>, n: usize) -> ErrorReport {
    if n == 0 {
        return ErrorReport { max_error: f64::NAN, mse: f64::NAN, n_evaluated: 0 };
    }

    let (max_error, sum_sq) = diffs
        .fold((0.0, 0.0), |(mx, sq), d| (nan_max(mx, d.abs()), sq + d * d));

    ErrorReport { max_error, mse: sum_sq / n as f64, n_evaluated: n }
}
