//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed once by divided differences and
//! evaluated at query points using Horner's scheme, O(n) per point.
//! The resulting polynomial is the same one [`crate::interpolation::lagrange`]
//! produces; only the representation differs.


use log::debug;

use crate::functions::Univariate;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Newton interpolation configuration
///
/// # Construction
/// - Use [`NewtonCfg::new`] then the `set_*` setters.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[inline]
pub fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        // descending so c[i - 1] still holds the previous order
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}


/// Newton-form interpolating polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct Newton {
    x: Vec<f64>,
    coeffs: Vec<f64>,
}

impl Newton {
    /// Divided-difference coefficients `c[0..n]`.
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
}

impl Univariate for Newton {
    fn eval(&self, xq: f64) -> f64 {
        let n = self.coeffs.len();

        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = p * (xq - self.x[j]) + self.coeffs[j];
        }
        p
    }
}

impl Interpolator for Newton {
    fn algorithm(&self) -> Algorithm { Algorithm::Newton }
    fn nodes(&self) -> &[f64] { &self.x }
}


/// Builds the Newton interpolant through `(x[i], y[i])`.
///
/// # Preconditions
/// `x.len() == y.len() >= 2` and the `x` are pairwise distinct. Not checked.
pub fn newton_interpolation(x: &[f64], y: &[f64]) -> Newton {
    let coeffs = divided_differences(x, y);
    debug!("newton: divided-difference table over {} nodes", x.len());
    Newton { x: x.to_vec(), coeffs }
}


/// Validates `cfg` and builds the interpolant.
pub fn build(cfg: NewtonCfg) -> Result<Newton, InterpolationError> {
    cfg.common.validate()?;
    Ok(newton_interpolation(cfg.common.x(), cfg.common.y()))
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner's nested form:
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
/// ```
///
/// Points outside the node range are extrapolated by the same polynomial.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let poly = build(cfg)?;
    Ok(InterpolationReport::from_interpolant(&poly, cfg.common.x_eval()))
}
