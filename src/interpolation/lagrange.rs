//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial)
//!
//! ```text
//! L_k(x) = prod_{j != k} (x - x[j]) / (x[k] - x[j])
//! P(x)   = sum_k y[k] * L_k(x)
//! ```
//!
//! Every basis product is recomputed on each evaluation, so a single
//! point costs O(n²). Fine for the small node counts this is used with.


use log::debug;

use crate::functions::Univariate;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Lagrange interpolation configuration
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then the `set_*` setters.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Lagrange-form interpolating polynomial. Owns a copy of its sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct Lagrange {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Lagrange {
    /// `k`-th basis polynomial at `xq`.
    #[inline]
    pub fn basis(&self, k: usize, xq: f64) -> f64 {
        let x  = &self.x;
        let xk = x[k];

        x.iter()
            .enumerate()
            .filter(|&(j, _)| j != k)
            .fold(1.0, |acc, (_, &xj)| acc * (xq - xj) / (xk - xj))
    }

    pub fn values(&self) -> &[f64] { &self.y }
}

impl Univariate for Lagrange {
    fn eval(&self, xq: f64) -> f64 {
        self.y
            .iter()
            .enumerate()
            .map(|(k, &yk)| yk * self.basis(k, xq))
            .sum()
    }
}

impl Interpolator for Lagrange {
    fn algorithm(&self) -> Algorithm { Algorithm::Lagrange }
    fn nodes(&self) -> &[f64] { &self.x }
}


/// Builds the Lagrange interpolant through `(x[i], y[i])`.
///
/// # Preconditions
/// `x.len() == y.len() >= 2` and the `x` are pairwise distinct. Not
/// checked; a repeated node divides by zero in its basis polynomial.
/// Node order does not matter.
pub fn lagrange_interpolation(x: &[f64], y: &[f64]) -> Lagrange {
    debug!("lagrange: basis over {} nodes", x.len());
    Lagrange { x: x.to_vec(), y: y.to_vec() }
}


/// Validates `cfg` and builds the interpolant.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`] or
///   [`InterpolationError::InsufficientPoints`] if the sample set is incomplete.
pub fn build(cfg: LagrangeCfg) -> Result<Lagrange, InterpolationError> {
    cfg.common.validate()?;
    Ok(lagrange_interpolation(cfg.common.x(), cfg.common.y()))
}


/// Builds the interpolant and evaluates it at `cfg.common.x_eval()`.
///
/// Points outside `[x[0], x[n-1]]` are extrapolated by the same polynomial.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name` `"lagrange"`.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let poly = build(cfg)?;
    Ok(InterpolationReport::from_interpolant(&poly, cfg.common.x_eval()))
}
