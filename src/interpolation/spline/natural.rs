//! Natural Cubic Spline
//!
//! Piecewise cubic through every node with continuous first and second
//! derivatives at the interior knots and `S''(x[0]) = S''(x[n-1]) = 0`.
//!
//! On segment `i`
//!
//! ```text
//! S_i(x) = y[i] + b[i] dx + c[i] dx^2 + d[i] dx^3,    dx = x - x[i]
//! ```
//!
//! where `c` (half the second derivative at each knot) solves a
//! tridiagonal system over the interior knots in O(n). Outside `[x[0], x[n-1]]`
//! the nearest end segment's cubic is continued.

use log::{debug, warn};

use crate::functions::Univariate;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{
    spacings,
    solve_tridiagonal,
    coeffs,
    find_interval
};
use crate::interpolation::traits::Interpolator;


#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NaturalSplineCfg<'a>);


fn solve_c_natural(
    n: usize,
    h: &[f64],
    y: &[f64]
) -> Vec<f64> {
    // number of interior unknowns
    let m = n.saturating_sub(2);

    let mut c_full = vec![0.0; n];
    if m == 0 {
        return c_full;
    }

    // tridiagonal system for interior c
    // subdiag   a[k] = h[i-1]
    // diag      b[k] = 2(h[i-1]+h[i])
    // superdiag c[k] = h[i]
    // rhs[k] = 3[(y[i+1]-y[i])/h[i] - (y[i] - y[i-1])/h[i-1]]
    let mut a_sub  = vec![0.0; m];
    let mut b_diag = vec![0.0; m];
    let mut c_sup  = vec![0.0; m];
    let mut rhs    = vec![0.0; m];

    for k in 0..m {
        let i = k + 1;
        a_sub[k]  = h[i - 1];
        b_diag[k] = 2.0 * (h[i-1] + h[i]);
        c_sup[k]  = h[i];
        rhs[k]    = 3.0 * ((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1]);
    }

    let c_interior = solve_tridiagonal(&a_sub, &b_diag, &c_sup, &rhs);
    if c_interior.iter().any(|v| !v.is_finite()) {
        warn!("natural spline: singular tridiagonal system over {n} knots; are the nodes distinct?");
    }

    c_full[1..=m].copy_from_slice(&c_interior);
    c_full
}


/// Natural cubic spline with precomputed per-segment coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl NaturalSpline {
    #[inline]
    fn segment(&self, xq: f64) -> (usize, f64) {
        let lo = find_interval(&self.x, xq);
        (lo, xq - self.x[lo])
    }

    /// `S'(xq)`, from the same segment [`Univariate::eval`] uses.
    pub fn derivative(&self, xq: f64) -> f64 {
        let (i, dx) = self.segment(xq);
        self.b[i] + dx * (2.0 * self.c[i] + dx * 3.0 * self.d[i])
    }

    /// `S''(xq)`. Zero at both end knots.
    pub fn second_derivative(&self, xq: f64) -> f64 {
        let (i, dx) = self.segment(xq);
        2.0 * self.c[i] + 6.0 * self.d[i] * dx
    }

    /// Segment coefficients `(a, b, c, d)` for segment `i`.
    pub fn segment_coeffs(&self, i: usize) -> (f64, f64, f64, f64) {
        (self.y[i], self.b[i], self.c[i], self.d[i])
    }

    pub fn n_segments(&self) -> usize { self.b.len() }
}

impl Univariate for NaturalSpline {
    fn eval(&self, xq: f64) -> f64 {
        let (i, dx) = self.segment(xq);
        self.y[i] + dx * (self.b[i] + dx * (self.c[i] + dx * self.d[i]))
    }
}

impl Interpolator for NaturalSpline {
    fn algorithm(&self) -> Algorithm { Algorithm::SplineNatural }
    fn nodes(&self) -> &[f64] { &self.x }
}


/// Builds the natural cubic spline through `(x[i], y[i])`.
///
/// # Preconditions
/// `x.len() == y.len() >= 2`, `x` strictly increasing. Not checked;
/// unsorted nodes give a spline that no longer interpolates.
/// With two nodes the spline is the straight line through them.
pub fn cubic_spline_interpolation(x: &[f64], y: &[f64]) -> NaturalSpline {
    let n = x.len();

    let h = spacings(x);
    let c = solve_c_natural(n, &h, y);
    let (b, d) = coeffs(n, &h, y, &c);

    debug!("natural spline: {} segments", n - 1);
    NaturalSpline { x: x.to_vec(), y: y.to_vec(), b, c, d }
}


/// Validates `cfg` and builds the spline.
pub fn build(cfg: NaturalSplineCfg) -> Result<NaturalSpline, InterpolationError> {
    cfg.common.validate()?;
    Ok(cubic_spline_interpolation(cfg.common.x(), cfg.common.y()))
}


/// Evaluate a natural cubic spline at `cfg.common.x_eval()`.
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = build(cfg)?;
    Ok(InterpolationReport::from_interpolant(&spline, cfg.common.x_eval()))
}
