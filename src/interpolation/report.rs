//! Defines the [`InterpolationReport`] struct returned by the
//! `interpolate` entry point of every method.
//!
//! This report summarizes the algorithm used, the number of data and
//! evaluation points, and the interpolant's values at the evaluation points.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::traits::Interpolator;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"newton"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
        }
    }

    /// Evaluates `interp` at every point of `x_eval`.
    pub(crate) fn from_interpolant<I: Interpolator + ?Sized>(interp: &I, x_eval: &[f64]) -> Self {
        let mut report = Self::new(interp.algorithm(), interp.nodes().len(), x_eval.len());
        report.evaluated = interp.eval_many(x_eval);
        report
    }
}
