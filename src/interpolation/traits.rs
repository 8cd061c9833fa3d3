use crate::functions::Univariate;
use crate::interpolation::algorithms::Algorithm;

/// A constructed approximant.
///
/// Evaluation goes through [`Univariate`], so an interpolant can be
/// handed anywhere a target function is accepted.
pub trait Interpolator: Univariate {
    /// method that built this approximant
    fn algorithm(&self) -> Algorithm;

    /// x-values the approximant was built on
    fn nodes(&self) -> &[f64];
}
