//! Real-valued functions of one real variable.
//!
//! [`Univariate`] is the common currency between the catalog, the
//! interpolants and the error metrics. Closures and `fn` items get it
//! for free, so `f64::sin` or `|x| x * x` can be compared against any
//! approximant directly.

/// A real-valued function of one real variable.
pub trait Univariate {
    /// evaluates a single point
    fn eval(&self, x: f64) -> f64;

    /// Applies [`Univariate::eval`] elementwise, preserving length and order.
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}

impl<F> Univariate for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
