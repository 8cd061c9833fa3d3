pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod lagrange;
pub mod newton;
pub mod spline;

pub use algorithms::Algorithm;
pub use lagrange::{lagrange_interpolation, Lagrange, LagrangeCfg};
pub use newton::{newton_interpolation, Newton, NewtonCfg};
pub use spline::{cubic_spline_interpolation, NaturalSpline, NaturalSplineCfg};

/// Builds an approximant with `algorithm`, unchecked.
///
/// Same preconditions as the per-method kernels.
pub fn interpolate_with(algorithm: Algorithm, x: &[f64], y: &[f64]) -> Box<dyn Interpolator> {
    match algorithm {
        Algorithm::Lagrange      => Box::new(lagrange_interpolation(x, y)),
        Algorithm::Newton        => Box::new(newton_interpolation(x, y)),
        Algorithm::SplineNatural => Box::new(cubic_spline_interpolation(x, y)),
    }
}

/// Validates the sample set, then builds with `algorithm`.
pub fn build_with(
    algorithm: Algorithm,
    x: &[f64],
    y: &[f64],
) -> Result<Box<dyn Interpolator>, errors::InterpolationError> {
    Ok(match algorithm {
        Algorithm::Lagrange =>
            Box::new(lagrange::build(LagrangeCfg::new().set_x(x)?.set_y(y)?)?),
        Algorithm::Newton =>
            Box::new(newton::build(NewtonCfg::new().set_x(x)?.set_y(y)?)?),
        Algorithm::SplineNatural =>
            Box::new(spline::natural::build(NaturalSplineCfg::new().set_x(x)?.set_y(y)?)?),
    })
}
