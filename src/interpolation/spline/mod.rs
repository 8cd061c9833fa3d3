pub(crate) mod helpers;
pub mod natural;

pub use natural::{cubic_spline_interpolation, NaturalSpline, NaturalSplineCfg};
