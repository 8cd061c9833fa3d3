//! Interpolation of sampled functions over an interval.
//!
//! - [`functions`]      closed catalog of target functions
//! - [`nodes`]          uniform and Chebyshev node generators
//! - [`interpolation`]  Lagrange, Newton and natural cubic spline approximants
//! - [`error_metrics`]  max absolute error and mean squared error
//! - [`comparison`]     runs every selected method against one target

pub mod functions;
pub mod nodes;
pub mod interpolation;
pub mod error_metrics;
pub mod comparison;

pub use functions::{get_function, FunctionKind, TargetFunction, Univariate};
pub use nodes::{generate_nodes, linspace, NodeKind};
pub use interpolation::{
    cubic_spline_interpolation,
    lagrange_interpolation,
    newton_interpolation,
    Interpolator,
};
pub use error_metrics::{calculate_max_error, calculate_mse};
