//! Shared configuration for the checked interpolation entry points.
//!
//! [`CommonCfg`] carries the sample set and evaluation points
//! - `x`             : interpolation nodes, strictly increasing
//! - `y`             : sampled values, same length as `x`
//! - `x_eval`        : points to evaluate in `interpolate`
//! - `x_min_spacing` : smallest allowed gap between consecutive nodes;
//!   [`DEFAULT_X_TOL`] by default
//!
//! Setters validate eagerly so a built config only fails [`CommonCfg::validate`]
//! when `x` or `y` was never set.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        let (x, y) = (self.x, self.y);

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Node checks: finite, at least two, strictly increasing with
/// gaps no smaller than `min_spacing`.
pub(crate) fn check_nodes(x: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    if x.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    for w in x.windows(2) {
        if (w[1] - w[0]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
        }
        if w[1] <= w[0] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

pub(crate) fn check_lengths(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_nodes(v, self.common.x_min_spacing)?;
                $crate::interpolation::config::check_lengths(v.len(), self.common.y.len())?;
                self.common.x = v;
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                $crate::interpolation::config::check_lengths(self.common.x.len(), v.len())?;
                self.common.y = v;
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                self.common.x_eval = v;
                Ok(self)
            }

            /// Must be set before [`Self::set_x`] to affect node validation.
            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }
                self.common.x_min_spacing = v;
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }

        impl<'a> Default for $cfg {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
