use thiserror::Error;

use crate::functions::errors::FunctionError;
use crate::interpolation::errors::InterpolationError;
use crate::nodes::errors::NodeError;

#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error(transparent)]
    Nodes(#[from] NodeError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("invalid evaluation grid size {got}, need at least 1")]
    InvalidGridSize { got: usize },

    #[error("no interpolation methods selected")]
    NoMethods,
}
