use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NodeError {
    #[error("invalid interval [{a}, {b}]: bounds must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("insufficient nodes: got {got}, need at least 2")]
    InsufficientNodes { got: usize },

    #[error("unknown node distribution {name:?}")]
    UnknownKind { name: String },
}
