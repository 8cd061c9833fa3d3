use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FunctionError {
    #[error("unknown target function {name:?}")]
    UnknownFunction { name: String },
}
