pub mod catalog;
pub mod errors;
pub mod traits;

pub use catalog::{get_function, FunctionKind, TargetFunction};
pub use traits::Univariate;
