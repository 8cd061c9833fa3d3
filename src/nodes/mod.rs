pub mod errors;
pub mod generate;
pub mod kinds;

pub use generate::{chebyshev_node, generate_nodes, linspace, try_generate_nodes};
pub use kinds::NodeKind;
