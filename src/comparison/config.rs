//! Comparison run configuration.
//!
//! Defaults
//! - interval  : `[-1, 1]`           ([`DEFAULT_INTERVAL`])
//! - nodes     : 10 uniform nodes    ([`DEFAULT_N_NODES`])
//! - grid      : 1000 points         ([`DEFAULT_GRID_SIZE`])
//! - function  : `sin(x)`
//! - methods   : all of [`Algorithm::ALL`]

use crate::comparison::errors::ComparisonError;
use crate::functions::FunctionKind;
use crate::interpolation::Algorithm;
use crate::nodes::errors::NodeError;
use crate::nodes::NodeKind;

pub const DEFAULT_INTERVAL: (f64, f64) = (-1.0, 1.0);
pub const DEFAULT_N_NODES: usize = 10;
pub const DEFAULT_GRID_SIZE: usize = 1000;


#[derive(Debug, Clone)]
pub struct ComparisonCfg {
    pub(crate) function  : FunctionKind,
    pub(crate) node_kind : NodeKind,
    pub(crate) n_nodes   : usize,
    pub(crate) a         : f64,
    pub(crate) b         : f64,
    pub(crate) grid_size : usize,
    pub(crate) methods   : Vec<Algorithm>,
}

impl Default for ComparisonCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonCfg {
    pub fn new() -> Self {
        Self {
            function  : FunctionKind::Sin,
            node_kind : NodeKind::Uniform,
            n_nodes   : DEFAULT_N_NODES,
            a         : DEFAULT_INTERVAL.0,
            b         : DEFAULT_INTERVAL.1,
            grid_size : DEFAULT_GRID_SIZE,
            methods   : Algorithm::ALL.to_vec(),
        }
    }

    pub fn set_function(mut self, v: FunctionKind) -> Self { self.function = v; self }
    pub fn set_node_kind(mut self, v: NodeKind) -> Self { self.node_kind = v; self }

    /// Selects the target by catalog name, e.g. `"exp(x)"`.
    pub fn set_function_by_name(self, name: &str) -> Result<Self, ComparisonError> {
        Ok(self.set_function(name.parse::<FunctionKind>()?))
    }

    /// Selects the node distribution by name, `"uniform"` or `"chebyshev"`.
    pub fn set_node_kind_by_name(self, name: &str) -> Result<Self, ComparisonError> {
        Ok(self.set_node_kind(name.parse::<NodeKind>()?))
    }

    pub fn set_n_nodes(mut self, v: usize) -> Result<Self, ComparisonError> {
        if v < 2 {
            return Err(NodeError::InsufficientNodes { got: v }.into());
        }
        self.n_nodes = v;
        Ok(self)
    }

    pub fn set_interval(mut self, a: f64, b: f64) -> Result<Self, ComparisonError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(NodeError::InvalidInterval { a, b }.into());
        }
        self.a = a;
        self.b = b;
        Ok(self)
    }

    pub fn set_grid_size(mut self, v: usize) -> Result<Self, ComparisonError> {
        if v == 0 {
            return Err(ComparisonError::InvalidGridSize { got: v });
        }
        self.grid_size = v;
        Ok(self)
    }

    /// Selected methods, run in the given order. Duplicates are dropped.
    pub fn set_methods(mut self, v: &[Algorithm]) -> Result<Self, ComparisonError> {
        if v.is_empty() {
            return Err(ComparisonError::NoMethods);
        }
        let mut methods = Vec::with_capacity(v.len());
        for &alg in v {
            if !methods.contains(&alg) {
                methods.push(alg);
            }
        }
        self.methods = methods;
        Ok(self)
    }

    // getters
    pub fn function(&self) -> FunctionKind { self.function }
    pub fn node_kind(&self) -> NodeKind { self.node_kind }
    pub fn n_nodes(&self) -> usize { self.n_nodes }
    pub fn interval(&self) -> (f64, f64) { (self.a, self.b) }
    pub fn grid_size(&self) -> usize { self.grid_size }
    pub fn methods(&self) -> &[Algorithm] { &self.methods }
}
