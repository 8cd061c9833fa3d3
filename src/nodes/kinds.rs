//! Node distribution variants.

use std::str::FromStr;

use crate::nodes::errors::NodeError;

/// Node distribution strategies.
/// - [`NodeKind::Uniform`]   equally spaced, both endpoints included
/// - [`NodeKind::Chebyshev`] Chebyshev points mapped onto `[a, b]`, clustered at the ends
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Uniform,
    Chebyshev,
}

impl NodeKind {
    pub const ALL: [NodeKind; 2] = [NodeKind::Uniform, NodeKind::Chebyshev];

    pub const fn kind_name(self) -> &'static str {
        match self {
            NodeKind::Uniform   => "uniform",
            NodeKind::Chebyshev => "chebyshev",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.kind_name() == name)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

impl FromStr for NodeKind {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| NodeError::UnknownKind { name: s.to_owned() })
    }
}
