//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]      Lagrange basis form, O(n²) per point
/// - [`Algorithm::Newton`]        divided differences with Horner evaluation, O(n) per point
/// - [`Algorithm::SplineNatural`] piecewise cubic with zero end curvature
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Lagrange,
    Newton,
    SplineNatural,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Lagrange,
        Algorithm::Newton,
        Algorithm::SplineNatural,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "lagrange",
            Algorithm::Newton        => "newton",
            Algorithm::SplineNatural => "natural cubic spline",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.algorithm_name() == name)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
