//! Target function catalog.
//!
//! A closed set of closed-form functions used as interpolation targets.
//! Lookup by display name returns `None` for anything unrecognized, so
//! callers must guard before sampling.

use std::str::FromStr;

use crate::functions::errors::FunctionError;
use crate::functions::traits::Univariate;


/// Catalog entries.
/// - [`FunctionKind::Sin`]   `sin(x)`
/// - [`FunctionKind::Runge`] `1 / (1 + 25x^2)`
/// - [`FunctionKind::Abs`]   `|x|`
/// - [`FunctionKind::Exp`]   `exp(x)`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Sin,
    Runge,
    Abs,
    Exp,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 4] = [
        FunctionKind::Sin,
        FunctionKind::Runge,
        FunctionKind::Abs,
        FunctionKind::Exp,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FunctionKind::Sin   => "sin(x)",
            FunctionKind::Runge => "1 / (1 + 25x^2)",
            FunctionKind::Abs   => "|x|",
            FunctionKind::Exp   => "exp(x)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            FunctionKind::Sin   => x.sin(),
            FunctionKind::Runge => 1.0 / (1.0 + 25.0 * x * x),
            FunctionKind::Abs   => x.abs(),
            FunctionKind::Exp   => x.exp(),
        }
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FunctionKind {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FunctionError::UnknownFunction { name: s.to_owned() })
    }
}


/// A catalog function, callable through [`Univariate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargetFunction {
    kind: FunctionKind,
}

impl TargetFunction {
    pub fn new(kind: FunctionKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> FunctionKind { self.kind }
    pub fn name(&self) -> &'static str { self.kind.name() }
}

impl From<FunctionKind> for TargetFunction {
    fn from(kind: FunctionKind) -> Self {
        Self::new(kind)
    }
}

impl Univariate for TargetFunction {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.kind.apply(x)
    }
}


/// Looks up a catalog function by its display name.
///
/// Returns `None` for unknown names.
///
/// ```
/// use runge::{get_function, Univariate};
///
/// let f = get_function("exp(x)").unwrap();
/// assert_eq!(f.eval(0.0), 1.0);
/// assert!(get_function("tan(x)").is_none());
/// ```
pub fn get_function(name: &str) -> Option<TargetFunction> {
    FunctionKind::from_name(name).map(TargetFunction::new)
}
