//! Node generation on `[a, b]`.
//!
//! [`generate_nodes`] is the unchecked kernel; [`try_generate_nodes`]
//! validates the interval and node count first.
//!
//! Both return nodes in ascending order. For Chebyshev nodes this is the
//! reverse of index order, since `cos((2i+1)π / 2n)` decreases with `i`.

use std::f64::consts::PI;

use crate::nodes::errors::NodeError;
use crate::nodes::kinds::NodeKind;


/// `n` equally spaced points from `a` to `b`, both endpoints exact.
///
/// `n == 0` gives an empty vector and `n == 1` gives `[a]`.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| a + step * i as f64).collect();
            // pin the last point; a + step*(n-1) can miss b by an ulp
            xs[n - 1] = b;
            xs
        }
    }
}


/// Chebyshev node of index `i` out of `n`, mapped onto `[a, b]`.
///
/// ```text
/// t_i = cos((2i + 1)π / 2n)
/// x_i = (a + b)/2 + (b - a)/2 * t_i
/// ```
#[inline]
pub fn chebyshev_node(a: f64, b: f64, n: usize, i: usize) -> f64 {
    let t = ((2 * i + 1) as f64 * PI / (2 * n) as f64).cos();
    0.5 * (a + b) + 0.5 * (b - a) * t
}


/// Generates `n` nodes on `[a, b]` with the given distribution.
///
/// # Preconditions
/// `a < b` and `n >= 2`. Not checked; see [`try_generate_nodes`].
///
/// # Ordering
/// Always ascending. Chebyshev nodes are emitted for `i = n-1, ..., 0`
/// so the result can be passed straight to every interpolation method.
pub fn generate_nodes(a: f64, b: f64, n: usize, kind: NodeKind) -> Vec<f64> {
    match kind {
        NodeKind::Uniform   => linspace(a, b, n),
        NodeKind::Chebyshev => (0..n).rev().map(|i| chebyshev_node(a, b, n, i)).collect(),
    }
}


/// Validating counterpart of [`generate_nodes`].
///
/// # Errors
/// - [`NodeError::InvalidInterval`] if `a` or `b` is non-finite or `a >= b`
/// - [`NodeError::InsufficientNodes`] if `n < 2`
pub fn try_generate_nodes(a: f64, b: f64, n: usize, kind: NodeKind) -> Result<Vec<f64>, NodeError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(NodeError::InvalidInterval { a, b });
    }
    if n < 2 {
        return Err(NodeError::InsufficientNodes { got: n });
    }
    Ok(generate_nodes(a, b, n, kind))
}
