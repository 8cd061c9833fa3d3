/// Stores spacings between adjacent nodes
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Solves a tridiagonal system with the Thomas algorithm, O(m).
///
/// Row `k` reads `a_sub[k] z[k-1] + b_diag[k] z[k] + c_sup[k] z[k+1] = rhs[k]`;
/// `a_sub[0]` and `c_sup[m-1]` are ignored. A zero pivot leaves
/// non-finite entries in the result.
pub(crate) fn solve_tridiagonal(
    a_sub : &[f64],
    b_diag: &[f64],
    c_sup : &[f64],
    rhs   : &[f64],
) -> Vec<f64> {
    let m = b_diag.len();
    if m == 0 {
        return Vec::new();
    }

    // factor: unit-lower l_sub, upper u_diag / c_sup
    let mut l_sub  = vec![0.0; m];
    let mut u_diag = vec![0.0; m];
    u_diag[0] = b_diag[0];
    for k in 1..m {
        l_sub[k]  = a_sub[k] / u_diag[k - 1];
        u_diag[k] = b_diag[k] - l_sub[k] * c_sup[k - 1];
    }

    // L z = rhs
    let mut z = rhs.to_vec();
    for k in 1..m {
        z[k] -= l_sub[k] * z[k - 1];
    }

    // U c = z
    z[m - 1] /= u_diag[m - 1];
    for k in (0..m - 1).rev() {
        z[k] = (z[k] - c_sup[k] * z[k + 1]) / u_diag[k];
    }

    z
}


/// Per-interval `b_i`, `d_i` from the second-derivative halves `c`.
/// (`a_i` is `y[i]`.)
pub(crate) fn coeffs(
    n: usize,
    h: &[f64],
    y: &[f64],
    c_full: &[f64]
) -> (Vec<f64>, Vec<f64>) {
    let mut bcoef = vec![0.0; n - 1];
    let mut dcoef = vec![0.0; n - 1];

    for i in 0..n - 1 {
        bcoef[i] = (y[i+1] - y[i]) / h[i] - (h[i] * (2.0 * c_full[i] + c_full[i+1])) / 3.0;
        dcoef[i] = (c_full[i+1] - c_full[i]) / (3.0 * h[i]);
    }

    (bcoef, dcoef)
}


/// Index `lo` of the segment `[x[lo], x[lo+1]]` used for `xq`.
///
/// Clamps to the first segment below `x[0]` and the last one above
/// `x[n-1]`, which is what extrapolation relies on.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
