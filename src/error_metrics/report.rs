/// Error of one approximant against one target over one grid.
///
/// [`ErrorReport`]
/// - `max_error`   : `max_i |f(x_i) - p(x_i)|`
/// - `mse`         : `mean_i (f(x_i) - p(x_i))^2`
/// - `n_evaluated` : grid size
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ErrorReport {
    pub max_error   : f64,
    pub mse         : f64,
    pub n_evaluated : usize,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Max Error = {}, MSE = {}", sci(self.max_error), sci(self.mse))
    }
}


/// Four-digit scientific notation with a signed, two-digit-minimum
/// exponent: `5.0000e-01`, `1.2346e+03`, `nan`, `inf`.
pub fn sci(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".to_owned() } else { "-inf".to_owned() };
    }

    let raw = format!("{v:.4e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None    => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}
