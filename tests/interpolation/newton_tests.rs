use runge::interpolation::newton::{build, divided_differences, interpolate, NewtonCfg};
use runge::interpolation::errors::InterpolationError;
use runge::{newton_interpolation, Univariate};

type RungeResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn quadratic_global_match() -> RungeResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    Ok(())
}

#[test]
fn divided_difference_table() {
    // y = x^2 on 0,1,2 -> c = [0, 1, 1]
    let c = divided_differences(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]);
    assert_vec_close(&c, &[0.0, 1.0, 1.0]);

    // y = x^3 on 0,1,2,3 -> c = [0, 1, 3, 1]
    let c = divided_differences(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 8.0, 27.0]);
    assert_vec_close(&c, &[0.0, 1.0, 3.0, 1.0]);
}

#[test]
fn exact_hits() -> RungeResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y);
    Ok(())
}

#[test]
fn extrapolates_with_same_polynomial() -> RungeResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];

    let poly = build(NewtonCfg::new().set_x(&x)?.set_y(&y)?)?;
    assert!(approx_eq(poly.eval(-1.0), 1.0));
    assert!(approx_eq(poly.eval(3.0), 9.0));
    Ok(())
}

#[test]
fn unsorted_nodes_still_interpolate() {
    let x = [2.0, -1.0, 0.5, 3.0];
    let y = [1.0, 4.0, -2.0, 0.0];

    let poly = newton_interpolation(&x, &y);
    assert_vec_close(&poly.eval_many(&x), &y);
}

#[test]
fn unequal_length_error() {
    let x  = [0.0, 1.0, 2.0];
    let y  = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn non_increasing_x_error() {
    let x = [0.0, 2.0, 1.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn near_duplicate_x_error() {
    let x = [0.0, 1e-13, 1.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn custom_x_tol_applies_to_later_set_x() {
    let x = [0.0, 1e-3, 1.0];
    let err = NewtonCfg::new()
        .set_x_tol(1e-2).unwrap()
        .set_x(&x)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));

    let bad = NewtonCfg::new().set_x_tol(0.0).unwrap_err();
    assert!(matches!(bad, InterpolationError::InvalidXTol { .. }));
}

#[test]
fn single_point_rejected() {
    let err = NewtonCfg::new().set_x(&[1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
}

#[test]
fn missing_y_rejected_at_build() {
    let x = [0.0, 1.0];
    let err = build(NewtonCfg::new().set_x(&x).unwrap()).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn non_finite_y_rejected() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, f64::NAN, 2.0];
    let err = NewtonCfg::new().set_x(&x).unwrap().set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn empty_x_eval_ok() -> RungeResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn many_points() -> RungeResult {
    let x = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y = [0.0, 2.0, 3.0, 3.0, 8.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y);
    Ok(())
}
