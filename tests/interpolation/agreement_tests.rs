use runge::interpolation::{build_with, interpolate_with, Algorithm};
use runge::{
    calculate_max_error,
    cubic_spline_interpolation,
    generate_nodes,
    get_function,
    lagrange_interpolation,
    linspace,
    newton_interpolation,
    NodeKind,
    Univariate,
};

fn sample(name: &str, kind: NodeKind, n: usize) -> (Vec<f64>, Vec<f64>) {
    let f = get_function(name).expect("catalog entry");
    let x = generate_nodes(-1.0, 1.0, n, kind);
    let y = f.eval_many(&x);
    (x, y)
}

#[test]
fn every_method_hits_every_node() {
    for name in ["sin(x)", "1 / (1 + 25x^2)", "|x|", "exp(x)"] {
        for kind in NodeKind::ALL {
            let (x, y) = sample(name, kind, 15);
            for alg in Algorithm::ALL {
                let p = interpolate_with(alg, &x, &y);
                for (&xi, &yi) in x.iter().zip(&y) {
                    let err = (p.eval(xi) - yi).abs();
                    assert!(err < 1e-9, "{alg} on {name} ({kind}) at {xi}: {err}");
                }
            }
        }
    }
}

#[test]
fn lagrange_and_newton_agree() {
    let grid = linspace(-1.0, 1.0, 1000);
    for name in ["sin(x)", "1 / (1 + 25x^2)", "exp(x)"] {
        for kind in NodeKind::ALL {
            for n in [2, 5, 10] {
                let (x, y) = sample(name, kind, n);
                let l = lagrange_interpolation(&x, &y);
                let p = newton_interpolation(&x, &y);
                let diff = calculate_max_error(&l, &p, &grid);
                assert!(diff < 1e-9, "{name} {kind} n={n}: {diff}");
            }
        }
    }
}

#[test]
fn sin_uniform_newton_is_accurate() {
    let f = get_function("sin(x)").expect("catalog entry");
    let (x, y) = sample("sin(x)", NodeKind::Uniform, 10);
    let p = newton_interpolation(&x, &y);

    let err = calculate_max_error(&f, &p, &linspace(-1.0, 1.0, 1000));
    assert!(err > 0.0);
    assert!(err < 1e-6, "max error {err}");
}

#[test]
fn chebyshev_nodes_tame_runge() {
    let f = get_function("1 / (1 + 25x^2)").expect("catalog entry");
    let edge: Vec<f64> = linspace(-1.0, 1.0, 1000)
        .into_iter()
        .filter(|t| t.abs() > 0.8)
        .collect();

    let (xu, yu) = sample("1 / (1 + 25x^2)", NodeKind::Uniform, 15);
    let (xc, yc) = sample("1 / (1 + 25x^2)", NodeKind::Chebyshev, 15);

    let uniform   = calculate_max_error(&f, &lagrange_interpolation(&xu, &yu), &edge);
    let chebyshev = calculate_max_error(&f, &lagrange_interpolation(&xc, &yc), &edge);

    assert!(uniform > 1.0, "uniform edge error {uniform}");
    assert!(chebyshev < 0.1, "chebyshev edge error {chebyshev}");
    assert!(uniform > 10.0 * chebyshev);
}

#[test]
fn spline_avoids_runge_on_uniform_nodes() {
    let f = get_function("1 / (1 + 25x^2)").expect("catalog entry");
    let (x, y) = sample("1 / (1 + 25x^2)", NodeKind::Uniform, 15);
    let grid = linspace(-1.0, 1.0, 1000);

    let spline = calculate_max_error(&f, &cubic_spline_interpolation(&x, &y), &grid);
    let poly   = calculate_max_error(&f, &newton_interpolation(&x, &y), &grid);
    assert!(spline < 0.01, "spline max error {spline}");
    assert!(poly > 1.0);
}

#[test]
fn checked_and_unchecked_builders_match() {
    let (x, y) = sample("exp(x)", NodeKind::Chebyshev, 7);
    let grid = linspace(-1.2, 1.2, 50);

    for alg in Algorithm::ALL {
        let checked = build_with(alg, &x, &y).expect("valid sample set");
        let raw = interpolate_with(alg, &x, &y);
        assert_eq!(checked.algorithm(), alg);
        assert_eq!(checked.nodes(), raw.nodes());
        assert_eq!(checked.eval_many(&grid), raw.eval_many(&grid));
    }
}
