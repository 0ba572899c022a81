use function_solver::{
    ComplexNumber, Value, evaluate, find_solution_center, get_plot_range, intersections, solve,
};

fn assert_real_roots(lhs: &str, rhs: &str, expected: &[f64]) {
    let roots = solve(lhs, rhs).unwrap_or_else(|e| panic!("{lhs} = {rhs} failed: {e}"));
    let reals: Vec<f64> = roots.iter()
                               .filter(|r| r.is_real())
                               .map(|r| r.real)
                               .collect();
    assert_eq!(reals.len(), expected.len(), "{lhs} = {rhs} gave {roots:?}");
    for (actual, wanted) in reals.iter().zip(expected) {
        assert!((actual - wanted).abs() < 1e-9, "{lhs} = {rhs} gave {roots:?}");
    }
}

fn assert_no_solutions(lhs: &str, rhs: &str) {
    let roots = solve(lhs, rhs).unwrap_or_else(|e| panic!("{lhs} = {rhs} failed: {e}"));
    assert!(roots.is_empty(), "{lhs} = {rhs} gave {roots:?}");
}

fn assert_eval(src: &str, x: f64, expected: f64) {
    match evaluate(src, x) {
        Ok(Value::Real(r)) => assert!((r - expected).abs() < 1e-12, "{src} at {x} gave {r}"),
        other => panic!("{src} at {x} gave {other:?}"),
    }
}

#[test]
fn linear_equations() {
    assert_eq!(solve("x+2", "3*x-1").unwrap(), vec![ComplexNumber::from(1.5)]);
    assert_real_roots("2*x", "x / 2 + 3", &[2.0]);
    assert_real_roots("-(x - 4)", "0", &[4.0]);
}

#[test]
fn quadratic_equations() {
    assert_real_roots("x^2 - 4", "0", &[-2.0, 2.0]);
    assert_real_roots("x^2", "x", &[0.0, 1.0]);
    assert_real_roots("(x - 3)^2", "0", &[3.0]);
}

#[test]
fn higher_degree_equations() {
    assert_real_roots("x^3 - 6*x^2 + 11*x", "6", &[1.0, 2.0, 3.0]);
    assert_real_roots("x^4", "16", &[-2.0, 2.0]);
    assert_eq!(solve("x^4", "16").unwrap().len(), 4);
}

#[test]
fn rational_equations_exclude_poles() {
    assert_real_roots("(x^2 - 4) / (x - 2)", "0", &[-2.0]);
    assert_real_roots("1 / (x - 1)", "1 / (2*x)", &[-1.0]);
    assert_no_solutions("x / x", "2");
}

#[test]
fn contradictions_and_identities() {
    assert_no_solutions("x+2", "x+3");
    assert_no_solutions("2*x + 2", "2*(x + 1)");
}

#[test]
fn close_distinct_roots_stay_separate() {
    assert_real_roots("(x - 1)*(x - 1.00001)", "0", &[1.0, 1.00001]);
    assert_real_roots("(x - 1)*(x - 1.00001)*(x + 5)", "0", &[-5.0, 1.0, 1.00001]);
}

#[test]
fn high_multiplicity_roots_are_reported_once() {
    assert_eq!(solve("(x - 1)^4", "0").unwrap(), vec![ComplexNumber::from(1.0)]);
    assert_eq!(solve("(x - 1)^4 * (x + 2)", "0").unwrap(),
               vec![ComplexNumber::from(-2.0), ComplexNumber::from(1.0)]);
    assert_eq!(intersections("(x - 1)^4", "0").unwrap().len(), 1);
}

#[test]
fn non_rational_equations_are_solved_numerically() {
    assert_real_roots("log(x)", "0", &[1.0]);
    assert_real_roots("log(x)", "1", &[std::f64::consts::E]);
    assert_real_roots("sqrt(x + 1)", "x", &[(1.0 + 5.0_f64.sqrt()) / 2.0]);
    assert_real_roots("x^x", "4", &[2.0]);
    assert_real_roots("x^0.5", "2", &[4.0]);
    assert_real_roots("2^x", "8", &[3.0]);
    assert_real_roots("x^100", "1", &[-1.0, 1.0]);
}

#[test]
fn numeric_scan_rejects_poles_and_complex_regions() {
    assert_no_solutions("sqrt(x)", "-1");
    assert_no_solutions("1 / log(x)", "0");
}

#[test]
fn complex_roots_follow_real_ones() {
    let roots = solve("x^3 + x", "0").unwrap();
    assert_eq!(roots.len(), 3);
    assert_eq!(roots[0], ComplexNumber::from(0.0));
    assert!(!roots[1].is_real() && !roots[2].is_real());
    assert!(roots[1].imaginary < roots[2].imaginary);
}

#[test]
fn invalid_sides_are_errors() {
    assert!(solve("x +", "1").is_err());
    assert!(solve("1", "q").is_err());
}

#[test]
fn evaluates_expressions() {
    assert_eval("x^2 + 3*x + 2", 2.0, 12.0);
    assert_eval("-x^2", 3.0, 9.0);
    assert_eval("2^3^2", 0.0, 512.0);
    assert_eval("log(x)", 1.0, 0.0);
    assert_eval("sqrt(x) * sqrt(x)", 2.0, 2.0);
    assert_eval("10 / 4 - .5", 0.0, 2.0);
}

#[test]
fn evaluation_leaves_the_real_domain() {
    match evaluate("sqrt(x)", -4.0) {
        Ok(Value::Complex(c)) => assert_eq!(c, ComplexNumber::new(0.0, 2.0)),
        other => panic!("unexpected {other:?}"),
    }
    assert!(evaluate("1 / (x - 1)", 1.0).is_err());
}

#[test]
fn intersections_pair_roots_with_values() {
    let points = intersections("x^2", "x + 2").unwrap();
    let pairs: Vec<(f64, Value)> = points.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(pairs, vec![(-1.0, Value::Real(1.0)), (2.0, Value::Real(4.0))]);
}

#[test]
fn plot_window_contains_the_real_roots() {
    for (lhs, rhs) in [("x^2 - 4", "0"),
                       ("x", "7"),
                       ("x^2 + 1", "0"),
                       ("x + 1", "x"),
                       ("(x - 1)^4", "0"),
                       ("log(x)", "1")]
    {
        let roots = solve(lhs, rhs).unwrap();
        let range = get_plot_range(find_solution_center(&roots), &roots);
        assert!(range.min_x < range.max_x);
        for root in roots.iter().filter(|r| r.is_real()) {
            assert!(range.min_x < root.real && root.real < range.max_x);
        }
    }
}
