use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::{ExpressionError, SolveError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        parser::core::parse,
        value::{complex::ComplexNumber, core::Value},
    },
    solver::{numeric::scan_real_roots, polynomial::Polynomial, rational::Rational, roots::find_roots},
};

/// A denominator this small relative to its terms marks a pole.
const POLE_TOLERANCE: f64 = 1e-9;

/// A real point where two functions meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// The `x` coordinate.
    pub x: f64,
    /// The first function evaluated at `x`.
    pub y: Value,
}

/// Solves `lhs = rhs` for `x` over already parsed trees.
///
/// Returns the distinct roots, real roots ascending first, then complex roots.
/// An equation that cannot be reduced to a ratio of polynomials (for example
/// one with `x` inside `log`) is scanned numerically for real roots instead,
/// see [`scan_real_roots`]. An identity such as `x = x` has no solutions.
///
/// # Errors
/// Returns an `EvalError` if a constant part of the equation is undefined,
/// such as `1/0`.
pub fn solve_equation(lhs: &Expr, rhs: &Expr) -> EvalResult<Vec<ComplexNumber>> {
    let equation = Expr::binary(lhs.clone(), BinaryOperator::Sub, rhs.clone());

    let rational = match Rational::from_expr(&equation) {
        Ok(rational) => rational,
        Err(SolveError::Eval(error)) => return Err(error),
        Err(reason) => {
            debug!(%reason, "equation is not a rational function of x, scanning");
            return Ok(scan_real_roots(lhs, rhs));
        },
    };

    let mut roots = find_roots(&rational.numerator);
    roots.retain(|root| !is_pole(&rational.denominator, *root));

    debug!(%equation, roots = roots.len(), "solved equation");
    Ok(roots)
}

/// Returns `true` if `denominator` vanishes at `root`.
fn is_pole(denominator: &Polynomial, root: ComplexNumber) -> bool {
    denominator.eval(root).abs() <= POLE_TOLERANCE * denominator.magnitude_at(root)
}

/// Solves the equation `lhs = rhs` given as text.
///
/// # Errors
/// - `Invalid` if either side fails validation.
/// - `Eval` if a constant part of the equation is undefined.
///
/// # Example
/// ```
/// use function_solver::{interpreter::value::complex::ComplexNumber, solver::core::solve};
///
/// assert_eq!(solve("x + 2", "3*x - 1").unwrap(), vec![ComplexNumber::from(1.5)]);
/// assert!(solve("x + 2", "x + 3").unwrap().is_empty());
/// ```
pub fn solve(lhs: &str, rhs: &str) -> Result<Vec<ComplexNumber>, ExpressionError> {
    let lhs = parse(lhs)?;
    let rhs = parse(rhs)?;
    Ok(solve_equation(&lhs, &rhs)?)
}

/// Finds the real points where the graphs of `lhs` and `rhs` cross.
///
/// Each real root of `lhs = rhs` is paired with `lhs` evaluated there.
///
/// # Errors
/// Same as [`solve`], plus `Eval` if `lhs` cannot be evaluated at a root.
///
/// # Example
/// ```
/// use function_solver::{interpreter::value::core::Value, solver::core::intersections};
///
/// let points = intersections("x^2", "4").unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].x, -2.0);
/// assert_eq!(points[0].y, Value::Real(4.0));
/// ```
pub fn intersections(lhs: &str, rhs: &str) -> Result<Vec<Intersection>, ExpressionError> {
    let lhs = parse(lhs)?;
    let rhs = parse(rhs)?;

    let mut points = Vec::new();
    for root in solve_equation(&lhs, &rhs)? {
        if !root.is_real() {
            continue;
        }
        let y = Context::new(root.real).eval(&lhs)?;
        points.push(Intersection { x: root.real,
                                   y });
    }
    Ok(points)
}

/// Evaluates an expression given as text at a real `x`.
///
/// # Errors
/// - `Invalid` if the expression fails validation.
/// - `Eval` if evaluation fails.
///
/// # Example
/// ```
/// use function_solver::{interpreter::value::core::Value, solver::core::evaluate};
///
/// assert_eq!(evaluate("x^2 + 3*x + 2", 2.0).unwrap(), Value::Real(12.0));
/// ```
pub fn evaluate(source: &str, x: f64) -> Result<Value, ExpressionError> {
    let expr = parse(source)?;
    Ok(Context::new(x).eval(&expr)?)
}
