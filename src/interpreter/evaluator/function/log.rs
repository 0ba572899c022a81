use crate::interpreter::value::core::Value;

/// Computes the natural logarithm of a value.
///
/// Positive reals stay real. Negative reals and complex values return the
/// principal complex logarithm, `ln|z| + i·arg(z)`.
///
/// # Example
/// ```
/// use function_solver::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let e = std::f64::consts::E;
/// let one = log(&Value::Real(e)).as_real().unwrap();
/// assert!((one - 1.0).abs() < 1e-12);
///
/// let negative = log(&Value::Real(-1.0)).as_complex();
/// assert!(negative.real.abs() < 1e-12);
/// assert!((negative.imaginary - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn log(value: &Value) -> Value {
    match value {
        Value::Real(x) if *x > 0.0 => Value::Real(x.ln()),
        _ => value.as_complex().ln().checked_as_real(),
    }
}
