use crate::interpreter::value::{complex::ComplexNumber, core::Value};

/// Computes the principal square root of a value.
///
/// - Nonnegative reals return a real square root.
/// - Negative reals return a purely imaginary complex result.
/// - Complex values use their complex square root.
///
/// # Example
/// ```
/// use function_solver::interpreter::{
///     evaluator::function::sqrt::sqrt,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// assert_eq!(sqrt(&Value::Real(9.0)), Value::Real(3.0));
/// assert_eq!(sqrt(&Value::Real(-9.0)),
///            Value::Complex(ComplexNumber::new(0.0, 3.0)));
/// ```
#[must_use]
pub fn sqrt(value: &Value) -> Value {
    match value {
        Value::Real(x) if *x >= 0.0 => Value::Real(x.sqrt()),
        Value::Real(x) => Value::Complex(ComplexNumber { real:      0.0,
                                                         imaginary: (-x).sqrt(), }),
        Value::Complex(c) => c.sqrt().checked_as_real(),
    }
}
