use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::value::{complex::ComplexNumber, core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the evaluation context: the value bound to `x`.
///
/// A context holds no other state, so one can be shared freely and reused for
/// any number of trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// The value substituted for the variable `x`.
    pub x: Value,
}

impl Context {
    /// Creates a context binding `x` to a real number.
    #[must_use]
    pub const fn new(x: f64) -> Self {
        Self { x: Value::Real(x) }
    }

    /// Creates a context binding `x` to a complex number.
    ///
    /// The solver uses this to check candidate roots that are not real.
    #[must_use]
    pub const fn with_complex(x: ComplexNumber) -> Self {
        Self { x: x.checked_as_real() }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Values are computed bottom-up. Every intermediate result is normalized
    /// (complex with zero imaginary part becomes real) and must be finite.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` by exactly zero or `0 ^ negative`.
    /// - `NonFinite` when any node overflows or is otherwise not finite, with
    ///   the position of that node.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     interpreter::{evaluator::core::Context, parser::core::validate, value::core::Value},
    /// };
    ///
    /// let expr = validate("x^2 + 3*x + 2").expr.unwrap();
    /// assert_eq!(Context::new(2.0).eval(&expr).unwrap(), Value::Real(12.0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        let value = match expr {
            Expr::Literal { value, .. } => Value::Real(*value),
            Expr::Variable { .. } => self.x,
            Expr::UnaryOp { op, expr, .. } => Self::eval_unary(*op, &self.eval(expr)?),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *position)?
            },
            Expr::FunctionCall { function, argument, .. } => {
                Self::eval_function_call(*function, &self.eval(argument)?)
            },
        }.normalized();

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { position: expr.position() })
        }
    }
}
