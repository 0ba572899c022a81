use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Real(5.0));
    /// assert_eq!(v, Value::Real(-5.0));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Negate => match value {
                Value::Real(r) => Value::Real(-r),
                Value::Complex(c) => Value::Complex(-*c),
            },
        }
    }
}
