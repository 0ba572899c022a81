use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::scalar::ArithmeticOperator,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are routed to `eval_scalar_op`; power calls
    /// `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Real(3.0),
    ///                                   &Value::Real(4.0),
    ///                                   0);
    /// assert_eq!(result.unwrap(), Value::Real(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        match ArithmeticOperator::from_binary(op) {
            Some(arithmetic) => Self::eval_scalar_op(arithmetic, left, right, position),
            None => Self::eval_pow(left, right, position),
        }
    }
}
