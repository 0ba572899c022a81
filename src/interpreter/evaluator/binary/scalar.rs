use std::ops;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// The four operators evaluated by plain field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithmeticOperator {
    /// Narrows a parsed operator; `None` for `^`.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::binary::scalar::ArithmeticOperator,
    /// };
    ///
    /// assert_eq!(ArithmeticOperator::from_binary(BinaryOperator::Sub),
    ///            Some(ArithmeticOperator::Sub));
    /// assert_eq!(ArithmeticOperator::from_binary(BinaryOperator::Pow), None);
    /// ```
    #[must_use]
    pub const fn from_binary(op: BinaryOperator) -> Option<Self> {
        match op {
            BinaryOperator::Add => Some(Self::Add),
            BinaryOperator::Sub => Some(Self::Sub),
            BinaryOperator::Mul => Some(Self::Mul),
            BinaryOperator::Div => Some(Self::Div),
            BinaryOperator::Pow => None,
        }
    }

    fn apply<T>(self, l: T, r: T) -> T
        where T: ops::Add<Output = T> + ops::Sub<Output = T> + ops::Mul<Output = T> + ops::Div<Output = T>
    {
        match self {
            Self::Add => l + r,
            Self::Sub => l - r,
            Self::Mul => l * r,
            Self::Div => l / r,
        }
    }
}

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Real operands use IEEE double arithmetic. If either operand is complex,
    /// both are promoted. Division by exactly zero is checked explicitly for
    /// both categories.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     error::EvalError,
    ///     interpreter::{
    ///         evaluator::{binary::scalar::ArithmeticOperator, core::Context},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let x = Value::Real(1.5);
    /// let y = Value::Real(2.0);
    /// assert_eq!(Context::eval_scalar_op(ArithmeticOperator::Mul, &x, &y, 0).unwrap(),
    ///            Value::Real(3.0));
    ///
    /// let zero = Value::Real(0.0);
    /// assert_eq!(Context::eval_scalar_op(ArithmeticOperator::Div, &x, &zero, 4),
    ///            Err(EvalError::DivisionByZero { position: 4 }));
    /// ```
    pub fn eval_scalar_op(op: ArithmeticOperator,
                          left: &Value,
                          right: &Value,
                          position: usize)
                          -> EvalResult<Value> {
        if op == ArithmeticOperator::Div && right.is_zero() {
            return Err(EvalError::DivisionByZero { position });
        }

        Ok(match (left, right) {
            (Value::Real(l), Value::Real(r)) => Value::Real(op.apply(*l, *r)),
            _ => Value::Complex(op.apply(left.as_complex(), right.as_complex())).normalized(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::complex::ComplexNumber;

    #[test]
    fn mixed_operands_are_promoted_and_normalized() {
        let i = Value::Complex(ComplexNumber::new(0.0, 1.0));
        let sum = Context::eval_scalar_op(ArithmeticOperator::Add, &Value::Real(2.0), &i, 0).unwrap();
        assert_eq!(sum, Value::Complex(ComplexNumber::new(2.0, 1.0)));

        let cancelled = Context::eval_scalar_op(ArithmeticOperator::Sub, &sum, &i, 0).unwrap();
        assert_eq!(cancelled, Value::Real(2.0));
    }

    #[test]
    fn every_arithmetic_operator_applies() {
        let (l, r) = (Value::Real(6.0), Value::Real(3.0));
        let results: Vec<Value> = [ArithmeticOperator::Add,
                                   ArithmeticOperator::Sub,
                                   ArithmeticOperator::Mul,
                                   ArithmeticOperator::Div].into_iter()
                                                           .map(|op| Context::eval_scalar_op(op, &l, &r, 0).unwrap())
                                                           .collect();
        assert_eq!(results,
                   vec![Value::Real(9.0), Value::Real(3.0), Value::Real(18.0), Value::Real(2.0)]);
    }

    #[test]
    fn complex_zero_divisor_is_rejected() {
        let zero = Value::Complex(ComplexNumber::new(0.0, 0.0));
        assert_eq!(Context::eval_scalar_op(ArithmeticOperator::Div, &Value::Real(1.0), &zero, 9),
                   Err(EvalError::DivisionByZero { position: 9 }));
    }
}
