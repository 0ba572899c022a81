use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::f64_to_i64_exact,
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Real operands use `powf`, except that a negative base with a fractional
    /// exponent takes the principal complex power. Complex bases use repeated
    /// squaring for integral exponents; anything else is computed as
    /// `exp(e * ln(b))`. Raising zero to a negative power is a division by zero.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&Value::Real(2.0), &Value::Real(10.0), 0).unwrap();
    /// assert_eq!(result, Value::Real(1024.0));
    ///
    /// let root = Context::eval_pow(&Value::Real(-8.0), &Value::Real(1.0 / 3.0), 0).unwrap();
    /// assert!(matches!(root, Value::Complex(_)));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, position: usize) -> EvalResult<Value> {
        use Value::{Complex, Real};

        match (base, exponent) {
            (Real(b), Real(e)) => {
                if *b == 0.0 && *e < 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                if *b < 0.0 && e.fract() != 0.0 {
                    return Ok(ComplexNumber::from(*b).powf(*e).checked_as_real());
                }
                Ok(Real(b.powf(*e)))
            },
            (Complex(b), Real(e)) => match f64_to_i64_exact(*e) {
                Some(n) => Ok(b.checked_powi(n, position)?.checked_as_real()),
                None => Ok(b.powf(*e).checked_as_real()),
            },
            (_, Complex(e)) => {
                let b = base.as_complex();
                if b.is_zero() {
                    return if e.real > 0.0 {
                        Ok(Real(0.0))
                    } else {
                        Err(EvalError::DivisionByZero { position })
                    };
                }
                Ok(b.powc(*e).checked_as_real())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_power_of_negative_base_is_principal_root() {
        let value = Context::eval_pow(&Value::Real(-4.0), &Value::Real(0.5), 0).unwrap();
        let c = value.as_complex();
        assert!(c.real.abs() < 1e-12);
        assert!((c.imaginary - 2.0).abs() < 1e-12);
    }

    #[test]
    fn integral_power_of_negative_base_stays_real() {
        assert_eq!(Context::eval_pow(&Value::Real(-2.0), &Value::Real(3.0), 0),
                   Ok(Value::Real(-8.0)));
    }

    #[test]
    fn complex_base_with_integral_exponent_is_exact() {
        let i = Value::Complex(ComplexNumber::new(0.0, 1.0));
        assert_eq!(Context::eval_pow(&i, &Value::Real(2.0), 0), Ok(Value::Real(-1.0)));
    }

    #[test]
    fn zero_to_complex_power() {
        let e = Value::Complex(ComplexNumber::new(1.0, 1.0));
        assert_eq!(Context::eval_pow(&Value::Real(0.0), &e, 0), Ok(Value::Real(0.0)));
        let e = Value::Complex(ComplexNumber::new(-1.0, 1.0));
        assert_eq!(Context::eval_pow(&Value::Real(0.0), &e, 3),
                   Err(EvalError::DivisionByZero { position: 3 }));
    }
}
