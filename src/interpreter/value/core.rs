use std::fmt::Display;

use crate::interpreter::value::complex::ComplexNumber;

/// The result of evaluating an expression.
///
/// Values stay real as long as possible. Negative square roots, logarithms of
/// non-positive numbers and fractional powers of negative bases produce
/// `Complex` values; any complex result whose imaginary part is exactly zero is
/// normalized back to `Real` by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A real number (double precision floating-point).
    Real(f64),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl Value {
    /// Returns the value as a complex number; reals get a zero imaginary part.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Real(2.0).as_complex(), ComplexNumber::new(2.0, 0.0));
    /// ```
    #[must_use]
    pub const fn as_complex(&self) -> ComplexNumber {
        match self {
            Self::Real(r) => ComplexNumber::new(*r, 0.0),
            Self::Complex(c) => *c,
        }
    }

    /// Returns the real number, or `None` for a complex value.
    ///
    /// Plotting layers use this to keep only real-valued points.
    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Complex(_) => None,
        }
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        match self {
            Self::Real(r) => r.is_finite(),
            Self::Complex(c) => c.is_finite(),
        }
    }

    /// Returns `true` for real zero and complex `0 + 0i`.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        match self {
            Self::Real(r) => *r == 0.0,
            Self::Complex(c) => c.is_zero(),
        }
    }

    /// Collapses a complex value with a zero imaginary part into a real one.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Real(_) => self,
            Self::Complex(c) => c.checked_as_real(),
        }
    }
}
