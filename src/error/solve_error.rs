use thiserror::Error;

use crate::{ast::Function, error::EvalError};

/// Reasons an equation cannot be reduced to a ratio of polynomials.
///
/// Everything except [`SolveError::Eval`] means "outside the class the root
/// finder handles"; the solver hands those to the numeric scan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// `x` occurs inside `log` or `sqrt`.
    #[error("x appears inside {function}() at position {position}")]
    Transcendental {
        /// The enclosing function.
        function: Function,
        /// Byte offset of the call.
        position: usize,
    },
    /// `x` occurs in an exponent.
    #[error("x appears in the exponent at position {position}")]
    VariableExponent {
        /// Byte offset of the `^`.
        position: usize,
    },
    /// An exponent applied to `x` is not a small integer.
    #[error("exponent {exponent} at position {position} is not a supported integer")]
    UnsupportedExponent {
        /// The constant exponent.
        exponent: f64,
        /// Byte offset of the `^`.
        position: usize,
    },
    /// A constant sub-expression folds to a complex number.
    #[error("complex constant at position {position}")]
    ComplexConstant {
        /// Byte offset of the constant sub-expression.
        position: usize,
    },
    /// Division by an expression that is identically zero.
    #[error("division by an identically zero expression at position {position}")]
    ZeroDivisor {
        /// Byte offset of the `/` or `^`.
        position: usize,
    },
    /// The reduced polynomial grew past the supported degree.
    #[error("degree {degree} exceeds the supported maximum")]
    DegreeTooHigh {
        /// The degree reached.
        degree: usize,
    },
    /// A constant sub-expression failed to evaluate, such as `1/0`.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SolveError {
    /// Returns `true` if the equation is merely outside the solvable class,
    /// as opposed to containing an undefined constant.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        !matches!(self, Self::Eval(_))
    }
}
