use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::SolveError,
    interpreter::evaluator::core::Context,
    solver::polynomial::Polynomial,
    util::num::f64_to_u32_exact,
};

/// Largest integer exponent magnitude applied to an expression in `x`.
pub const MAX_EXPONENT: u32 = 64;
/// Highest polynomial degree the reduction will produce.
pub const MAX_DEGREE: usize = 128;

/// Result type of the reduction.
pub type SolveResult<T> = Result<T, SolveError>;

/// A ratio of two polynomials in `x`.
///
/// The denominator is never the zero polynomial. Common powers of `x` are
/// cancelled and a constant denominator is folded into the numerator, so
/// `x^2 / x` reduces to `x / 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rational {
    /// Polynomial whose roots are the candidate solutions.
    pub numerator:   Polynomial,
    /// Polynomial whose roots are excluded from the solutions.
    pub denominator: Polynomial,
}

impl Rational {
    /// `p / 1`.
    #[must_use]
    pub fn polynomial(numerator: Polynomial) -> Self {
        Self { numerator,
               denominator: Polynomial::constant(1.0) }
    }

    /// Returns the value if the ratio does not depend on `x`.
    #[must_use]
    pub fn as_constant(&self) -> Option<f64> {
        let numerator = self.numerator.as_constant()?;
        let denominator = self.denominator.as_constant()?;
        Some(numerator / denominator)
    }

    /// Reduces an expression tree to a single ratio of polynomials.
    ///
    /// Sub-trees without `x` are folded by the evaluator first. What remains
    /// must be built from `x`, `+`, `-`, `*`, `/`, negation and integer
    /// powers.
    ///
    /// # Errors
    /// - `Eval` if a constant sub-tree cannot be evaluated.
    /// - Any other variant if the expression leaves the rational class, such
    ///   as `log(x)`, `2^x` or `x^0.5`.
    ///
    /// # Example
    /// ```
    /// use function_solver::{interpreter::parser::core::validate, solver::rational::Rational};
    ///
    /// let expr = validate("(x + 1) / (x - 1)").expr.unwrap();
    /// let rational = Rational::from_expr(&expr).unwrap();
    /// assert_eq!(rational.numerator.coefficients(), &[1.0, 1.0]);
    /// assert_eq!(rational.denominator.coefficients(), &[-1.0, 1.0]);
    /// ```
    pub fn from_expr(expr: &Expr) -> SolveResult<Self> {
        if !expr.contains_variable() {
            let value = Context::new(0.0).eval(expr)?;
            return value.as_real()
                        .map(|c| Self::polynomial(Polynomial::constant(c)))
                        .ok_or(SolveError::ComplexConstant { position: expr.position() });
        }

        match expr {
            Expr::Literal { value, .. } => Ok(Self::polynomial(Polynomial::constant(*value))),
            Expr::Variable { .. } => Ok(Self::polynomial(Polynomial::x())),
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => Ok(Self::from_expr(expr)?.negated()),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = Self::from_expr(left)?;
                let right = Self::from_expr(right)?;
                trace!(%op, position, "combining rational operands");
                left.combine(*op, &right, *position)
            },
            Expr::FunctionCall { function, position, .. } => {
                Err(SolveError::Transcendental { function: *function,
                                                 position: *position, })
            },
        }
    }

    /// Applies a binary operator to two ratios.
    ///
    /// # Errors
    /// See [`Rational::from_expr`].
    pub fn combine(&self, op: BinaryOperator, rhs: &Self, position: usize) -> SolveResult<Self> {
        match op {
            BinaryOperator::Add => self.add(rhs, position),
            BinaryOperator::Sub => self.add(&rhs.negated(), position),
            BinaryOperator::Mul => {
                Self::normalized(&self.numerator * &rhs.numerator,
                                 &self.denominator * &rhs.denominator,
                                 position)
            },
            BinaryOperator::Div => {
                if rhs.numerator.is_zero() {
                    return Err(SolveError::ZeroDivisor { position });
                }
                Self::normalized(&self.numerator * &rhs.denominator,
                                 &self.denominator * &rhs.numerator,
                                 position)
            },
            BinaryOperator::Pow => self.pow(rhs, position),
        }
    }

    /// Negates the numerator.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self { numerator:   -&self.numerator,
               denominator: self.denominator.clone(), }
    }

    fn add(&self, rhs: &Self, position: usize) -> SolveResult<Self> {
        if self.denominator == rhs.denominator {
            return Self::normalized(&self.numerator + &rhs.numerator,
                                    self.denominator.clone(),
                                    position);
        }
        let numerator = &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator);
        Self::normalized(numerator, &self.denominator * &rhs.denominator, position)
    }

    /// Raises to a power that must reduce to a constant integer.
    fn pow(&self, exponent: &Self, position: usize) -> SolveResult<Self> {
        let Some(exponent) = exponent.as_constant() else {
            return Err(SolveError::VariableExponent { position });
        };
        let magnitude = f64_to_u32_exact(exponent.abs()).filter(|n| *n <= MAX_EXPONENT)
                                                        .ok_or(SolveError::UnsupportedExponent { exponent,
                                                                                                 position })?;

        let degree = self.numerator
                         .degree()
                         .unwrap_or(0)
                         .max(self.denominator.degree().unwrap_or(0));
        let grown = degree.saturating_mul(magnitude as usize);
        if grown > MAX_DEGREE {
            return Err(SolveError::DegreeTooHigh { degree: grown });
        }

        let numerator = self.numerator.powi(magnitude);
        let denominator = self.denominator.powi(magnitude);
        if exponent >= 0.0 {
            Self::normalized(numerator, denominator, position)
        } else if numerator.is_zero() {
            Err(SolveError::ZeroDivisor { position })
        } else {
            Self::normalized(denominator, numerator, position)
        }
    }

    /// Cancels common powers of `x`, folds constant denominators and checks
    /// the degree bound.
    fn normalized(numerator: Polynomial,
                  denominator: Polynomial,
                  position: usize)
                  -> SolveResult<Self> {
        if denominator.is_zero() {
            return Err(SolveError::ZeroDivisor { position });
        }
        if numerator.is_zero() {
            return Ok(Self::polynomial(numerator));
        }

        let shift = numerator.low_order_zeros()
                             .min(denominator.low_order_zeros());
        let mut numerator = numerator.shift_down(shift);
        let mut denominator = denominator.shift_down(shift);

        if let Some(c) = denominator.as_constant() {
            numerator = numerator.scale(c.recip());
            denominator = Polynomial::constant(1.0);
        }

        let degree = numerator.degree()
                              .unwrap_or(0)
                              .max(denominator.degree().unwrap_or(0));
        if degree > MAX_DEGREE {
            return Err(SolveError::DegreeTooHigh { degree });
        }

        Ok(Self { numerator,
                  denominator })
    }
}
