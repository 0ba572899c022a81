use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// Represents a complex number with real and imaginary parts.
///
/// Roots returned by the solver and non-real results of the evaluator both use
/// this type. Equality, hashing and ordering go through [`OrderedFloat`], so
/// solution sets can be sorted and de-duplicated.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (real, imaginary) = (self.real, self.imaginary);
        if imaginary == 0.0 {
            write!(f, "{real}")
        } else if real == 0.0 {
            write!(f, "{imaginary}i")
        } else if imaginary > 0.0 {
            write!(f, "{real} + {imaginary}i")
        } else {
            write!(f, "{real} - {}i", -imaginary)
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Converts to a `Value::Real` if the imaginary part is exactly zero,
    /// otherwise returns `Value::Complex`.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::{complex::ComplexNumber, core::Value};
    /// let real = ComplexNumber::new(3.0, 0.0);
    /// assert_eq!(real.checked_as_real(), Value::Real(3.0));
    ///
    /// let complex = ComplexNumber::new(2.0, 1.0);
    /// assert!(matches!(complex.checked_as_real(), Value::Complex(_)));
    /// ```
    #[must_use]
    pub const fn checked_as_real(&self) -> Value {
        if self.imaginary == 0.0 {
            Value::Real(self.real)
        } else {
            Value::Complex(*self)
        }
    }

    /// Returns `true` if the imaginary part is exactly zero.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Returns `true` if both parts are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns `true` if both parts are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the reciprocal (1/z) of the complex number.
    #[must_use]
    pub const fn recip(&self) -> Self {
        let coj_squared = self.real * self.real + self.imaginary * self.imaginary;

        Self { real:      self.real / coj_squared,
               imaginary: -(self.imaginary / coj_squared), }
    }

    /// Returns the argument (phase angle) in radians, in `(-π, π]`.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Raises the complex number to an integer power.
    ///
    /// Uses repeated squaring with overflow and division-by-zero checks.
    ///
    /// # Parameters
    /// - `exp`: The exponent (may be negative).
    /// - `position`: Source offset for error reporting.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::{ComplexNumber, ONE};
    /// let c = ComplexNumber::new(0.0, 2.0);
    /// assert_eq!(c.checked_powi(0, 0).unwrap(), ONE);
    /// assert_eq!(c.checked_powi(2, 0).unwrap(), ComplexNumber::new(-4.0, 0.0));
    /// ```
    pub fn checked_powi(self, exp: i64, position: usize) -> EvalResult<Self> {
        if exp == 0 {
            return Ok(ONE);
        }

        if self.is_zero() && exp < 0 {
            return Err(EvalError::DivisionByZero { position });
        }

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
                if !result.is_finite() {
                    return Err(EvalError::NonFinite { position });
                }
            }
            n /= 2;
            if n > 0 {
                base = base * base;
                if !base.is_finite() {
                    return Err(EvalError::NonFinite { position });
                }
            }
        }

        if exp < 0 {
            result = result.recip();
            if !result.is_finite() {
                return Err(EvalError::NonFinite { position });
            }
        }

        Ok(result)
    }

    /// Raises the complex number to a real power using the principal branch.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(-8.0, 0.0);
    /// let res = c.powf(1.0 / 3.0);
    /// assert!((res.real - 1.0).abs() < 1e-10);
    /// assert!((res.imaginary - 3.0_f64.sqrt()).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        let r = self.abs();
        let theta = self.arg();

        let new_r = r.powf(exp);
        let new_theta = theta * exp;

        Self { real:      new_r * new_theta.cos(),
               imaginary: new_r * new_theta.sin(), }
    }

    /// Raises the complex number to a complex power: `exp(w * ln(z))`.
    ///
    /// The caller must handle a zero base.
    #[must_use]
    pub fn powc(self, exp: Self) -> Self {
        (exp * self.ln()).exp()
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(-9.0, 0.0);
    /// let s = c.sqrt();
    /// assert!(s.real.abs() < 1e-10);
    /// assert!((s.imaginary - 3.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b); // preserve sign of b

        Self { real, imaginary }
    }

    /// Returns the exponential of the complex number.
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm (ln) of the complex number.
    ///
    /// # Example
    /// ```
    /// use function_solver::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(-1.0, 0.0);
    /// let ln = z.ln();
    /// assert!(ln.real.abs() < 1e-10);
    /// assert!((ln.imaginary - std::f64::consts::PI).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imaginary += rhs.imaginary;
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::SubAssign for ComplexNumber {
    fn sub_assign(&mut self, rhs: Self) {
        self.real -= rhs.real;
        self.imaginary -= rhs.imaginary;
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl ops::DivAssign for ComplexNumber {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}

impl PartialOrd for ComplexNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let real_cmp = OrderedFloat(self.real).cmp(&OrderedFloat(other.real));
        if real_cmp == Ordering::Equal {
            OrderedFloat(self.imaginary).cmp(&OrderedFloat(other.imaginary))
        } else {
            real_cmp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_sign_of_imaginary_part() {
        assert_eq!(ComplexNumber::new(1.5, 0.0).to_string(), "1.5");
        assert_eq!(ComplexNumber::new(0.0, -2.0).to_string(), "-2i");
        assert_eq!(ComplexNumber::new(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(ComplexNumber::new(1.0, -2.0).to_string(), "1 - 2i");
    }

    #[test]
    fn negative_powers_of_zero_divide_by_zero() {
        assert_eq!(ZERO.checked_powi(-2, 7),
                   Err(EvalError::DivisionByZero { position: 7 }));
    }

    #[test]
    fn overflowing_power_is_not_finite() {
        let big = ComplexNumber::new(1e200, 1.0);
        assert_eq!(big.checked_powi(3, 4), Err(EvalError::NonFinite { position: 4 }));
    }

    #[test]
    fn negative_integer_power_is_reciprocal() {
        let c = ComplexNumber::new(2.0, 0.0).checked_powi(-2, 0).unwrap();
        assert!((c.real - 0.25).abs() < 1e-12);
        assert!(c.imaginary.abs() < 1e-12);
    }

    #[test]
    fn complex_power_matches_real_power_for_positive_base() {
        let c = ComplexNumber::new(2.0, 0.0).powc(ComplexNumber::new(3.0, 0.0));
        assert!((c.real - 8.0).abs() < 1e-10);
        assert!(c.imaginary.abs() < 1e-10);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut roots = vec![ComplexNumber::new(1.0, 1.0),
                             ComplexNumber::new(-1.0, 0.0),
                             ComplexNumber::new(1.0, -1.0)];
        roots.sort();
        assert_eq!(roots,
                   vec![ComplexNumber::new(-1.0, 0.0),
                        ComplexNumber::new(1.0, -1.0),
                        ComplexNumber::new(1.0, 1.0)]);
    }
}
