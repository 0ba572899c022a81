use std::ops;

use crate::{
    interpreter::value::complex::{ComplexNumber, ZERO},
    util::num::usize_to_f64_checked,
};

/// A polynomial in `x` with real coefficients, lowest degree first.
///
/// The coefficient list never ends in an exact zero, so the zero polynomial
/// has no coefficients at all and [`Polynomial::degree`] is `None` for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients ordered `c0, c1, c2, ...`.
    ///
    /// # Example
    /// ```
    /// use function_solver::solver::polynomial::Polynomial;
    ///
    /// let p = Polynomial::new(vec![-4.0, 0.0, 1.0, 0.0]);
    /// assert_eq!(p.degree(), Some(2));
    /// assert_eq!(p.coefficients(), &[-4.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn new(mut coefficients: Vec<f64>) -> Self {
        while coefficients.last() == Some(&0.0) {
            coefficients.pop();
        }
        Self { coefficients }
    }

    /// The constant polynomial `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// The polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![0.0, 1.0])
    }

    /// Coefficients ordered `c0, c1, c2, ...`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The degree, or `None` for the zero polynomial.
    #[must_use]
    pub const fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Returns `true` for the zero polynomial.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the constant value if the degree is at most zero.
    #[must_use]
    pub fn as_constant(&self) -> Option<f64> {
        match self.coefficients.as_slice() {
            [] => Some(0.0),
            [c] => Some(*c),
            _ => None,
        }
    }

    /// Number of exactly zero coefficients at the low end, i.e. the power of
    /// `x` that divides the polynomial.
    #[must_use]
    pub fn low_order_zeros(&self) -> usize {
        self.coefficients.iter().take_while(|c| **c == 0.0).count()
    }

    /// Divides by `x^n`; the caller guarantees `n <= low_order_zeros()`.
    #[must_use]
    pub fn shift_down(&self, n: usize) -> Self {
        Self::new(self.coefficients.get(n..).unwrap_or_default().to_vec())
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.coefficients.iter().map(|c| c * factor).collect())
    }

    /// Drops leading coefficients that are negligible next to the largest one.
    ///
    /// Cancellation such as `(0.1 + 0.2) * x^2 - 0.3 * x^2` leaves a leading
    /// coefficient of about `5e-17`, which would otherwise produce a spurious
    /// root near infinity.
    #[must_use]
    pub fn trimmed(&self, tolerance: f64) -> Self {
        let largest = self.coefficients
                          .iter()
                          .map(|c| c.abs())
                          .fold(0.0, f64::max);
        let mut coefficients = self.coefficients.clone();
        while let Some(last) = coefficients.last()
              && last.abs() <= tolerance * largest
        {
            coefficients.pop();
        }
        Self::new(coefficients)
    }

    /// Raises the polynomial to a non-negative integer power by repeated
    /// squaring.
    #[must_use]
    pub fn powi(&self, exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::constant(1.0);
        let mut n = exp;

        while n > 0 {
            if n % 2 == 1 {
                result = &result * &base;
            }
            n /= 2;
            if n > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// The formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(self.coefficients
                      .iter()
                      .enumerate()
                      .skip(1)
                      .map(|(power, c)| c * usize_to_f64_checked(power).unwrap_or(f64::MAX))
                      .collect())
    }

    /// Evaluates at a complex point with Horner's scheme.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     interpreter::value::complex::ComplexNumber,
    ///     solver::polynomial::Polynomial,
    /// };
    ///
    /// let p = Polynomial::new(vec![1.0, 0.0, 1.0]);
    /// assert_eq!(p.eval(ComplexNumber::new(0.0, 1.0)), ComplexNumber::new(0.0, 0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: ComplexNumber) -> ComplexNumber {
        self.coefficients
            .iter()
            .rev()
            .fold(ZERO, |acc, c| acc * x + ComplexNumber::from(*c))
    }

    /// Evaluates at a real point with Horner's scheme.
    #[must_use]
    pub fn eval_real(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc.mul_add(x, *c))
    }

    /// Coefficients of `p(center + y)` in powers of `y`, lowest first.
    ///
    /// The `j`-th entry is `p^(j)(center) / j!`, so a root of multiplicity
    /// `k` at `center` makes the first `k` entries vanish.
    ///
    /// # Example
    /// ```
    /// use function_solver::{
    ///     interpreter::value::complex::ComplexNumber,
    ///     solver::polynomial::Polynomial,
    /// };
    ///
    /// let p = Polynomial::new(vec![1.0, -2.0, 1.0]);
    /// let shifted = p.taylor(ComplexNumber::from(1.0));
    /// assert_eq!(shifted,
    ///            vec![ComplexNumber::from(0.0), ComplexNumber::from(0.0), ComplexNumber::from(1.0)]);
    /// ```
    #[must_use]
    pub fn taylor(&self, center: ComplexNumber) -> Vec<ComplexNumber> {
        let coefficients = self.coefficients.iter().map(|c| ComplexNumber::from(*c)).collect();
        shift_origin(coefficients, center)
    }

    /// Bounds on the magnitude of each [`Polynomial::taylor`] coefficient at
    /// any center of modulus `radius`: the same shift applied to `|c_i|`.
    #[must_use]
    pub fn taylor_bounds(&self, radius: f64) -> Vec<f64> {
        let coefficients = self.coefficients.iter().map(|c| c.abs()).collect();
        shift_origin(coefficients, radius)
    }

    /// Sum of `|c_i| * |x|^i`: the magnitude against which a residual at `x`
    /// is judged negligible.
    #[must_use]
    pub fn magnitude_at(&self, x: ComplexNumber) -> f64 {
        let r = x.abs();
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc.mul_add(r, c.abs()))
    }
}

/// Repeated synthetic division by `(x - center)`.
fn shift_origin<T>(mut coefficients: Vec<T>, center: T) -> Vec<T>
    where T: Copy + ops::Mul<Output = T> + ops::AddAssign
{
    let n = coefficients.len();
    for start in 0..n {
        for i in (start..n.saturating_sub(1)).rev() {
            let next = coefficients[i + 1];
            coefficients[i] += next * center;
        }
    }
    coefficients
}

impl ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        Polynomial::new((0..len).map(|i| {
                                    self.coefficients.get(i).copied().unwrap_or(0.0)
                                    + rhs.coefficients.get(i).copied().unwrap_or(0.0)
                                })
                                .collect())
    }
}

impl ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::default();
        }
        let mut product = vec![0.0; self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                product[i + j] = a.mul_add(*b, product[i + j]);
            }
        }
        Polynomial::new(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_cancels_exactly() {
        let a = Polynomial::new(vec![2.0, 1.0]);
        let b = Polynomial::new(vec![-1.0, 1.0]);
        assert_eq!((&a - &a).degree(), None);
        assert_eq!((&a * &b).coefficients(), &[-2.0, 1.0, 1.0]);
        assert_eq!((&a + &b).coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn power_expands_binomial() {
        let p = Polynomial::new(vec![1.0, 1.0]).powi(3);
        assert_eq!(p.coefficients(), &[1.0, 3.0, 3.0, 1.0]);
        assert_eq!(Polynomial::x().powi(0).coefficients(), &[1.0]);
    }

    #[test]
    fn trimming_removes_cancellation_noise() {
        let p = Polynomial::new(vec![1.0, 2.0, 5e-17]);
        assert_eq!(p.trimmed(1e-12).coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn derivative_and_real_evaluation() {
        let p = Polynomial::new(vec![2.0, 3.0, 1.0]);
        assert_eq!(p.derivative().coefficients(), &[3.0, 2.0]);
        assert_eq!(p.eval_real(2.0), 12.0);
    }

    #[test]
    fn taylor_shift_exposes_multiplicity() {
        // (x - 2)^2 (x + 1)
        let p = Polynomial::new(vec![4.0, 0.0, -3.0, 1.0]);
        let shifted = p.taylor(ComplexNumber::from(2.0));
        assert_eq!(shifted,
                   vec![ZERO, ZERO, ComplexNumber::from(3.0), ComplexNumber::from(1.0)]);
        assert_eq!(p.taylor_bounds(2.0), vec![24.0, 24.0, 9.0, 1.0]);
    }

    #[test]
    fn shifting_divides_by_powers_of_x() {
        let p = Polynomial::new(vec![0.0, 0.0, 3.0, 1.0]);
        assert_eq!(p.low_order_zeros(), 2);
        assert_eq!(p.shift_down(2).coefficients(), &[3.0, 1.0]);
    }
}
