use tracing::{debug, trace};

use crate::{
    ast::Expr,
    interpreter::{evaluator::core::Context, value::complex::ComplexNumber},
    util::num::is_negligible,
};

/// Left end of the scanned interval.
pub const SCAN_MIN: f64 = -100.0;
/// Right end of the scanned interval.
pub const SCAN_MAX: f64 = 100.0;
/// Samples per unit of `x`, so the grid step is `0.05`.
const SAMPLES_PER_UNIT: f64 = 20.0;
/// Intervals between `SCAN_MIN` and `SCAN_MAX`.
const SAMPLES: u32 = 4_000;
const MAX_BISECTIONS: usize = 200;
/// A refined root must leave a residual this small relative to both sides.
const RESIDUAL_TOLERANCE: f64 = 1e-9;
const SNAP_TOLERANCE: f64 = 1e-9;

/// One grid point where both sides are real and finite.
#[derive(Debug, Clone, Copy)]
struct Sample {
    x:          f64,
    difference: f64,
    scale:      f64,
}

impl Sample {
    /// Evaluates `lhs - rhs` at `x`; `None` if either side is undefined or
    /// not real there.
    fn at(lhs: &Expr, rhs: &Expr, x: f64) -> Option<Self> {
        let context = Context::new(x);
        let left = context.eval(lhs).ok()?.as_real()?;
        let right = context.eval(rhs).ok()?.as_real()?;
        let difference = left - right;
        difference.is_finite().then_some(Self { x,
                                                difference,
                                                scale: left.abs() + right.abs() + 1.0 })
    }

    fn is_root(&self) -> bool {
        is_negligible(self.difference, self.scale, RESIDUAL_TOLERANCE)
    }

    fn brackets(&self, next: &Self) -> bool {
        self.difference != 0.0
        && next.difference != 0.0
        && self.difference.is_sign_negative() != next.difference.is_sign_negative()
    }
}

/// Finds real roots of `lhs = rhs` on `[SCAN_MIN, SCAN_MAX]` by sampling.
///
/// Adjacent real samples whose difference changes sign are refined by
/// bisection. A sample that hits zero exactly is a root. Any point where a
/// side is undefined or complex breaks the chain, so no bracket spans it.
/// Refined points whose residual is not negligible are poles, not roots, and
/// are dropped. Roots that touch zero without crossing are found only when a
/// grid point lands on them.
///
/// The roots are returned ascending.
///
/// # Example
/// ```
/// use function_solver::{interpreter::parser::core::validate, solver::numeric::scan_real_roots};
///
/// let lhs = validate("2^x").expr.unwrap();
/// let rhs = validate("8").expr.unwrap();
/// let roots = scan_real_roots(&lhs, &rhs);
/// assert_eq!(roots.len(), 1);
/// assert!((roots[0].real - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn scan_real_roots(lhs: &Expr, rhs: &Expr) -> Vec<ComplexNumber> {
    let mut roots = Vec::new();
    let mut previous: Option<Sample> = None;

    for step in 0..=SAMPLES {
        let x = f64::from(step) / SAMPLES_PER_UNIT + SCAN_MIN;
        let Some(sample) = Sample::at(lhs, rhs, x) else {
            previous = None;
            continue;
        };

        if sample.difference == 0.0 {
            roots.push(x);
        } else if let Some(left) = previous
                  && left.brackets(&sample)
                  && let Some(root) = bisect(lhs, rhs, left, sample)
        {
            roots.push(snap(lhs, rhs, root));
        }
        previous = Some(sample);
    }

    debug!(roots = roots.len(), "numeric scan finished");
    roots.into_iter().map(ComplexNumber::from).collect()
}

/// Narrows a sign change down to adjacent floats, then checks the residual.
fn bisect(lhs: &Expr, rhs: &Expr, mut low: Sample, mut high: Sample) -> Option<f64> {
    for _ in 0..MAX_BISECTIONS {
        let middle = low.x + (high.x - low.x) / 2.0;
        if middle <= low.x || middle >= high.x {
            break;
        }
        let sample = Sample::at(lhs, rhs, middle)?;
        if sample.difference == 0.0 {
            return Some(middle);
        }
        if low.brackets(&sample) {
            high = sample;
        } else {
            low = sample;
        }
    }

    let best = if low.difference.abs() <= high.difference.abs() { low } else { high };
    if best.is_root() {
        Some(best.x)
    } else {
        trace!(x = best.x, residual = best.difference, "sign change is a pole");
        None
    }
}

/// Rounds a root to the nearest integer when that does not worsen the
/// residual.
fn snap(lhs: &Expr, rhs: &Expr, root: f64) -> f64 {
    let rounded = root.round();
    if rounded == root || !is_negligible(root - rounded, root, SNAP_TOLERANCE) {
        return root;
    }
    match (Sample::at(lhs, rhs, rounded), Sample::at(lhs, rhs, root)) {
        (Some(snapped), Some(refined)) if snapped.difference.abs() <= refined.difference.abs() => rounded,
        _ => root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::validate;

    fn scan(lhs: &str, rhs: &str) -> Vec<f64> {
        let lhs = validate(lhs).expr.unwrap();
        let rhs = validate(rhs).expr.unwrap();
        scan_real_roots(&lhs, &rhs).into_iter().map(|root| root.real).collect()
    }

    fn assert_roots(lhs: &str, rhs: &str, expected: &[f64]) {
        let roots = scan(lhs, rhs);
        assert_eq!(roots.len(), expected.len(), "{lhs} = {rhs} gave {roots:?}");
        for (root, want) in roots.iter().zip(expected) {
            assert!((root - want).abs() < 1e-9, "{lhs} = {rhs} gave {roots:?}");
        }
    }

    #[test]
    fn refines_sign_changes_between_grid_points() {
        assert_roots("log(x)", "1", &[std::f64::consts::E]);
        assert_roots("sqrt(x + 1)", "x", &[(1.0 + 5.0_f64.sqrt()) / 2.0]);
    }

    #[test]
    fn grid_points_that_hit_zero_are_roots() {
        assert_eq!(scan("sqrt(x)", "2"), vec![4.0]);
        assert_eq!(scan("log(x)", "0"), vec![1.0]);
    }

    #[test]
    fn solves_power_equations() {
        assert_roots("x^0.5", "2", &[4.0]);
        assert_roots("2^x", "8", &[3.0]);
        assert_roots("x^100", "1", &[-1.0, 1.0]);
    }

    #[test]
    fn complex_regions_break_brackets() {
        assert!(scan("sqrt(x)", "-1").is_empty());
        assert_roots("x^x", "4", &[2.0]);
    }

    #[test]
    fn poles_are_not_roots() {
        assert!(scan("1 / log(x + 0.01)", "0").is_empty());
        assert!(scan("1 / log(x)", "0").is_empty());
    }

    #[test]
    fn roots_outside_the_window_are_not_found() {
        assert!(scan("log(x)", "5").is_empty());
    }

    #[test]
    fn near_integer_roots_are_snapped() {
        let lhs = validate("x").expr.unwrap();
        let rhs = validate("3").expr.unwrap();
        assert_eq!(snap(&lhs, &rhs, 3.000_000_000_1), 3.0);
        assert_eq!(snap(&lhs, &rhs, 3.1), 3.1);
    }
}
