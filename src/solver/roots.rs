use std::f64::consts::TAU;

use tracing::{debug, trace};

use crate::{
    interpreter::value::complex::{ComplexNumber, ONE, ZERO},
    solver::polynomial::Polynomial,
    util::num::{is_negligible, usize_to_f64_checked},
};

/// Leading coefficients this small next to the largest are cancellation noise.
const LEADING_TOLERANCE: f64 = 1e-12;
/// Imaginary parts this small relative to the root are rounding residue.
const IMAGINARY_TOLERANCE: f64 = 1e-9;
/// A discriminant this small next to `b^2` or `4ac` is rounding residue of a
/// double root.
const DISCRIMINANT_TOLERANCE: f64 = 1e-13;
/// Taylor coefficients this small next to their bound vanish.
const REPEATED_TOLERANCE: f64 = 1e-12;
/// Linkage radii, relative to root size, tried from coarse to fine when
/// looking for clusters of iterates around a repeated root.
const CLUSTER_RADII: [f64; 6] = [1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6];
/// Relative step size at which Durand-Kerner iteration stops.
const CONVERGENCE: f64 = 1e-14;
const MAX_ITERATIONS: usize = 1_000;
const POLISH_STEPS: usize = 3;
const REPEATED_POLISH_STEPS: usize = 8;

/// Finds the distinct roots of a real polynomial.
///
/// Degrees one and two are solved in closed form. Higher degrees factor out
/// `x = 0` exactly and run Durand-Kerner on the rest, followed by a few
/// Newton steps on the original polynomial.
///
/// Iteration scatters the copies of a root of multiplicity `k` on a small
/// circle. A group of `k` nearby iterates is reported as one root only when
/// the first `k` Taylor coefficients of the polynomial vanish at the group's
/// center; close but distinct roots stay separate. Imaginary parts that are
/// pure rounding residue are set to exactly zero and near-integers whose
/// residual does not grow are snapped.
///
/// A constant polynomial has no roots; the zero polynomial (an identity)
/// reports none either.
///
/// # Example
/// ```
/// use function_solver::{
///     interpreter::value::complex::ComplexNumber,
///     solver::{polynomial::Polynomial, roots::find_roots},
/// };
///
/// let roots = find_roots(&Polynomial::new(vec![-4.0, 0.0, 1.0]));
/// assert_eq!(roots, vec![ComplexNumber::from(-2.0), ComplexNumber::from(2.0)]);
/// ```
#[must_use]
pub fn find_roots(polynomial: &Polynomial) -> Vec<ComplexNumber> {
    let polynomial = polynomial.trimmed(LEADING_TOLERANCE);
    let zeros = polynomial.low_order_zeros();
    let reduced = polynomial.shift_down(zeros);

    let mut roots = match reduced.coefficients() {
        [] | [_] => Vec::new(),
        [c, b] => vec![ComplexNumber::from(-c / b)],
        [c, b, a] => quadratic(*a, *b, *c),
        _ => merge_repeated(&reduced, durand_kerner(&reduced), 0),
    };
    if zeros > 0 {
        roots.push(ZERO);
    }

    let roots = cleanup(&polynomial, roots);
    debug!(degree = ?polynomial.degree(), roots = roots.len(), "found polynomial roots");
    roots
}

/// Roots of `a x^2 + b x + c` with `a != 0` and `c != 0`.
fn quadratic(a: f64, b: f64, c: f64) -> Vec<ComplexNumber> {
    let discriminant = b.mul_add(b, -4.0 * a * c);

    if discriminant.abs() <= DISCRIMINANT_TOLERANCE * (b * b).max((4.0 * a * c).abs()) {
        return vec![ComplexNumber::from(-b / (2.0 * a))];
    }
    if discriminant > 0.0 {
        let q = -0.5 * (b + discriminant.sqrt().copysign(b));
        return vec![ComplexNumber::from(q / a), ComplexNumber::from(c / q)];
    }

    let real = -b / (2.0 * a);
    let imaginary = (-discriminant).sqrt() / (2.0 * a).abs();
    vec![ComplexNumber::new(real, -imaginary), ComplexNumber::new(real, imaginary)]
}

/// Simultaneous iteration for all roots of a polynomial of degree three or
/// more with a non-zero constant term.
fn durand_kerner(polynomial: &Polynomial) -> Vec<ComplexNumber> {
    let coefficients = polynomial.coefficients();
    let degree = coefficients.len() - 1;
    let leading = coefficients[degree];
    let monic = Polynomial::new(coefficients.iter().map(|c| c / leading).collect());

    // Cauchy bound: every root lies inside this radius.
    let radius = 1.0 + monic.coefficients()[..degree].iter()
                                                      .map(|c| c.abs())
                                                      .fold(0.0, f64::max);
    let count = usize_to_f64_checked(degree).unwrap_or(f64::MAX);
    let mut roots: Vec<ComplexNumber> =
        (0..degree).map(|k| {
                       let angle = TAU * usize_to_f64_checked(k).unwrap_or(0.0) / count + 0.4;
                       ComplexNumber::new(radius * angle.cos(), radius * angle.sin())
                   })
                   .collect();

    for iteration in 0..MAX_ITERATIONS {
        let mut largest_step = 0.0_f64;
        for i in 0..degree {
            let current = roots[i];
            let denominator = roots.iter()
                                   .enumerate()
                                   .filter(|(j, _)| *j != i)
                                   .fold(ONE, |acc, (_, other)| acc * (current - *other));
            if denominator.is_zero() {
                roots[i] = current + ComplexNumber::new(radius * 1e-8, radius * 1e-8);
                largest_step = f64::INFINITY;
                continue;
            }
            let step = monic.eval(current) / denominator;
            roots[i] = current - step;
            largest_step = largest_step.max(step.abs());
        }
        if largest_step <= CONVERGENCE * radius {
            trace!(iteration, degree, "durand-kerner converged");
            break;
        }
    }

    let derivative = polynomial.derivative();
    roots.into_iter()
         .map(|root| polish(polynomial, &derivative, root, POLISH_STEPS))
         .collect()
}

/// Collapses groups of iterates that surround a repeated root.
///
/// The whole group is tested first; if it is not one repeated root, it is
/// split into linked components at the next finer radius and each component
/// is tested in turn.
fn merge_repeated(polynomial: &Polynomial,
                  members: Vec<ComplexNumber>,
                  level: usize)
                  -> Vec<ComplexNumber> {
    if members.len() < 2 {
        return members;
    }
    if let Some(root) = repeated_root(polynomial, &members) {
        trace!(multiplicity = members.len(), %root, "merged repeated root");
        return vec![root];
    }
    let Some(radius) = CLUSTER_RADII.get(level) else {
        return members;
    };

    link(&members, *radius).into_iter()
                           .flat_map(|group| merge_repeated(polynomial, group, level + 1))
                           .collect()
}

/// Returns the center if `members` are the scattered copies of one root of
/// multiplicity `members.len()`.
///
/// The `(k-1)`-th derivative has a simple root at a `k`-fold root, so Newton
/// steps on it from the mean of the group find the center accurately.
fn repeated_root(polynomial: &Polynomial, members: &[ComplexNumber]) -> Option<ComplexNumber> {
    let multiplicity = members.len();
    let count = usize_to_f64_checked(multiplicity)?;
    let mean = members.iter().fold(ZERO, |acc, root| acc + *root) / ComplexNumber::from(count);

    let mut derivative = polynomial.clone();
    for _ in 1..multiplicity {
        derivative = derivative.derivative();
    }
    let center = polish(&derivative,
                        &derivative.derivative(),
                        mean,
                        REPEATED_POLISH_STEPS);

    let vanishes = polynomial.taylor(center)
                             .iter()
                             .zip(polynomial.taylor_bounds(center.abs()))
                             .take(multiplicity)
                             .all(|(coefficient, bound)| {
                                 coefficient.abs() <= REPEATED_TOLERANCE * bound
                             });
    vanishes.then_some(center)
}

/// Splits points into components whose members are chained by steps no
/// longer than `radius` relative to their size.
fn link(points: &[ComplexNumber], radius: f64) -> Vec<Vec<ComplexNumber>> {
    let mut assigned = vec![false; points.len()];
    let mut groups = Vec::new();

    for start in 0..points.len() {
        if assigned[start] {
            continue;
        }
        assigned[start] = true;
        let mut group = vec![points[start]];
        let mut next = 0;
        while let Some(current) = group.get(next).copied() {
            for (i, candidate) in points.iter().enumerate() {
                let scale = current.abs().max(candidate.abs()).max(1.0);
                if !assigned[i] && (current - *candidate).abs() <= radius * scale {
                    assigned[i] = true;
                    group.push(*candidate);
                }
            }
            next += 1;
        }
        groups.push(group);
    }

    groups
}

/// Newton steps, each kept only if it lowers the residual.
fn polish(polynomial: &Polynomial,
          derivative: &Polynomial,
          root: ComplexNumber,
          steps: usize)
          -> ComplexNumber {
    let mut root = root;
    for _ in 0..steps {
        let slope = derivative.eval(root);
        if slope.is_zero() {
            break;
        }
        let candidate = root - polynomial.eval(root) / slope;
        if !candidate.is_finite() || polynomial.eval(candidate).abs() > polynomial.eval(root).abs() {
            break;
        }
        root = candidate;
    }
    root
}

/// Clears rounding residue from either part, snaps near-integers, rebuilds
/// conjugate pairs and sorts.
fn cleanup(polynomial: &Polynomial, roots: Vec<ComplexNumber>) -> Vec<ComplexNumber> {
    let cleaned: Vec<ComplexNumber> =
        roots.into_iter()
             .map(|root| {
                 if is_negligible(root.imaginary, root.abs(), IMAGINARY_TOLERANCE) {
                     ComplexNumber::from(snap(polynomial, root.real))
                 } else if is_negligible(root.real, root.abs(), IMAGINARY_TOLERANCE) {
                     ComplexNumber::new(0.0, root.imaginary)
                 } else {
                     root
                 }
             })
             .collect();

    // Real coefficients: rebuild each conjugate pair from its upper member.
    let mut distinct: Vec<ComplexNumber> = cleaned.iter()
                                                  .filter(|root| root.imaginary >= 0.0)
                                                  .copied()
                                                  .collect();
    let conjugates: Vec<ComplexNumber> =
        distinct.iter()
                .filter(|root| root.imaginary > 0.0)
                .map(|root| ComplexNumber::new(root.real, -root.imaginary))
                .collect();
    distinct.extend(conjugates);

    sort_roots(&mut distinct);
    distinct.dedup();
    distinct
}

/// Rounds a real root to the nearest integer when that is at least as good.
fn snap(polynomial: &Polynomial, root: f64) -> f64 {
    let rounded = root.round();
    if rounded != root
       && is_negligible(root - rounded, root, IMAGINARY_TOLERANCE)
       && polynomial.eval_real(rounded).abs() <= polynomial.eval_real(root).abs()
    {
        return rounded;
    }
    root
}

/// Orders real roots ascending, followed by complex roots ordered by real
/// then imaginary part.
pub fn sort_roots(roots: &mut [ComplexNumber]) {
    roots.sort_by(|a, b| b.is_real().cmp(&a.is_real()).then_with(|| a.cmp(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reals(roots: &[ComplexNumber]) -> Vec<f64> {
        roots.iter().filter(|r| r.is_real()).map(|r| r.real).collect()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn constants_and_identities_have_no_roots() {
        assert!(find_roots(&Polynomial::constant(-1.0)).is_empty());
        assert!(find_roots(&Polynomial::default()).is_empty());
    }

    #[test]
    fn linear_root_is_exact() {
        let roots = find_roots(&Polynomial::new(vec![3.0, -2.0]));
        assert_eq!(roots, vec![ComplexNumber::from(1.5)]);
    }

    #[test]
    fn quadratic_cases() {
        let double = find_roots(&Polynomial::new(vec![1.0, -2.0, 1.0]));
        assert_eq!(double, vec![ComplexNumber::from(1.0)]);

        let complex = find_roots(&Polynomial::new(vec![1.0, 0.0, 1.0]));
        assert_eq!(complex,
                   vec![ComplexNumber::new(0.0, -1.0), ComplexNumber::new(0.0, 1.0)]);
    }

    #[test]
    fn zero_roots_are_factored_out_exactly() {
        let roots = find_roots(&Polynomial::new(vec![0.0, 0.0, -1.0, 1.0]));
        assert_eq!(roots, vec![ZERO, ComplexNumber::from(1.0)]);
    }

    #[test]
    fn cubic_with_integer_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = find_roots(&Polynomial::new(vec![-6.0, 11.0, -6.0, 1.0]));
        assert_eq!(reals(&roots), vec![1.0, 2.0, 3.0]);
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn cubic_with_complex_pair_lists_real_root_first() {
        // (x - 2)(x^2 + 1)
        let roots = find_roots(&Polynomial::new(vec![-2.0, 1.0, -2.0, 1.0]));
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0], ComplexNumber::from(2.0));
        assert!((roots[1].imaginary + 1.0).abs() < 1e-9);
        assert!((roots[2].imaginary - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quartic_with_irrational_roots() {
        // x^4 - 5x^2 + 6 = (x^2 - 2)(x^2 - 3)
        let roots = find_roots(&Polynomial::new(vec![6.0, 0.0, -5.0, 0.0, 1.0]));
        let sqrt2 = 2.0_f64.sqrt();
        let sqrt3 = 3.0_f64.sqrt();
        assert_close(&reals(&roots), &[-sqrt3, -sqrt2, sqrt2, sqrt3]);
    }

    #[test]
    fn repeated_cubic_root_is_reported_once() {
        // (x - 1)^3
        let roots = find_roots(&Polynomial::new(vec![-1.0, 3.0, -3.0, 1.0]));
        assert_eq!(roots.len(), 1, "{roots:?}");
        assert!(roots[0].is_real());
        assert!((roots[0].real - 1.0).abs() < 1e-9);
    }

    #[test]
    fn close_distinct_quadratic_roots_stay_separate() {
        // (x - 1)(x - 1.00001)
        let p = &Polynomial::new(vec![-1.0, 1.0]) * &Polynomial::new(vec![-1.00001, 1.0]);
        let roots = find_roots(&p);
        assert_close(&reals(&roots), &[1.0, 1.00001]);
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn close_distinct_cubic_roots_stay_separate() {
        // (x - 1)(x - 1.00001)(x + 5)
        let pair = &Polynomial::new(vec![-1.0, 1.0]) * &Polynomial::new(vec![-1.00001, 1.0]);
        let p = &pair * &Polynomial::new(vec![5.0, 1.0]);
        let roots = find_roots(&p);
        assert_close(&reals(&roots), &[-5.0, 1.0, 1.00001]);
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn quadruple_root_is_reported_once() {
        let p = Polynomial::new(vec![-1.0, 1.0]).powi(4);
        assert_eq!(find_roots(&p), vec![ComplexNumber::from(1.0)]);
    }

    #[test]
    fn quadruple_root_next_to_a_simple_one() {
        // (x - 1)^4 (x + 2)
        let p = &Polynomial::new(vec![-1.0, 1.0]).powi(4) * &Polynomial::new(vec![2.0, 1.0]);
        assert_eq!(find_roots(&p),
                   vec![ComplexNumber::from(-2.0), ComplexNumber::from(1.0)]);
    }

    #[test]
    fn repeated_complex_pair_is_reported_once() {
        // (x^2 + 1)^2
        let roots = find_roots(&Polynomial::new(vec![1.0, 0.0, 1.0]).powi(2));
        assert_eq!(roots.len(), 2, "{roots:?}");
        assert!((roots[0].imaginary + 1.0).abs() < 1e-9);
        assert!((roots[1].imaginary - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rounded_double_root_of_quadratic() {
        // (x - 0.1)^2 expanded in floating point
        let p = Polynomial::new(vec![-0.1, 1.0]).powi(2);
        let roots = find_roots(&p);
        assert_eq!(roots.len(), 1, "{roots:?}");
        assert!((roots[0].real - 0.1).abs() < 1e-12);
    }

    #[test]
    fn sorting_puts_reals_first() {
        let mut roots = vec![ComplexNumber::new(-5.0, 1.0),
                             ComplexNumber::from(3.0),
                             ComplexNumber::from(-1.0)];
        sort_roots(&mut roots);
        assert_eq!(roots,
                   vec![ComplexNumber::from(-1.0),
                        ComplexNumber::from(3.0),
                        ComplexNumber::new(-5.0, 1.0)]);
    }
}
