/// Solver entry points.
///
/// Builds `lhs - rhs`, reduces it to a ratio of polynomials, finds the roots
/// of the numerator and discards those where the denominator vanishes.
/// Equations that do not reduce fall back to a numeric scan. Also
/// computes the real intersection points of two functions.
pub mod core;
/// Numeric real-root scan for equations outside the rational class.
///
/// Samples both sides on a fixed grid and bisects every sign change.
pub mod numeric;
/// Dense real polynomials with the arithmetic the reduction needs.
pub mod polynomial;
/// Reduction of expression trees to ratios of polynomials.
///
/// Constant sub-trees are folded by the evaluator; everything else must be a
/// rational function of `x`, or the reduction reports why it is not.
pub mod rational;
/// Closed-form and iterative polynomial root finding.
pub mod roots;
