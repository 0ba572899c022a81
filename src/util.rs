/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss. The evaluator uses them to
/// decide whether an exponent is integral, and the solver uses them to turn
/// constant exponents into polynomial degrees.
///
/// All functions return an `Option`, which is `Some` only if the conversion is
/// lossless.
pub mod num;
