/// Binary operator evaluation logic.
///
/// Handles `+ - * /` on real and complex values and exponentiation with its
/// complex fallback.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation entry point, the context binding `x`, and the
/// finiteness check applied to every intermediate value.
pub mod core;

/// Function evaluation.
///
/// Implements the built-in `log` and `sqrt`, both of which leave the real
/// domain for non-positive input instead of failing.
pub mod function;
