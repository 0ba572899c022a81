/// Complex number support.
///
/// Defines the `ComplexNumber` type used for roots and for non-real results of
/// evaluation. Includes arithmetic, principal `ln`, `sqrt` and powers, and a
/// total ordering so solution sets can be sorted.
pub mod complex;

/// The `Value` enum produced by evaluation: real, or complex when the input
/// leaves the real domain.
pub mod core;
