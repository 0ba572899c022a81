/// Operator dispatch.
pub mod core;
/// Exponentiation, including the complex fallback for negative bases.
pub mod power;
/// `+ - * /` on real and complex operands.
pub mod scalar;
