/// Dispatch from [`crate::ast::Function`] to its implementation.
pub mod core;
/// The natural logarithm.
pub mod log;
/// The principal square root.
pub mod sqrt;
