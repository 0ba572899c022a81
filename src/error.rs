use thiserror::Error;

/// Lexical errors.
///
/// Invalid characters and identifiers other than `x`, `log` and `sqrt`. These
/// are collected, never raised, so that one pass reports every bad lexeme.
pub mod lex_error;
/// Syntax errors.
///
/// Defines the single grammar mismatch reported when a token stream does not
/// form a valid expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Errors raised while computing the value of a parsed expression, such as
/// division by zero or an overflowing intermediate result.
pub mod runtime_error;
/// Solver errors.
///
/// Reasons an equation falls outside the rational-function class the root
/// finder handles.
pub mod solve_error;

pub use lex_error::LexError;
pub use parse_error::SyntaxError;
pub use runtime_error::EvalError;
pub use solve_error::SolveError;

/// Errors returned by the text-level entry points ([`crate::parse`],
/// [`crate::evaluate`], [`crate::solve`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// The input failed validation. Carries the same messages as
    /// [`crate::Validation::errors`].
    #[error("{}", .errors.join("; "))]
    Invalid {
        /// Lexical or syntax error messages, in the order found.
        errors: Vec<String>,
    },
    /// The input was valid but could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
