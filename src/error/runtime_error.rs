use thiserror::Error;

/// Errors raised while evaluating an expression tree.
///
/// Positions refer to the token that introduced the failing node, so callers
/// can point back into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Attempted division by exactly zero (including `0 ^ negative`).
    #[error("Division by zero at position {position}")]
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// An intermediate result overflowed or was otherwise not finite, such as
    /// `log(0)`.
    #[error("Non-finite result at position {position}")]
    NonFinite {
        /// Byte offset of the node that produced the value.
        position: usize,
    },
}

impl EvalError {
    /// Byte offset of the node that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::NonFinite { position } => *position,
        }
    }
}
