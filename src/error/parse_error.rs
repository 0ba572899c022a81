use thiserror::Error;

/// The first grammar mismatch found while parsing a token stream.
///
/// Only one syntax error is ever reported per expression; parsing stops at
/// the first token that does not fit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A token appeared where the grammar does not allow it.
    #[error("Syntax error at '{lexeme}'")]
    UnexpectedToken {
        /// The offending token as written.
        lexeme:   String,
        /// Byte offset of the token in the input.
        position: usize,
    },
    /// The input ended before the expression was complete.
    #[error("Syntax error at end of expression")]
    UnexpectedEndOfInput,
}
