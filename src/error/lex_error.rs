use thiserror::Error;

/// An error found while tokenizing an expression.
///
/// Lexical errors never stop the lexer: the offending input is skipped (or,
/// for identifiers, still emitted as a variable token) and scanning resumes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Invalid character '{character}'")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// An identifier other than `x`, `log` or `sqrt`.
    #[error("Invalid variable '{name}'")]
    InvalidVariable {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the identifier in the input.
        position: usize,
    },
}

impl LexError {
    /// Byte offset of the offending input.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::InvalidVariable { position, .. } => {
                *position
            },
        }
    }
}
