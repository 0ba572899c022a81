use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error reported when `token` does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                   position: token.position, }
}

/// Consumes the next token, which must be of kind `expected`.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the next token has another kind,
/// - the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(unexpected(token)),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}
