use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::{ExpressionError, SyntaxError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, utils::unexpected},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}

/// Parses a complete token stream into one expression.
///
/// Tokens left over after a complete expression are a syntax error at the
/// first of them.
///
/// # Example
/// ```
/// use function_solver::{
///     error::SyntaxError,
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("2 3").tokens;
/// assert_eq!(parse_tokens(&tokens),
///            Err(SyntaxError::UnexpectedToken { lexeme:   "3".to_string(),
///                                               position: 2, }));
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some(token) => Err(unexpected(token)),
        None => Ok(expr),
    }
}

/// The outcome of validating an expression.
///
/// `expr` holds the syntax tree exactly when `is_valid` is `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// Whether the expression is lexically and syntactically valid.
    pub is_valid: bool,
    /// Human-readable error messages, in the order found.
    pub errors:   Vec<String>,
    /// The parsed tree of a valid expression.
    pub expr:     Option<Expr>,
}

impl Validation {
    /// Converts the validation into the parsed tree or an
    /// [`ExpressionError::Invalid`] carrying the messages.
    pub fn into_result(self) -> Result<Expr, ExpressionError> {
        match self.expr {
            Some(expr) if self.is_valid => Ok(expr),
            _ => Err(ExpressionError::Invalid { errors: self.errors }),
        }
    }
}

/// Validates an expression and builds its tree.
///
/// Lexical errors short-circuit: if the lexer reports anything, those messages
/// are returned and the grammar is not checked. Otherwise the first syntax
/// error, if any, is reported. Every call returns fresh data.
///
/// # Example
/// ```
/// use function_solver::interpreter::parser::core::validate;
///
/// let ok = validate("log(x + 1)");
/// assert!(ok.is_valid);
/// assert!(ok.errors.is_empty());
///
/// let bad = validate("x + 3 * (x - 2 / 4 ^ 2");
/// assert!(!bad.is_valid);
/// assert_eq!(bad.errors, vec!["Syntax error at end of expression".to_string()]);
/// ```
#[must_use]
pub fn validate(source: &str) -> Validation {
    let tokenization = tokenize(source);

    if !tokenization.is_clean() {
        trace!(errors = tokenization.errors.len(), "rejected by lexer");
        return Validation { is_valid: false,
                            errors:   tokenization.messages(),
                            expr:     None, };
    }

    match parse_tokens(&tokenization.tokens) {
        Ok(expr) => {
            trace!(%expr, "parsed expression");
            Validation { is_valid: true,
                         errors:   Vec::new(),
                         expr:     Some(expr), }
        },
        Err(e) => {
            trace!(error = %e, "rejected by parser");
            Validation { is_valid: false,
                         errors:   vec![e.to_string()],
                         expr:     None, }
        },
    }
}

/// Validates an expression and returns its tree, or the validation messages
/// as an error.
///
/// # Errors
/// Returns `ExpressionError::Invalid` with the same messages [`validate`]
/// reports.
pub fn parse(source: &str) -> Result<Expr, ExpressionError> {
    validate(source).into_result()
}
