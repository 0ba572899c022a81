use std::fmt::Display;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Every identifier lexes as `Variable`; [`tokenize`] then reclassifies it
/// and reports anything other than `x`. Literal `log` and `sqrt` win over the
/// identifier pattern because exact tokens take priority at equal length, while
/// longer words such as `logx` still lex as a single identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `123`, `45.67` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `^`
    #[token("^")]
    Power,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `log`
    #[token("log")]
    Log,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// Identifier tokens. Only `x` is a valid variable.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Variable,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::Power => "POWER",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Log => "LOG",
            Self::Sqrt => "SQRT",
            Self::Variable => "VARIABLE",
        };
        write!(f, "{name}")
    }
}

/// A classified slice of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the slice is.
    pub kind:     TokenKind,
    /// The slice as written.
    pub lexeme:   String,
    /// Byte offset of the slice in the input.
    pub position: usize,
}

/// The output of [`tokenize`]: tokens and lexical errors, both in input
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenization {
    /// Tokens, including variables that were reported as invalid.
    pub tokens: Vec<Token>,
    /// Lexical errors in the order they were encountered.
    pub errors: Vec<LexError>,
}

impl Tokenization {
    /// Returns `true` if no lexical error was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The token kinds, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// The error messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Tokenizes an expression.
///
/// Spaces and tabs are skipped. A character that starts no token is reported
/// as `Invalid character` and skipped; an identifier other than `x`, `log` or
/// `sqrt` is reported as `Invalid variable` but still emitted as a
/// `Variable` token so the token stream keeps its shape. Lexing never stops
/// early.
///
/// # Example
/// ```
/// use function_solver::interpreter::lexer::{TokenKind, tokenize};
///
/// let result = tokenize("x + 3 * @");
/// assert_eq!(result.kinds(),
///            vec![TokenKind::Variable, TokenKind::Plus, TokenKind::Number, TokenKind::Times]);
/// assert_eq!(result.messages(), vec!["Invalid character '@'".to_string()]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenization {
    let mut result = Tokenization::default();
    let mut lexer = TokenKind::lexer(source);

    while let Some(token) = lexer.next() {
        let lexeme = lexer.slice();
        let position = lexer.span().start;

        match token {
            Ok(kind) => {
                if kind == TokenKind::Variable && lexeme != "x" {
                    result.errors.push(LexError::InvalidVariable { name: lexeme.to_string(),
                                                                   position });
                }
                result.tokens.push(Token { kind,
                                           lexeme: lexeme.to_string(),
                                           position });
            },
            Err(()) => {
                // Unmatched input is reported one character at a time.
                for (offset, character) in lexeme.char_indices() {
                    result.errors.push(LexError::InvalidCharacter { character,
                                                                    position: position
                                                                              + offset });
                }
            },
        }
    }

    trace!(tokens = result.tokens.len(),
           errors = result.errors.len(),
           "tokenized expression");

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_unknown_variable_but_keeps_token() {
        let result = tokenize("x + 3 * (y - 2) / 4 ^ 2");
        assert_eq!(result.messages(), vec!["Invalid variable 'y'".to_string()]);
        assert_eq!(result.kinds(),
                   vec![TokenKind::Variable,
                        TokenKind::Plus,
                        TokenKind::Number,
                        TokenKind::Times,
                        TokenKind::LParen,
                        TokenKind::Variable,
                        TokenKind::Minus,
                        TokenKind::Number,
                        TokenKind::RParen,
                        TokenKind::Divide,
                        TokenKind::Number,
                        TokenKind::Power,
                        TokenKind::Number]);
    }

    #[test]
    fn recovers_after_invalid_character() {
        let result = tokenize("x @ 2 # x");
        assert_eq!(result.kinds(),
                   vec![TokenKind::Variable, TokenKind::Number, TokenKind::Variable]);
        assert_eq!(result.messages(),
                   vec!["Invalid character '@'".to_string(),
                        "Invalid character '#'".to_string()]);
    }

    #[test]
    fn recognizes_functions() {
        let result = tokenize("log(x) + sqrt(x)");
        assert!(result.is_clean());
        assert_eq!(result.kinds(),
                   vec![TokenKind::Log,
                        TokenKind::LParen,
                        TokenKind::Variable,
                        TokenKind::RParen,
                        TokenKind::Plus,
                        TokenKind::Sqrt,
                        TokenKind::LParen,
                        TokenKind::Variable,
                        TokenKind::RParen]);
    }

    #[test]
    fn longer_words_are_single_identifiers() {
        let result = tokenize("logx sqrt2 x1");
        assert_eq!(result.kinds(), vec![TokenKind::Variable; 3]);
        assert_eq!(result.messages(),
                   vec!["Invalid variable 'logx'".to_string(),
                        "Invalid variable 'sqrt2'".to_string(),
                        "Invalid variable 'x1'".to_string()]);
    }

    #[test]
    fn numbers_take_the_longest_match() {
        let result = tokenize("123 45.67 .5");
        assert!(result.is_clean());
        let lexemes: Vec<_> = result.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["123", "45.67", ".5"]);
    }

    #[test]
    fn records_byte_positions() {
        let result = tokenize("  x\t+ 10");
        let positions: Vec<_> = result.tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 4, 6]);
    }

    #[test]
    fn each_call_is_independent() {
        assert_eq!(tokenize("x $"), tokenize("x $"));
        assert!(tokenize("x").is_clean());
    }

    #[test]
    fn kind_names_are_upper_case() {
        assert_eq!(TokenKind::Variable.to_string(), "VARIABLE");
        assert_eq!(TokenKind::LParen.to_string(), "LPAREN");
    }
}
