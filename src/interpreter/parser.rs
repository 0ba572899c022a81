/// Entry points of the parser.
///
/// Defines the parse result type, the top-level expression rule, and
/// `validate`, which runs the lexer and the parser and reports the outcome as
/// data.
pub mod core;

/// Binary operator parsing.
///
/// Parses the additive, multiplicative and exponent levels of the grammar,
/// with left associativity for `+ - * /` and right associativity for `^`.
pub mod binary;

/// Factor and atom parsing.
///
/// Parses function calls (`log`, `sqrt`), literals, the variable,
/// parenthesized groups, and unary minus.
pub mod unary;

/// Helpers shared by the parsing functions.
pub mod utils;
