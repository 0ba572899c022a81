/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST bottom-up with `x` bound to a real or complex
/// number, promoting to complex where the real result is undefined (the
/// square root or logarithm of a negative number, a negative base with a
/// fractional exponent).
///
/// # Responsibilities
/// - Evaluates every node kind of the AST.
/// - Normalizes complex results with a zero imaginary part back to reals.
/// - Reports division by zero and non-finite results with source positions.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces a stream of tokens: numbers, the
/// variable, operators, parentheses and the function names `log` and `sqrt`.
/// This is the first stage of validation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, lexeme and byte offset.
/// - Collects every invalid character and invalid variable in one pass.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over a peekable token iterator,
/// one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Reports the first grammar mismatch with the offending lexeme.
/// - Combines lexing and parsing into a single validation result.
pub mod parser;
/// The value module defines the numeric types produced by evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum (real or complex).
/// - Implements complex arithmetic, powers, roots and logarithms.
/// - Provides a total order on complex numbers for sorting roots.
pub mod value;
