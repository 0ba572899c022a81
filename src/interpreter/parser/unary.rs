use std::iter::Peekable;

use crate::{
    ast::{Expr, Function, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a factor: a function call or a power.
///
/// Grammar:
/// ```text
///     factor := power
///             | "log" "(" expression ")"
///             | "sqrt" "(" expression ")"
/// ```
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::Log) => parse_function_call(tokens, Function::Log),
        Some(TokenKind::Sqrt) => parse_function_call(tokens, Function::Sqrt),
        _ => parse_exponent(tokens),
    }
}

/// Parses `name "(" expression ")"` once the caller has seen the name.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, function: Function) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let position = tokens.next()
                         .ok_or(SyntaxError::UnexpectedEndOfInput)?
                         .position;
    expect(tokens, TokenKind::LParen)?;
    let argument = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(Expr::FunctionCall { function,
                            argument: Box::new(argument),
                            position })
}

/// Parses an atom.
///
/// Unary minus is right-associative and takes only an atom, so `--x` is
/// `-(-x)` while `-log(x)` is rejected at `log`.
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | "x"
///           | "(" expression ")"
///           | "-" atom
/// ```
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the next token cannot start an atom,
/// - a group is not closed,
/// - the input ends.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next().ok_or(SyntaxError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Number => parse_literal(token),
        TokenKind::Variable => Ok(Expr::Variable { position: token.position }),
        TokenKind::LParen => {
            let inner = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(inner)
        },
        TokenKind::Minus => {
            let operand = parse_atom(tokens)?;
            Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                               expr:     Box::new(operand),
                               position: token.position, })
        },
        _ => Err(unexpected(token)),
    }
}

/// Parses a numeric literal from its lexeme.
fn parse_literal(token: &Token) -> ParseResult<Expr> {
    token.lexeme
         .parse::<f64>()
         .map(|value| Expr::Literal { value,
                                      position: token.position })
         .map_err(|_| unexpected(token))
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr, Function, UnaryOperator},
        interpreter::{lexer::tokenize, parser::core::parse_tokens},
    };

    fn parse(source: &str) -> Expr {
        parse_tokens(&tokenize(source).tokens).unwrap()
    }

    fn parse_err(source: &str) -> String {
        parse_tokens(&tokenize(source).tokens).unwrap_err().to_string()
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse("2^3^2").to_string(), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn unary_minus_binds_tighter_than_power() {
        assert_eq!(parse("-x^2").to_string(), "((-x) ^ 2)");
        assert_eq!(parse("2^-x").to_string(), "(2 ^ (-x))");
        assert_eq!(parse("--x").to_string(), "(-(-x))");
    }

    #[test]
    fn products_bind_tighter_than_sums() {
        assert_eq!(parse("1 + 2 * x - 3 / 4").to_string(),
                   "((1 + (2 * x)) - (3 / 4))");
    }

    #[test]
    fn builds_function_calls() {
        match parse("sqrt(x + 1)") {
            Expr::FunctionCall { function: Function::Sqrt,
                                 argument,
                                 position: 0, } => {
                assert!(matches!(*argument, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
            },
            other => panic!("unexpected tree {other:?}"),
        }
    }

    #[test]
    fn records_operator_positions() {
        match parse("-x") {
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            position,
                            .. } => assert_eq!(position, 0),
            other => panic!("unexpected tree {other:?}"),
        }
        assert_eq!(parse("x * 2").position(), 2);
    }

    #[test]
    fn rejects_functions_where_atoms_are_required() {
        assert_eq!(parse_err("-log(x)"), "Syntax error at 'log'");
        assert_eq!(parse_err("log(x)^2"), "Syntax error at '^'");
        assert_eq!(parse_err("2^sqrt(x)"), "Syntax error at 'sqrt'");
    }

    #[test]
    fn reports_first_mismatch_only() {
        assert_eq!(parse_err("log x"), "Syntax error at 'x'");
        assert_eq!(parse_err("()"), "Syntax error at ')'");
        assert_eq!(parse_err("x ) )"), "Syntax error at ')'");
        assert_eq!(parse_err("x +"), "Syntax error at end of expression");
        assert_eq!(parse_err(""), "Syntax error at end of expression");
        assert_eq!(parse_err("sqrt(x"), "Syntax error at end of expression");
    }
}
