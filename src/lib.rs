//! # function-solver
//!
//! function-solver validates, evaluates and solves single-variable
//! expressions written in a small infix language: numbers, the variable `x`,
//! `+ - * / ^`, parentheses, unary minus, `log(...)` and `sqrt(...)`.
//! Equations `f1(x) = f2(x)` that reduce to a ratio of polynomials are solved
//! for all real and complex roots, and the roots can be turned into a
//! plotting window.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and function types
/// that represent an expression as a tree. The AST is built by the parser and
/// walked by both the evaluator and the solver.
///
/// # Responsibilities
/// - Defines one node type per construct of the grammar.
/// - Records the source offset of every node for error reporting.
/// - Renders trees back to text that parses to the same tree.
pub mod ast;
/// Provides unified error types for lexing, parsing, evaluation and solving.
///
/// Lexical and syntax errors are collected into a `Validation` as messages;
/// evaluation and solver errors are returned as `Err`. The text-level entry
/// points wrap both in `ExpressionError`.
pub mod error;
/// Lexing, parsing and evaluation of expressions.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// value types, and exposes the validation entry point.
pub mod interpreter;
/// Derives a plotting window from a set of solutions.
pub mod plot;
/// Solves `f1(x) = f2(x)` for `x`.
///
/// The equation is reduced to a ratio of polynomials whose numerator is
/// solved in closed form up to degree two and iteratively beyond. Equations
/// outside that class are scanned numerically for real roots.
pub mod solver;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, `usize`, and `f64` without silent
///   data loss.
/// - Compare magnitudes against scaled tolerances.
pub mod util;

pub use interpreter::{
    lexer::{Token, TokenKind, Tokenization, tokenize},
    parser::core::{Validation, parse, validate},
    value::{complex::ComplexNumber, core::Value},
};
pub use plot::{PlotRange, PlotWindow, find_solution_center, get_plot_range};
pub use solver::core::{Intersection, evaluate, intersections, solve};
