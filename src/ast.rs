use std::fmt::Display;

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation, `-a`.
    Negate,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// Built-in functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Natural logarithm.
    Log,
    /// Principal square root.
    Sqrt,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::Sqrt => write!(f, "sqrt"),
        }
    }
}

/// An abstract syntax tree (AST) node of a single-variable expression.
///
/// The parser builds the tree while validating; the evaluator and the solver
/// both walk it. Each node is exclusively owned by its parent and records the
/// byte offset of the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// The free variable `x`.
    Variable {
        /// Byte offset in the source.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// `log(...)` or `sqrt(...)`.
    FunctionCall {
        /// The function being called.
        function: Function,
        /// Its single argument.
        argument: Box<Self>,
        /// Byte offset of the function name in the source.
        position: usize,
    },
}

impl Expr {
    /// Builds `left op right`, positioned at `left`.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        let position = left.position();
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Gets the source offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use function_solver::ast::Expr;
    ///
    /// let expr = Expr::Variable { position: 5 };
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Returns `true` if `x` occurs anywhere in the tree.
    #[must_use]
    pub fn contains_variable(&self) -> bool {
        match self {
            Self::Literal { .. } => false,
            Self::Variable { .. } => true,
            Self::UnaryOp { expr, .. } => expr.contains_variable(),
            Self::BinaryOp { left, right, .. } => {
                left.contains_variable() || right.contains_variable()
            },
            Self::FunctionCall { argument, .. } => argument.contains_variable(),
        }
    }
}

/// Renders the tree fully parenthesized, so the output parses back to an equal
/// tree (up to positions).
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { .. } => write!(f, "x"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => write!(f, "(-{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { function, argument, .. } => write!(f, "{function}({argument})"),
        }
    }
}
