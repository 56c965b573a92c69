//! A representation of arithmetic expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](eqsat_parser::parser::ast::Expr) type from `eqsat_parser` remembers where every
//! node came from in the source code, and keeps parenthesized groups as their own nodes. That is
//! convenient for reporting errors, but gets in the way of rewriting. This module defines a
//! separate [`Expr`] that only stores the structure of the expression: integers, variables, and
//! binary operations with exactly two children.
//!
//! Conversion from the parser AST is lossless with respect to structure. Spans are dropped, and
//! parentheses disappear because they are already encoded in the shape of the tree.
//!
//! ```
//! use eqsat_compute::expr::Expr;
//! use eqsat_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("(x + y) * 2").unwrap();
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//!
//! let expr = Expr::from(ast_expr);
//! assert_eq!(expr, (Expr::var("x") + Expr::var("y")) * Expr::num(2));
//! assert_eq!(expr.to_string(), "((x + y) * 2)");
//! ```
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **structural equality**:
//! two expressions are equal if they have the same shape, the same operators at every binary
//! node, and the same values / names at every leaf. `x + y` and `y + x` are **not** equal.

mod iter;

use eqsat_parser::parser::ast::{expr::Expr as AstExpr, literal::Literal};
use iter::ExprIter;
use std::{fmt, ops::{Add, Mul}};

pub use eqsat_parser::parser::token::op::BinOpKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arithmetic expression.
///
/// The tree is strictly a tree: every [`Expr::Binary`] exclusively owns its two children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// An integer, such as `42`.
    Number(i64),

    /// A variable, such as `x`.
    Variable(String),

    /// A binary operation, such as `x + 1`.
    Binary {
        /// The operation to perform.
        op: BinOpKind,

        /// The left-hand side of the operation.
        lhs: Box<Expr>,

        /// The right-hand side of the operation.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Creates an integer leaf.
    pub fn num(value: i64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable leaf.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operation node.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Returns the integer value of the expression, if it is an [`Expr::Number`].
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is the integer `value`.
    pub fn is_number(&self, value: i64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    ///
    /// The iterator is driven by an explicit stack, so arbitrarily deep trees can be traversed
    /// without recursion.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl From<&AstExpr> for Expr {
    fn from(expr: &AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::Number(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Variable(sym.name.clone()),
            AstExpr::Paren(paren) => Self::from(paren.innermost()),
            AstExpr::Binary(binary) => Self::binary(
                binary.op.kind,
                Self::from(&*binary.lhs),
                Self::from(&*binary.rhs),
            ),
        }
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        Self::from(&expr)
    }
}

/// Formats the expression fully parenthesized: every binary operation is wrapped in parentheses,
/// leaves are written as-is.
///
/// For any expression containing only non-negative integers and alphabetic variable names, the
/// output parses back into a structurally equal expression.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

/// Builds the expression `self + rhs`.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        Expr::binary(BinOpKind::Add, self, rhs)
    }
}

/// Builds the expression `self * rhs`.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Self::Output {
        Expr::binary(BinOpKind::Mul, self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use eqsat_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().try_parse_full::<AstExpr>().unwrap().into()
    }

    #[test]
    fn convert_leaves() {
        assert_eq!(parse("7"), Expr::num(7));
        assert_eq!(parse("abc"), Expr::var("abc"));
    }

    #[test]
    fn convert_drops_parens() {
        assert_eq!(parse("((x))"), Expr::var("x"));
        assert_eq!(parse("a * (b + c)"), Expr::var("a") * (Expr::var("b") + Expr::var("c")));
    }

    #[test]
    fn convert_left_fold() {
        assert_eq!(parse("a + b + c"), (Expr::var("a") + Expr::var("b")) + Expr::var("c"));
        assert_eq!(parse("a * b * c"), (Expr::var("a") * Expr::var("b")) * Expr::var("c"));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(parse("x + y"), parse("(x) + (y)"));
        assert_ne!(parse("x + y"), parse("y + x"));
        assert_ne!(parse("x + y"), parse("x * y"));
        assert_ne!(parse("x"), parse("xx"));
        assert_ne!(parse("1"), parse("x"));
    }

    #[test]
    fn display_fully_parenthesized() {
        assert_eq!(parse("2 + 3").to_string(), "(2 + 3)");
        assert_eq!(parse("x").to_string(), "x");
        assert_eq!(parse("1 + 2 * x + y").to_string(), "((1 + (2 * x)) + y)");
    }

    #[test]
    fn display_round_trip() {
        for source in ["a * (b + c)", "1 + 2 + 3", "(x * 0) + (y * (1 + z))", "42"] {
            let expr = parse(source);
            assert_eq!(parse(&expr.to_string()), expr);
        }
    }

    #[test]
    fn post_order() {
        let expr = parse("a * (b + c)");
        let visited = expr.post_order_iter()
            .map(|expr| match expr {
                Expr::Number(value) => value.to_string(),
                Expr::Variable(name) => name.clone(),
                Expr::Binary { op, .. } => op.to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(visited, ["a", "b", "c", "+", "*"]);
    }
}
