use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, paren::Paren},
        error::{Error, ExpectedFactor, UnexpectedEof},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general expression.
///
/// An expression is a sum of terms, each term is a product of factors, and each factor is an
/// integer, a variable, or another expression in parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }
}

impl<'source> Parse<'source> for Expr {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        Binary::parse_expr(input, Precedence::Term).map(|(expr, _)| expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression, the operand of a multiplication.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
        }
    }

    /// Parses a primary expression, also returning the depth of the parsed tree. A literal has a
    /// depth of 1.
    pub(crate) fn parse_with_depth(input: &mut Parser) -> Result<(Self, usize), Error> {
        let Some(kind) = input.current_token().map(|token| token.kind) else {
            return Err(input.error(UnexpectedEof));
        };

        match kind {
            TokenKind::Int | TokenKind::Name => {
                input.try_parse::<Literal>().map(|literal| (Self::Literal(literal), 1))
            },
            TokenKind::OpenParen => {
                Paren::parse_with_depth(input).map(|(paren, depth)| (Self::Paren(paren), depth))
            },
            found => Err(input.error(ExpectedFactor { found })),
        }
    }
}

impl<'source> Parse<'source> for Primary {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        Self::parse_with_depth(input).map(|(primary, _)| primary)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
        }
    }
}
