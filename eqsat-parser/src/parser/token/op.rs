//! Structs to help parse binary operators.

use crate::{
    parser::{
        error::{Error, UnexpectedToken},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Mul,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add => Precedence::Term,
            Self::Mul => Precedence::Factor,
        }
    }

    /// Returns the symbol used to write this operation in source code.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl<'source> Parse<'source> for BinOp {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Add => BinOpKind::Add,
            TokenKind::Mul => BinOpKind::Mul,
            _ => return Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Add, TokenKind::Mul],
                found: token.kind,
            })),
        };

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}
