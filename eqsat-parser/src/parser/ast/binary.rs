use crate::parser::{
    ast::expr::{Expr, Primary},
    error::{Error, ExpressionTooDeep, NonFatal},
    token::op::BinOp,
    Parser,
    Precedence,
    MAX_DEPTH,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a chain of operands joined by operators of the given precedence, such as
    /// `a * b * c` at [`Precedence::Factor`]. Returns the parsed expression along with its depth.
    ///
    /// Each operand is parsed at the next-higher precedence level, or as a [`Primary`] expression
    /// if there is none. The chain folds to the left, so `a + b + c` becomes `(a + b) + c`.
    ///
    /// Parsing stops at the first operator that does not belong to this precedence level; that
    /// operator is left in the stream for a lower level to pick up. For example, while parsing
    /// the term `2 * x` in `2 * x + 1`, the `+` is not consumed.
    pub(crate) fn parse_expr(
        input: &mut Parser,
        precedence: Precedence,
    ) -> Result<(Expr, usize), Error> {
        let (mut lhs, mut depth) = Self::parse_operand(input, precedence)?;

        while let Ok(op) = input.try_parse_then::<BinOp, _>(|op, input| {
            if op.precedence() == precedence {
                Ok(())
            } else {
                Err(input.error(NonFatal))
            }
        }) {
            let (rhs, rhs_depth) = Self::parse_operand(input, precedence)?;
            let span = lhs.span().start..rhs.span().end;

            // stop before the tree gets deep enough to overflow the stack in later stages
            depth = depth.max(rhs_depth) + 1;
            if depth > MAX_DEPTH {
                return Err(Error::new(vec![span], ExpressionTooDeep));
            }

            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok((lhs, depth))
    }

    /// Parses one operand of an operation at the given precedence level, along with its depth.
    fn parse_operand(input: &mut Parser, precedence: Precedence) -> Result<(Expr, usize), Error> {
        match precedence.higher() {
            Some(higher) => Self::parse_expr(input, higher),
            None => {
                let (primary, depth) = Primary::parse_with_depth(input)?;
                Ok((primary.into(), depth))
            },
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op.kind, self.rhs)
    }
}
