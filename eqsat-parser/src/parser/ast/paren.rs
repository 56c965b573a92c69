use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        error::{Error, ExpressionTooDeep, UnclosedParenthesis, UnexpectedEof, UnexpectedToken},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
        Precedence,
        MAX_DEPTH,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression, such as `(1 + x)`.
///
/// Parentheses only influence the shape of the tree during parsing; they are kept in the AST so
/// that spans and diagnostics can refer to them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this parenthesized expression was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression in the parenthesized expression.
    pub fn innermost(&self) -> &Expr {
        self.expr.innermost()
    }

    /// Parses a parenthesized expression, also returning the depth of the parsed tree. The
    /// parentheses themselves add one level.
    pub(crate) fn parse_with_depth(input: &mut Parser) -> Result<(Self, usize), Error> {
        let open_paren = input.try_parse::<OpenParen>()?;

        // every open parenthesis recurses, so refuse to go deeper than any valid tree could be
        if input.nesting + 1 >= MAX_DEPTH {
            return Err(Error::new(vec![open_paren.span], ExpressionTooDeep));
        }

        input.nesting += 1;
        let result = Self::parse_inner(input, open_paren);
        input.nesting -= 1;
        result
    }

    /// Parses the rest of a parenthesized expression after its opening parenthesis.
    fn parse_inner(input: &mut Parser, open_paren: OpenParen) -> Result<(Self, usize), Error> {
        let unclosed = || Error::new(vec![open_paren.span.clone()], UnclosedParenthesis { opening: true });

        // running out of input inside the parentheses means the parenthesis was never closed
        let (expr, depth) = Binary::parse_expr(input, Precedence::Term)
            .map_err(|err| if err.is::<UnexpectedEof>() { unclosed() } else { err })?;

        match input.current_token().map(|token| (token.kind, token.span.clone())) {
            Some((TokenKind::CloseParen, _)) => {
                let close_paren = input.try_parse::<CloseParen>()?;
                let span = open_paren.span.start..close_paren.span.end;
                if depth + 1 > MAX_DEPTH {
                    return Err(Error::new(vec![span], ExpressionTooDeep));
                }

                Ok((Self { expr: Box::new(expr), span }, depth + 1))
            },
            Some((found, span)) => Err(Error::new(vec![span], UnexpectedToken {
                expected: &[TokenKind::Add, TokenKind::Mul, TokenKind::CloseParen],
                found,
            })),
            None => Err(unclosed()),
        }
    }
}

impl<'source> Parse<'source> for Paren {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        Self::parse_with_depth(input).map(|(paren, _)| paren)
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
