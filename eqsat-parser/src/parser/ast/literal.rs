use crate::parser::{
    error::{Error, NumberTooLarge},
    token::{Int, Name},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the integer literal.
    pub value: i64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitNum {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let num = input.try_parse::<Int>()?;

        // the lexeme only contains ASCII digits, so overflow is the only way this can fail
        let value = num.lexeme
            .parse()
            .map_err(|_| Error::new(vec![num.span.clone()], NumberTooLarge))?;

        Ok(Self {
            value,
            span: num.span,
        })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitSym {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme.to_owned(),
            span: token.span,
        })
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Represents a literal value.
///
/// A literal is any value that is written directly into the source code: either an integer, such
/// as `42`, or a variable name, such as `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// An integer literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}

impl<'source> Parse<'source> for Literal {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        match input.try_parse::<LitNum>() {
            Ok(num) => return Ok(Literal::Number(num)),
            Err(err) if err.is::<NumberTooLarge>() => return Err(err),
            Err(_) => (),
        }

        input.try_parse::<LitSym>().map(Literal::Symbol)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
