pub mod ast;
pub mod error;
pub mod token;

use eqsat_error::ErrorKind;
use error::{Error, ExpectedEof, UnclosedParenthesis};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The maximum depth of a parsed expression tree, counting every literal, parenthesized group and
/// binary operation on the longest path from the root to a leaf.
///
/// Every stage after parsing walks the tree recursively, so deeper trees are rejected with an
/// [`error::ExpressionTooDeep`] error instead. A chain of `n` operands joined by the same operator
/// has a depth of `n`.
pub const MAX_DEPTH: usize = 256;

/// A high-level parser for arithmetic expressions. This is the type to use to parse an arbitrary
/// piece of source code into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The non-whitespace tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The byte length of the source code.
    source_len: usize,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of parentheses that are currently open.
    nesting: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    ///
    /// The source is tokenized eagerly. If it contains a character that is not part of any token,
    /// the tokenizer's error is returned and no parsing is attempted.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        let tokens = tokenize_complete(source)?
            .into_vec()
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect();

        Ok(Self {
            tokens,
            source_len: source.len(),
            cursor: 0,
            nesting: 0,
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(error::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse<'source>, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = |input: &mut Self| {
            let value = T::parse(input)?;
            predicate(&value, input)?;
            Ok(value)
        };

        match compute(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(UnclosedParenthesis { opening: false }))
            },
            Some(_) => Err(self.error(ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
///
/// Both binary operators are left-associative, so `a op b op c` is parsed as `(a op b) op c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`), which separates terms.
    Term,

    /// Precedence of multiplication (`*`), which separates factors.
    Factor,
}

impl Precedence {
    /// Returns the next-higher precedence level, or [`None`] if this is the highest level. The
    /// operands of an operation at this level are parsed at the returned level.
    pub fn higher(self) -> Option<Self> {
        match self {
            Self::Term => Some(Self::Factor),
            Self::Factor => None,
        }
    }
}
