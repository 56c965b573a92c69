use ariadne::Fmt;
use eqsat_attrs::ErrorKind;
use eqsat_error::EXPR;
use crate::{parser::MAX_DEPTH, tokenizer::TokenKind};

pub use eqsat_error::Error;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// A number, identifier, or parenthesized expression was expected, but another token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a number, identifier, or parenthesized expression",
    labels = [format!("found {:?} here", found)],
    help = format!("operators must be surrounded by {} on both sides", "operands".fg(EXPR)),
)]
pub struct ExpectedFactor {
    /// The token that was found.
    pub found: TokenKind,
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An integer literal is too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer literal is too large",
    labels = ["this number does not fit in a 64-bit signed integer"],
    help = format!("the largest supported integer is {}", i64::MAX.fg(EXPR)),
)]
pub struct NumberTooLarge;

/// The expression is nested too deeply to be simplified safely.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this {} is deeper than {} levels", "expression".fg(EXPR), MAX_DEPTH)],
    help = "split long sums / products or remove redundant parentheses",
)]
pub struct ExpressionTooDeep;
