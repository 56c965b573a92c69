use ariadne::Fmt;
use eqsat_attrs::ErrorKind;
use eqsat_error::EXPR;

/// A character that is not part of any token was found in the source code.
///
/// The position of the character is the start of the error's span.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character),
    labels = ["I don't know what to do with this character"],
    help = format!(
        "expressions may only contain {}, {}, `+`, `*` and parentheses",
        "integers".fg(EXPR),
        "identifiers".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The offending character.
    pub character: char,
}
