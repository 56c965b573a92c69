pub mod op;

use crate::{
    parser::{error::{Error, UnexpectedToken}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to use and request token kinds as a type, which is
/// much more ergonomic than using a string.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name<'source> {
                pub(crate) lexeme: &'source str,
                pub(crate) span: Range<usize>,
            }

            impl<'source> Parse<'source> for $name<'source> {
                fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme,
                            span: token.span,
                        })
                    } else {
                        Err(Error::new(vec![token.span], UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    OpenParen
    CloseParen
    Int
    Name
);
