pub mod error;
pub mod token;

use eqsat_error::Error;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, including
/// whitespace. This allows the parser to backtrack in case of an error.
///
/// Returns an [`error::UnexpectedCharacter`] error pointing at the first character that does not
/// belong to any token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(TokenKind::Symbol) | Err(()) => {
                let span = lexer.span();
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(Error::new(vec![span], error::UnexpectedCharacter { character }));
            },
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "3\tx*(yz +\n 042)",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Name, "x"),
                (TokenKind::Mul, "*"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "yz"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, "\n "),
                (TokenKind::Int, "042"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn digits_then_letters() {
        compare_tokens(
            "2x",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn unknown_character_is_symbol() {
        compare_tokens(
            "a-b",
            [
                (TokenKind::Name, "a"),
                (TokenKind::Symbol, "-"),
                (TokenKind::Name, "b"),
            ],
        );
    }

    #[test]
    fn complete_spans() {
        let tokens = tokenize_complete("ab * 12").unwrap();
        assert_eq!(&*tokens, &[
            Token { span: 0..2, kind: TokenKind::Name, lexeme: "ab" },
            Token { span: 2..3, kind: TokenKind::Whitespace, lexeme: " " },
            Token { span: 3..4, kind: TokenKind::Mul, lexeme: "*" },
            Token { span: 4..5, kind: TokenKind::Whitespace, lexeme: " " },
            Token { span: 5..7, kind: TokenKind::Int, lexeme: "12" },
        ]);
    }

    #[test]
    fn complete_empty() {
        assert!(tokenize_complete("").unwrap().is_empty());
    }

    #[test]
    fn complete_rejects_unknown_character() {
        let err = tokenize_complete("x / 2").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert_eq!(
            err.downcast_ref::<error::UnexpectedCharacter>(),
            Some(&error::UnexpectedCharacter { character: '/' }),
        );
    }

    #[test]
    fn complete_rejects_multibyte_character() {
        let err = tokenize_complete("x + é").unwrap_err();
        assert_eq!(err.spans, vec![4..6]);
        assert_eq!(
            err.downcast_ref::<error::UnexpectedCharacter>(),
            Some(&error::UnexpectedCharacter { character: 'é' }),
        );
    }
}
