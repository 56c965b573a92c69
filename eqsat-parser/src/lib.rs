//! Lexer and parser for arithmetic expressions built from integers, identifiers, `+`, `*` and
//! parentheses.
//!
//! ```
//! use eqsat_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2 * (x + 3)").unwrap();
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2 * (x + 3)");
//! ```

pub mod parser;
pub mod tokenizer;
