//! The abstract syntax tree produced by the parser. Every node remembers the region of the source
//! code it was parsed from.

pub mod binary;
pub mod expr;
pub mod literal;
pub mod paren;

pub use binary::Binary;
pub use expr::{Expr, Primary};
pub use literal::{Literal, LitNum, LitSym};
pub use paren::Paren;
