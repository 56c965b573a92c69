//! Algebraic rewriting of arithmetic expressions.
//!
//! # Expression representation
//!
//! Expressions in this crate are represented as a tree of [`Expr`] nodes: integers, variables,
//! and binary additions / multiplications. If you have an
//! [`eqsat_parser::parser::ast::Expr`], you can convert it to an [`Expr`] using the [`From`]
//! trait. See the [`mod@expr`] module for more information.
//!
//! # Simplification
//!
//! Simplification is done by [`saturate`], which applies the rewrite rules in [`rewrite::rules`]
//! to the expression in multiple passes, until a pass no longer changes the expression. The rules
//! cover constant folding, multiplication by zero, the additive and multiplicative identities,
//! and distributing multiplication over addition.
//!
//! ```
//! use eqsat_compute::{cost, expr::Expr, saturate};
//! use eqsat_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("a * 0 + b").unwrap();
//! let expr = Expr::from(parser.try_parse_full::<AstExpr>().unwrap());
//! let result = saturate(&expr);
//!
//! assert_eq!(result.expr, Expr::var("b"));
//! assert_eq!((cost(&expr), cost(&result.expr)), (5, 1));
//! ```
//!
//! # Cost
//!
//! The [`cost()`] of an expression is the number of nodes in its tree. It is used to report how
//! much simpler the saturated expression is compared to the original.

pub mod cost;
pub mod expr;
pub mod rewrite;
pub mod saturate;
pub mod step_collector;

pub use cost::cost;
pub use expr::Expr;
pub use rewrite::{rewrite, rewrite_with_steps, step::Step};
pub use saturate::{
    saturate,
    saturate_with,
    saturate_with_steps,
    Saturation,
    SaturationOptions,
    SaturationOptionsBuilder,
    Status,
};
pub use step_collector::StepCollector;
