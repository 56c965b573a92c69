//! Implementation of the rewrite rules.
//!
//! Each rule in this module is a function that takes the expression to rewrite as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given and its direct children; the
//! [`rewrite`](super::rewrite) pass is responsible for visiting every node.

pub mod add;
pub mod distribute;
pub mod fold;
pub mod multiply;

use crate::{expr::{BinOpKind, Expr}, step_collector::StepCollector};
use super::step::Step;

/// If the expression is an addition, calls the given transformation function with the left and
/// right-hand-side of the addition.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Binary { op: BinOpKind::Add, lhs, rhs } => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a multiplication, calls the given transformation function with the left
/// and right-hand-side of the multiplication.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Binary { op: BinOpKind::Mul, lhs, rhs } => f(lhs, rhs),
        _ => None,
    }
}

/// Applies the first rule that matches, trying the rules in this order:
///
/// 1. constant folding
/// 2. multiplication by zero
/// 3. addition of zero / multiplication by one
/// 4. the distributive property
///
/// The addition and multiplication rules never match the same node, so trying all multiplication
/// rules before the addition rules keeps this order. At most one rule is applied.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| distribute::all(expr, step_collector))
}
