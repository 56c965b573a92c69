//! Simplification rules for expressions involving addition.

use crate::{
    expr::Expr,
    rewrite::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if rhs.is_number(0) {
            Some(lhs.clone())
        } else if lhs.is_number(0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
}
