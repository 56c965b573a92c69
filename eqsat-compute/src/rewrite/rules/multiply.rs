//! Simplification rules for expressions involving multiplication.

use crate::{
    expr::Expr,
    rewrite::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
///
/// The other operand is discarded without being inspected.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_number(0) || rhs.is_number(0) {
            Some(Expr::Number(0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if rhs.is_number(1) {
            Some(lhs.clone())
        } else if lhs.is_number(1) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_either_side() {
        let big = Expr::var("a") + Expr::var("b") * Expr::var("c");
        assert_eq!(multiply_zero(&(big.clone() * Expr::num(0)), &mut ()), Some(Expr::num(0)));
        assert_eq!(multiply_zero(&(Expr::num(0) * big), &mut ()), Some(Expr::num(0)));
    }

    #[test]
    fn zero_only_for_multiplication() {
        assert_eq!(multiply_zero(&(Expr::var("x") + Expr::num(0)), &mut ()), None);
    }

    #[test]
    fn one_either_side() {
        let mut steps = Vec::new();
        assert_eq!(all(&(Expr::var("x") * Expr::num(1)), &mut steps), Some(Expr::var("x")));
        assert_eq!(all(&(Expr::num(1) * Expr::var("x")), &mut steps), Some(Expr::var("x")));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::MultiplyOne]);
    }

    #[test]
    fn one_only_for_multiplication() {
        assert_eq!(multiply_one(&(Expr::var("x") + Expr::num(1)), &mut ()), None);
    }
}
