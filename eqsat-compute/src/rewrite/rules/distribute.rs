//! Simplification rules related to the distributive property.

use crate::{
    expr::{BinOpKind, Expr},
    rewrite::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `a*(b+c) = a*b + a*c`
///
/// Only a sum on the **right** of the multiplication is distributed over; `(a+b)*c` is left
/// as-is.
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let Expr::Binary { op: BinOpKind::Add, lhs: b, rhs: c } = rhs {
            Some(lhs.clone() * (**b).clone() + lhs.clone() * (**c).clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// Applies all distribution rules.
///
/// The distributive property may or may not reduce the complexity of the expression, since it can
/// introduce additional operations. However, it may be necessary for future rules to apply.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn distribute_right_sum() {
        let mut steps = Vec::new();
        let expr = var("a") * (var("b") + var("c"));
        assert_eq!(
            distributive_property(&expr, &mut steps),
            Some(var("a") * var("b") + var("a") * var("c")),
        );
        assert_eq!(steps, vec![Step::DistributiveProperty]);
    }

    #[test]
    fn left_sum_is_not_distributed() {
        let expr = (var("a") + var("b")) * var("c");
        assert_eq!(distributive_property(&expr, &mut ()), None);
    }

    #[test]
    fn both_sums_distribute_left_operand_whole() {
        let expr = (var("a") + var("b")) * (var("c") + var("d"));
        let ab = var("a") + var("b");
        assert_eq!(
            distributive_property(&expr, &mut ()),
            Some(ab.clone() * var("c") + ab * var("d")),
        );
    }

    #[test]
    fn sum_of_products_is_not_distributed() {
        let expr = var("a") + var("b") * var("c");
        assert_eq!(distributive_property(&expr, &mut ()), None);
    }
}
