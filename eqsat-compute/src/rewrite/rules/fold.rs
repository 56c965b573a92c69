//! Constant folding.

use crate::{
    expr::{BinOpKind, Expr},
    rewrite::step::Step,
    step_collector::StepCollector,
};

/// `2+3 = 5`
/// `2*3 = 6`
///
/// Arithmetic is checked; if the result does not fit in an `i64`, the rule does not apply and the
/// operation is left as-is.
pub fn constant_fold(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary { op, lhs, rhs } = expr else {
        return None;
    };
    let (a, b) = (lhs.as_number()?, rhs.as_number()?);
    let value = match op {
        BinOpKind::Add => a.checked_add(b)?,
        BinOpKind::Mul => a.checked_mul(b)?,
    };

    step_collector.push(Step::ConstantFold);
    Some(Expr::Number(value))
}

/// Applies all constant folding rules.
///
/// Constant folding always reduces the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    constant_fold(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fold_add() {
        let mut steps = Vec::new();
        assert_eq!(constant_fold(&(Expr::num(2) + Expr::num(3)), &mut steps), Some(Expr::num(5)));
        assert_eq!(steps, vec![Step::ConstantFold]);
    }

    #[test]
    fn fold_mul() {
        assert_eq!(constant_fold(&(Expr::num(5) * Expr::num(4)), &mut ()), Some(Expr::num(20)));
    }

    #[test]
    fn needs_two_numbers() {
        let mut steps = Vec::new();
        assert_eq!(constant_fold(&(Expr::num(2) + Expr::var("x")), &mut steps), None);
        assert_eq!(constant_fold(&Expr::num(2), &mut steps), None);
        assert!(steps.is_empty());
    }

    #[test]
    fn overflow_is_left_alone() {
        let mut steps = Vec::new();
        assert_eq!(constant_fold(&(Expr::num(i64::MAX) + Expr::num(1)), &mut steps), None);
        assert_eq!(constant_fold(&(Expr::num(i64::MAX) * Expr::num(2)), &mut steps), None);
        assert!(steps.is_empty());
    }
}
