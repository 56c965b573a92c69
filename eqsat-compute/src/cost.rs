//! The cost model used to compare how complex two expressions are.

use crate::expr::Expr;

/// Returns the cost of the expression, which is the number of nodes in the expression tree.
///
/// - `cost(number) = 1`
/// - `cost(variable) = 1`
/// - `cost(lhs op rhs) = 1 + cost(lhs) + cost(rhs)`
///
/// Every expression has a cost of at least 1.
pub fn cost(expr: &Expr) -> usize {
    expr.post_order_iter().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves() {
        assert_eq!(cost(&Expr::num(5)), 1);
        assert_eq!(cost(&Expr::var("x")), 1);
    }

    #[test]
    fn binary() {
        assert_eq!(cost(&(Expr::var("x") + Expr::num(0))), 3);
        assert_eq!(cost(&(Expr::var("a") * Expr::num(0) + Expr::var("b"))), 5);
    }

    #[test]
    fn matches_recursive_definition() {
        fn recursive(expr: &Expr) -> usize {
            match expr {
                Expr::Number(_) | Expr::Variable(_) => 1,
                Expr::Binary { lhs, rhs, .. } => 1 + recursive(lhs) + recursive(rhs),
            }
        }

        let expr = (Expr::num(1) * Expr::var("x")) + (Expr::num(0) * (Expr::var("y") + Expr::num(2)));
        assert_eq!(cost(&expr), recursive(&expr));
        assert_eq!(cost(&expr), 9);
    }

    #[test]
    fn deep_tree() {
        // a left-leaning chain `((x + x) + x) + ...` deep enough to stress recursion
        let expr = (0..100_000).fold(Expr::var("x"), |acc, _| acc + Expr::var("x"));
        assert_eq!(cost(&expr), 200_001);

        // dropping a deep tree recurses once per level, so take it apart by hand
        let mut expr = expr;
        while let Expr::Binary { lhs, .. } = expr {
            expr = *lhs;
        }
    }
}
