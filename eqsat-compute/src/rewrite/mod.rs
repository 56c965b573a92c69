//! A single bottom-up rewrite pass.
//!
//! [`rewrite`] visits every node of an expression, children before parents. Once both children of
//! a binary node have been rewritten, the rebuilt node is tested against the rules in
//! [`rules::all`], and the first rule that matches replaces the node. Testing a node only after
//! its children means that in `x * (1 * y)`, the inner `1 * y` has already become `y` by the
//! time the outer multiplication is examined.
//!
//! A pass never modifies its input; it always returns a freshly built expression.
//!
//! ```
//! use eqsat_compute::{expr::Expr, rewrite::rewrite};
//!
//! let expr = Expr::var("x") * (Expr::num(1) * Expr::var("y"));
//! assert_eq!(rewrite(&expr), Expr::var("x") * Expr::var("y"));
//! ```

pub mod rules;
pub mod step;

use crate::{expr::Expr, step_collector::StepCollector};
use log::trace;
use step::Step;

/// Applies one bottom-up pass of the rewrite rules to the expression.
pub fn rewrite(expr: &Expr) -> Expr {
    rewrite_with_steps(expr, &mut ())
}

/// Applies one bottom-up pass of the rewrite rules to the expression. Every rule that fires is
/// reported to the step collector, in the order the rules fired.
pub fn rewrite_with_steps(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => expr.clone(),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = rewrite_with_steps(lhs, step_collector);
            let rhs = rewrite_with_steps(rhs, step_collector);
            let node = Expr::binary(*op, lhs, rhs);

            match rules::all(&node, step_collector) {
                Some(rewritten) => {
                    trace!("{} => {}", node, rewritten);
                    rewritten
                },
                None => node,
            }
        },
    }
}
