//! Repeated rewriting to a fixed point.
//!
//! [`saturate`] applies [`rewrite`](crate::rewrite::rewrite) passes over and over until a pass
//! produces an expression structurally equal to the one it was given. That expression is a
//! **fixed point** of the rule set, and is returned as the result.
//!
//! The rule set is expected to reach a fixed point after a handful of passes, but there is no
//! proof that it always does: the distributive property can make an expression larger before
//! other rules shrink it again. The number of passes is therefore capped by
//! [`SaturationOptions::max_iterations`]. Hitting the cap is not an error; the last computed
//! expression is returned with [`Status::LimitExceeded`] so that the caller can decide whether to
//! trust it.
//!
//! ```
//! use eqsat_compute::{expr::Expr, saturate::{saturate, Status}};
//!
//! // `1*x + 0*y`
//! let expr = Expr::num(1) * Expr::var("x") + Expr::num(0) * Expr::var("y");
//! let result = saturate(&expr);
//! assert_eq!(result.expr, Expr::var("x"));
//! assert_eq!(result.status, Status::Converged);
//! ```

use crate::{
    cost::cost,
    expr::Expr,
    rewrite::{rewrite_with_steps, step::Step},
    step_collector::StepCollector,
};
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default maximum number of rewrite passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Options that control the saturation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaturationOptions {
    /// The maximum number of rewrite passes to run before giving up on reaching a fixed point.
    ///
    /// The default is [`DEFAULT_MAX_ITERATIONS`]. A value of `0` runs no passes at all.
    pub max_iterations: usize,
}

impl Default for SaturationOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Helper struct to build a [`SaturationOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaturationOptionsBuilder(SaturationOptions);

impl SaturationOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of rewrite passes. See [`SaturationOptions::max_iterations`] for
    /// more information.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Builds the [`SaturationOptions`] struct.
    pub fn build(self) -> SaturationOptions {
        self.0
    }
}

/// Whether the saturation loop reached a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The last pass produced an expression structurally equal to its input.
    Converged,

    /// The maximum number of passes was reached before a fixed point was found. The expression is
    /// still equivalent to the input, but it may not be fully simplified.
    LimitExceeded,
}

/// The result of saturating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Saturation {
    /// The last expression computed.
    pub expr: Expr,

    /// The number of rewrite passes that were run, including the final pass that confirmed the
    /// fixed point.
    pub iterations: usize,

    /// Whether a fixed point was reached.
    pub status: Status,
}

impl Saturation {
    /// Returns true if a fixed point was reached.
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Base implementation of the saturation loop.
fn inner_saturate(
    expr: &Expr,
    options: SaturationOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Saturation {
    let mut current = expr.clone();

    for iteration in 1..=options.max_iterations {
        let next = rewrite_with_steps(&current, step_collector);
        if next == current {
            debug!("fixed point after {} pass(es): {}", iteration, next);
            return Saturation {
                expr: next,
                iterations: iteration,
                status: Status::Converged,
            };
        }

        debug!(
            "pass {}: {} (cost {}) => {} (cost {})",
            iteration,
            current,
            cost(&current),
            next,
            cost(&next),
        );
        current = next;
    }

    warn!(
        "no fixed point after {} pass(es), returning last result: {}",
        options.max_iterations,
        current,
    );
    Saturation {
        expr: current,
        iterations: options.max_iterations,
        status: Status::LimitExceeded,
    }
}

/// Saturates the given expression using the default options.
pub fn saturate(expr: &Expr) -> Saturation {
    inner_saturate(expr, SaturationOptions::default(), &mut ())
}

/// Saturates the given expression using the given options.
pub fn saturate_with(expr: &Expr, options: SaturationOptions) -> Saturation {
    inner_saturate(expr, options, &mut ())
}

/// Saturates the given expression using the given options. The rewrite steps taken during every
/// pass will also be collected and returned, in the order they were applied. This is useful for
/// debugging, and also for displaying the steps taken to the user.
pub fn saturate_with_steps(expr: &Expr, options: SaturationOptions) -> (Saturation, Vec<Step>) {
    let mut steps = Vec::new();
    let saturation = inner_saturate(expr, options, &mut steps);
    (saturation, steps)
}

#[cfg(test)]
mod tests {
    use eqsat_parser::parser::{ast::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().try_parse_full::<AstExpr>().unwrap().into()
    }

    #[test_log::test]
    fn identity() {
        let result = saturate(&parse("x + 0"));
        assert_eq!(result.expr, Expr::var("x"));
        assert_eq!(result.iterations, 2);
        assert!(result.converged());
    }

    #[test_log::test]
    fn already_fixed_point() {
        let result = saturate(&parse("x * y"));
        assert_eq!(result.expr, parse("x * y"));
        assert_eq!(result.iterations, 1);
        assert_eq!(result.status, Status::Converged);
    }

    #[test_log::test]
    fn distribute_then_fold() {
        let options = SaturationOptions::default();
        let (result, steps) = saturate_with_steps(&parse("2 * (x + 3)"), options);
        assert_eq!(result.expr, parse("2 * x + 6"));
        assert_eq!(result.iterations, 3);
        assert_eq!(steps, vec![Step::DistributiveProperty, Step::ConstantFold]);
    }

    #[test_log::test]
    fn chained_identities() {
        let (result, steps) = saturate_with_steps(&parse("a + 0 + 0"), SaturationOptions::default());
        assert_eq!(result.expr, Expr::var("a"));
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test_log::test]
    fn distribute_over_nested_sums() {
        let result = saturate(&parse("a * (b + (c + 0))"));
        assert_eq!(result.expr, parse("a * b + a * c"));
        assert!(result.converged());
    }

    #[test_log::test]
    fn limit_exceeded_returns_last_result() {
        let options = SaturationOptionsBuilder::new()
            .max_iterations(1)
            .build();
        let result = saturate_with(&parse("2 * (x + 3)"), options);
        assert_eq!(result.expr, parse("2 * x + 2 * 3"));
        assert_eq!(result.iterations, 1);
        assert_eq!(result.status, Status::LimitExceeded);
    }

    #[test_log::test]
    fn zero_iterations() {
        let options = SaturationOptionsBuilder::new()
            .max_iterations(0)
            .build();
        let expr = parse("x + 0");
        let result = saturate_with(&expr, options);
        assert_eq!(result.expr, expr);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.status, Status::LimitExceeded);
    }

    #[test]
    fn default_options() {
        assert_eq!(SaturationOptionsBuilder::new().build().max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(SaturationOptions::default().max_iterations, 100);
    }

    #[test]
    fn input_is_not_modified() {
        let expr = parse("1 * x + 0 * y");
        let copy = expr.clone();
        let result = saturate(&expr);
        assert_eq!(expr, copy);
        assert_eq!(result.expr, Expr::var("x"));
    }
}
