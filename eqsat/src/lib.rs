//! Parse arithmetic expressions, simplify them to a fixed point, and compare their cost.
//!
//! This crate ties [`eqsat_parser`] and [`eqsat_compute`] together into the pipeline a front-end
//! needs:
//!
//! ```text
//! source --parse--> Expr --optimize--> Expr
//!                    |                  |
//!                  cost               cost
//! ```
//!
//! ```
//! let analysis = eqsat::analyze("2 * (3 + 4)").unwrap();
//! assert_eq!(eqsat::render(&analysis.original), "(2 * (3 + 4))");
//! assert_eq!(eqsat::render(&analysis.optimized), "14");
//! assert_eq!((analysis.cost_before, analysis.cost_after), (5, 1));
//! ```

mod error;

use eqsat_parser::parser::{ast::Expr as AstExpr, Parser};
use log::warn;

pub use error::Error;
pub use eqsat_parser::parser::MAX_DEPTH;
pub use eqsat_compute::{
    cost,
    expr::{BinOpKind, Expr},
    saturate::{Saturation, SaturationOptions, SaturationOptionsBuilder, Status},
    Step,
};

/// Parses the source code into an expression.
///
/// Returns [`Error::Lex`] if the source contains a character that is not part of any token, and
/// [`Error::Parse`] if the tokens do not form exactly one expression, or if that expression is
/// deeper than [`MAX_DEPTH`].
pub fn parse(source: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(source).map_err(Error::Lex)?;
    let ast = parser.try_parse_full::<AstExpr>().map_err(Error::Parse)?;
    Ok(Expr::from(ast))
}

/// Simplifies the expression by rewriting it until it reaches a fixed point, using the default
/// [`SaturationOptions`].
///
/// If no fixed point is reached within the iteration limit, a warning is logged and the last
/// computed expression is returned. Use [`saturate`] to find out whether that happened.
pub fn optimize(expr: &Expr) -> Expr {
    let saturation = saturate(expr, SaturationOptions::default());
    if !saturation.converged() {
        warn!("optimization stopped after {} passes without reaching a fixed point", saturation.iterations);
    }
    saturation.expr
}

/// Simplifies the expression by rewriting it until it reaches a fixed point or the iteration limit
/// in `options` is hit, reporting which of the two happened.
pub fn saturate(expr: &Expr, options: SaturationOptions) -> Saturation {
    eqsat_compute::saturate_with(expr, options)
}

/// Renders the expression fully parenthesized, such as `((2 * x) + 6)`. Leaves are rendered
/// without parentheses.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Returns true if both expressions are structurally equal.
pub fn equals(a: &Expr, b: &Expr) -> bool {
    a == b
}

/// The result of running the full pipeline on a piece of source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The parsed expression.
    pub original: Expr,

    /// The simplified expression.
    pub optimized: Expr,

    /// The cost of [`Analysis::original`].
    pub cost_before: usize,

    /// The cost of [`Analysis::optimized`].
    pub cost_after: usize,

    /// The number of rewrite passes that were run.
    pub iterations: usize,

    /// Whether a fixed point was reached.
    pub status: Status,

    /// The rewrite steps applied, in order.
    pub steps: Vec<Step>,
}

/// Parses, simplifies and costs the source code using the default [`SaturationOptions`].
pub fn analyze(source: &str) -> Result<Analysis, Error> {
    analyze_with(source, SaturationOptions::default())
}

/// Parses, simplifies and costs the source code using the given options.
pub fn analyze_with(source: &str, options: SaturationOptions) -> Result<Analysis, Error> {
    let original = parse(source)?;
    let (saturation, steps) = eqsat_compute::saturate_with_steps(&original, options);
    if !saturation.converged() {
        warn!("`{}` did not reach a fixed point after {} passes", source, saturation.iterations);
    }

    Ok(Analysis {
        cost_before: cost(&original),
        cost_after: cost(&saturation.expr),
        original,
        optimized: saturation.expr,
        iterations: saturation.iterations,
        status: saturation.status,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_classifies_lex_errors() {
        let err = parse("x - 1").unwrap_err();
        assert!(matches!(err, Error::Lex(_)));
        assert_eq!(err.spans(), &[2..3]);
    }

    #[test]
    fn parse_classifies_parse_errors() {
        let err = parse("(a + ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn error_display() {
        let err = parse("x / 2").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("lex error at 2..3"), "{}", message);
    }

    #[test]
    fn build_report_for_parse_error() {
        let source = "x + * y";
        let err = parse(source).unwrap_err();
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", ariadne::Source::from(source)), &mut buf)
            .unwrap();

        let report = strip_ansi_escapes::strip_str(String::from_utf8_lossy(&buf));
        assert!(report.contains("expected a number, identifier, or parenthesized expression"), "{}", report);
        assert!(report.contains("found Mul here"), "{}", report);
    }

    #[test]
    fn equals_is_structural() {
        assert!(equals(&parse("x + y").unwrap(), &parse("(x + y)").unwrap()));
        assert!(!equals(&parse("x + y").unwrap(), &parse("y + x").unwrap()));
    }

    #[test]
    fn analysis_records_steps() {
        let analysis = analyze("1 * x + 0 * y").unwrap();
        assert_eq!(analysis.steps, vec![Step::MultiplyOne, Step::MultiplyZero, Step::AddZero]);
        assert_eq!(analysis.iterations, 2);
        assert_eq!(analysis.status, Status::Converged);
    }
}
