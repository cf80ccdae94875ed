//! Maketen - A library for the "make N" family of arithmetic puzzles
//!
//! Given a multiset of numbers and a target, this library enumerates every way
//! to combine all of the numbers with `+ - × ÷` (and optionally `^`), in any
//! order and any parenthesization, so that the result equals the target.

pub mod notation;
pub mod operator;
pub mod search;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use notation::{GlyphStyle, NotationError, Token, Trace};
pub use operator::{Operator, OperatorError, OperatorSet};
pub use solver::{ExpressionSolver, NoProgress, ProgressSink, SolverConfig, SolverError};
pub use utils::UtilsError;

/// Find every expression over `operands` that evaluates to `target`
///
/// This is a convenience function that builds a solver from `config` and
/// renders each solution as a fully parenthesized infix string.
///
/// # Arguments
///
/// * `operands` - The numbers to combine, each used exactly once
/// * `target` - The value every returned expression evaluates to
/// * `config` - Operator set, permutation and output options
///
/// # Returns
///
/// * `Ok(expressions)` - Every solution found; empty when there is none
/// * `Err(SolverError)` - If the input is not finite or a solution could not be rendered
///
/// # Errors
///
/// This function will return an error if:
/// * An operand or the target is NaN or infinite
/// * A solution trace is malformed, which indicates an internal defect
///
/// # Examples
///
/// ```
/// use maketen::{SolverConfig, solve};
///
/// let expressions = solve(&[8.0, 1.0, 1.0, 5.0], 10.0, SolverConfig::default())?;
/// assert!(expressions.contains(&"(8 ÷ (1 - (1 ÷ 5)))".to_string()));
/// # Ok::<(), maketen::SolverError>(())
/// ```
pub fn solve(
    operands: &[f64],
    target: f64,
    config: SolverConfig,
) -> Result<Vec<String>, SolverError> {
    ExpressionSolver::new(config).solve(operands, target)
}
