use thiserror::Error;

use crate::operator::OperatorError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error("Malformed trace: operator '{symbol}' at token {position} but only {depth} value(s) on the stack")]
    MissingOperands {
        symbol: &'static str,
        position: usize,
        depth: usize,
    },
    #[error("Malformed trace: {remaining} value(s) left on the stack, expected exactly one")]
    UnbalancedTrace { remaining: usize },
    #[error("Trace evaluation error: {0}")]
    Evaluation(#[from] OperatorError),
}

impl NotationError {
    /// Whether the error means the trace itself is structurally broken
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            NotationError::MissingOperands { .. } | NotationError::UnbalancedTrace { .. }
        )
    }
}
