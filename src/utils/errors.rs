use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Operand at position {position} is not a finite number: {value}")]
    NonFiniteOperand { position: usize, value: f64 },
    #[error("Target is not a finite number: {0}")]
    NonFiniteTarget(f64),
    #[error("Epsilon must be a finite, non-negative number: {0}")]
    InvalidEpsilon(f64),
}
