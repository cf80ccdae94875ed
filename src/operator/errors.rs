use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Non-finite result: {left} {symbol} {right}")]
    NonFinite {
        left: f64,
        symbol: &'static str,
        right: f64,
    },
}
