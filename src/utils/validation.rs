use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if any operand is NaN or infinite.
pub fn validate_operands(operands: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating operands: {:?}", operands);

    if let Some((position, value)) = operands
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        warn!("Operand {} is not finite: {}", position, value);
        return Err(UtilsError::NonFiniteOperand {
            position,
            value: *value,
        });
    }

    if operands.len() < 2 {
        warn!(
            "Only {} operand(s) given, no operator can be applied",
            operands.len()
        );
    }

    debug!("Operand validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the target is NaN or infinite.
pub fn validate_target(target: f64) -> Result<(), UtilsError> {
    if !target.is_finite() {
        warn!("Target is not finite: {}", target);
        return Err(UtilsError::NonFiniteTarget(target));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the tolerance is negative, NaN or infinite.
pub fn validate_epsilon(epsilon: f64) -> Result<(), UtilsError> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        warn!("Invalid epsilon: {}", epsilon);
        return Err(UtilsError::InvalidEpsilon(epsilon));
    }
    Ok(())
}
