use thiserror::Error;

use crate::notation::NotationError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Rendering error: {0}")]
    Notation(#[from] NotationError),
    #[error("Utils error: {0}")]
    Utils(#[from] UtilsError),
}
