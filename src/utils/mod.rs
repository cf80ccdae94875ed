//! Utils module split into submodules

mod errors;
mod permutations;
mod tolerance;
mod validation;

pub use errors::UtilsError;
pub use permutations::{count_distinct_permutations, distinct_permutations};
pub use tolerance::matches_target;
pub use validation::{validate_epsilon, validate_operands, validate_target};
