//! Operator registry: the binary operations the search may apply

mod core;
mod errors;
mod registry;

pub use core::Operator;
pub use errors::OperatorError;
pub use registry::{OperatorSet, Step};
