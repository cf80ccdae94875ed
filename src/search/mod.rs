//! Exhaustive reverse-Polish expression search over one operand ordering

mod core;
mod state;

pub use core::{Enumerator, SearchStats};
pub use state::SearchState;

#[cfg(test)]
mod tests;
