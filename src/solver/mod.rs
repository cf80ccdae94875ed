mod config;
mod core;
mod errors;
mod progress;

pub use config::SolverConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use progress::{NoProgress, ProgressSink};
