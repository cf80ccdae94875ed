//! Reverse-Polish traces and their infix rendering

mod errors;
mod render;
mod token;

pub use errors::NotationError;
pub use render::{GlyphStyle, render};
pub use token::{Token, Trace};
