use crate::notation::GlyphStyle;
use crate::operator::OperatorSet;

/// Configuration for the expression search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Include `^` in the operator set
    pub use_power: bool,
    /// Search every distinct ordering of the operands, not just the given one
    pub permutate: bool,
    /// Print `×` and `÷` instead of `*` and `/`
    pub use_display_glyphs: bool,
    /// Largest accepted relative distance between a result and the target
    pub epsilon: f64,
    /// Search orderings on the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            use_power: false,
            permutate: true,
            use_display_glyphs: true,
            epsilon: 1e-12,
            parallel: true,
        }
    }
}

impl SolverConfig {
    pub fn operator_set(&self) -> OperatorSet {
        OperatorSet::new(self.use_power)
    }

    pub fn glyph_style(&self) -> GlyphStyle {
        if self.use_display_glyphs {
            GlyphStyle::Display
        } else {
            GlyphStyle::Ascii
        }
    }
}
