use log::{debug, error};

use crate::notation::errors::NotationError;
use crate::notation::token::{Token, Trace};
use crate::operator::Operator;

/// How operators are printed in rendered expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// `×` and `÷`
    #[default]
    Display,
    /// `*` and `/`
    Ascii,
}

impl GlyphStyle {
    fn symbol(self, op: Operator) -> &'static str {
        match self {
            GlyphStyle::Display => op.glyph(),
            GlyphStyle::Ascii => op.symbol(),
        }
    }
}

/// Convert a postfix trace into a fully parenthesized infix string.
///
/// Each operator application becomes `(left op right)`, where `right` is the
/// most recently produced sub-expression.
///
/// # Errors
///
/// Returns a malformed-trace error if an operator is reached with fewer than
/// two sub-expressions available, or if the trace does not reduce to exactly
/// one expression.
pub fn render(trace: &Trace, style: GlyphStyle) -> Result<String, NotationError> {
    if trace.is_empty() {
        error!("Cannot render an empty trace");
        return Err(NotationError::UnbalancedTrace { remaining: 0 });
    }

    let mut stack: Vec<String> = Vec::with_capacity(trace.len());

    for (position, token) in trace.tokens().iter().enumerate() {
        match token {
            Token::Operand(n) => stack.push(n.to_string()),
            Token::Operator(op) => {
                let depth = stack.len();
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    error!(
                        "Operator '{}' at token {} of [{}] with {} value(s) on the stack",
                        op, position, trace, depth
                    );
                    return Err(NotationError::MissingOperands {
                        symbol: op.symbol(),
                        position,
                        depth,
                    });
                };
                stack.push(format!("({} {} {})", left, style.symbol(*op), right));
            }
        }
    }

    if stack.len() != 1 {
        error!("Trace [{}] left {} value(s) on the stack", trace, stack.len());
        return Err(NotationError::UnbalancedTrace {
            remaining: stack.len(),
        });
    }

    let rendered = stack.pop().ok_or(NotationError::UnbalancedTrace { remaining: 0 })?;
    debug!("Rendered [{}] as {}", trace, rendered);
    Ok(rendered)
}
