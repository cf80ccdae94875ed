use std::fmt;

use log::trace;

use crate::operator::errors::OperatorError;

/// A binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

struct OperatorInfo {
    symbol: &'static str,
    glyph: &'static str,
    eval: fn(f64, f64) -> f64,
}

static ADD: OperatorInfo = OperatorInfo {
    symbol: "+",
    glyph: "+",
    eval: |l, r| l + r,
};
static SUB: OperatorInfo = OperatorInfo {
    symbol: "-",
    glyph: "-",
    eval: |l, r| l - r,
};
static MUL: OperatorInfo = OperatorInfo {
    symbol: "*",
    glyph: "×",
    eval: |l, r| l * r,
};
static DIV: OperatorInfo = OperatorInfo {
    symbol: "/",
    glyph: "÷",
    eval: |l, r| l / r,
};
static POW: OperatorInfo = OperatorInfo {
    symbol: "^",
    glyph: "^",
    eval: f64::powf,
};

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

impl Operator {
    fn info(self) -> &'static OperatorInfo {
        match self {
            Operator::Add => &ADD,
            Operator::Sub => &SUB,
            Operator::Mul => &MUL,
            Operator::Div => &DIV,
            Operator::Pow => &POW,
        }
    }

    /// Plain ASCII symbol (`+ - * / ^`)
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Symbol used in printed output, `×` and `÷` for multiply and divide
    pub fn glyph(self) -> &'static str {
        self.info().glyph
    }

    /// Apply the operator as `left op right`.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - dividing by exactly zero
    /// - raising a negative base to a fractional exponent
    /// - a power overflows or is otherwise undefined
    pub fn apply(self, left: f64, right: f64) -> Result<f64, OperatorError> {
        match self {
            Operator::Div if right == 0.0 => {
                trace!("Rejecting division of {} by zero", left);
                Err(OperatorError::DivisionByZero)
            }
            Operator::Pow if left < 0.0 && !is_integer(right) => {
                trace!("Rejecting {} ^ {}: complex result", left, right);
                Err(OperatorError::ComplexResult)
            }
            Operator::Pow => {
                let value = (POW.eval)(left, right);
                if value.is_finite() {
                    Ok(value)
                } else {
                    trace!("Rejecting {} ^ {}: non-finite result", left, right);
                    Err(OperatorError::NonFinite {
                        left,
                        symbol: POW.symbol,
                        right,
                    })
                }
            }
            _ => Ok((self.info().eval)(left, right)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
