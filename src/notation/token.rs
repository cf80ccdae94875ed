use std::fmt;

use crate::notation::errors::NotationError;
use crate::operator::Operator;

/// A single reverse-Polish token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Operand(f64),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// A postfix token sequence built by the search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    tokens: Vec<Token>,
}

impl Trace {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Operand values in the order they appear
    pub fn operands(&self) -> Vec<f64> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Operand(n) => Some(*n),
                Token::Operator(_) => None,
            })
            .collect()
    }

    pub fn operator_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, Token::Operator(_)))
            .count()
    }

    /// Replay the trace on a value stack.
    ///
    /// # Errors
    ///
    /// Returns an error if an operator finds fewer than two values, if the
    /// trace does not reduce to a single value, or if an operator rejects
    /// its operands.
    pub fn evaluate(&self) -> Result<f64, NotationError> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.tokens.len());
        for (position, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Operand(n) => stack.push(*n),
                Token::Operator(op) => {
                    let depth = stack.len();
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(NotationError::MissingOperands {
                            symbol: op.symbol(),
                            position,
                            depth,
                        });
                    };
                    stack.push(op.apply(left, right)?);
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(NotationError::UnbalancedTrace {
                remaining: stack.len(),
            }),
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
