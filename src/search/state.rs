use crate::notation::{Token, Trace};
use crate::operator::{Operator, OperatorError};

/// Working state of one search branch.
///
/// Branches never share a state: every transition returns a fresh copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Values awaiting an operator, top of stack last
    pub(crate) pending: Vec<f64>,
    /// Operands not yet introduced, next one last
    pub(crate) remaining: Vec<f64>,
    pub(crate) trace: Trace,
}

impl SearchState {
    /// Seed the search: the first two operands are already pending, the rest
    /// are queued so that they are introduced left to right.
    pub fn seed(ordering: &[f64]) -> Self {
        let split = ordering.len().min(2);
        let (head, tail) = ordering.split_at(split);

        let mut trace = Trace::new();
        for &n in head {
            trace.push(Token::Operand(n));
        }

        Self {
            pending: head.to_vec(),
            remaining: tail.iter().rev().copied().collect(),
            trace,
        }
    }

    pub fn pending(&self) -> &[f64] {
        &self.pending
    }

    pub fn remaining(&self) -> &[f64] {
        &self.remaining
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    /// All operands consumed and a single value left
    pub fn result(&self) -> Option<f64> {
        match self.pending.as_slice() {
            [value] if self.remaining.is_empty() => Some(*value),
            _ => None,
        }
    }

    /// Introduce the next remaining operand, if any
    pub fn push_next(&self) -> Option<Self> {
        let mut next = self.clone();
        let operand = next.remaining.pop()?;
        next.pending.push(operand);
        next.trace.push(Token::Operand(operand));
        Some(next)
    }

    /// Combine the top two pending values as `second_from_top op top`.
    ///
    /// Returns `None` when fewer than two values are pending.
    pub fn apply(&self, operator: Operator) -> Option<Result<Self, OperatorError>> {
        if self.pending.len() < 2 {
            return None;
        }

        let mut next = self.clone();
        let (Some(right), Some(left)) = (next.pending.pop(), next.pending.pop()) else {
            return None;
        };

        Some(operator.apply(left, right).map(|value| {
            next.pending.push(value);
            next.trace.push(Token::Operator(operator));
            next
        }))
    }
}
