use log::{debug, trace};

use crate::notation::Trace;
use crate::operator::{OperatorSet, Step};
use crate::search::state::SearchState;
use crate::utils::matches_target;

/// Counters collected while enumerating one ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States visited
    pub nodes: usize,
    /// Operator applications rejected (division by zero, non-finite power)
    pub pruned: usize,
    pub solutions: usize,
}

/// Enumerates every postfix trace over a fixed operand ordering that reaches the target
pub struct Enumerator<'a> {
    operators: &'a OperatorSet,
    target: f64,
    epsilon: f64,
    stats: SearchStats,
}

impl<'a> Enumerator<'a> {
    pub fn new(operators: &'a OperatorSet, target: f64, epsilon: f64) -> Self {
        Self {
            operators,
            target,
            epsilon,
            stats: SearchStats::default(),
        }
    }

    /// Counters for the most recent [`enumerate`](Self::enumerate) call
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find all solution traces for `ordering`, in exploration order.
    ///
    /// Fewer than two operands never yields a solution.
    pub fn enumerate(&mut self, ordering: &[f64]) -> Vec<Trace> {
        self.stats = SearchStats::default();

        if ordering.len() < 2 {
            debug!("Skipping ordering {:?}: fewer than two operands", ordering);
            return Vec::new();
        }

        let results = self.enumerate_from(SearchState::seed(ordering));
        debug!(
            "Ordering {:?}: {} solution(s), {} nodes, {} pruned",
            ordering,
            results.len(),
            self.stats.nodes,
            self.stats.pruned
        );
        results
    }

    /// Recursive step: branch on every registry step from `state`
    pub fn enumerate_from(&mut self, state: SearchState) -> Vec<Trace> {
        self.stats.nodes += 1;

        if let Some(value) = state.result()
            && matches_target(value, self.target, self.epsilon)
        {
            trace!("Solution: {}", state.trace());
            self.stats.solutions += 1;
            return vec![state.into_trace()];
        }

        let operators = self.operators;
        let mut results = Vec::new();
        for step in operators.steps() {
            match step {
                Step::Push => {
                    if let Some(next) = state.push_next() {
                        results.extend(self.enumerate_from(next));
                    }
                }
                Step::Apply(op) => match state.apply(*op) {
                    Some(Ok(next)) => results.extend(self.enumerate_from(next)),
                    Some(Err(e)) => {
                        trace!("Pruned {} after [{}]: {}", op, state.trace(), e);
                        self.stats.pruned += 1;
                    }
                    None => {}
                },
            }
        }
        results
    }
}
