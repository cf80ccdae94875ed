use log::{debug, info};
use rayon::prelude::*;

use crate::notation::{Trace, render};
use crate::search::Enumerator;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::progress::{NoProgress, ProgressSink};
use crate::utils::{
    count_distinct_permutations, distinct_permutations, validate_epsilon, validate_operands,
    validate_target,
};

/// Main solver for finding every expression that matches a target value
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every expression over `operands` that evaluates to `target`
    ///
    /// # Errors
    ///
    /// Returns an error if an operand or the target is not finite, or if a
    /// solution trace cannot be rendered.
    pub fn solve(&self, operands: &[f64], target: f64) -> Result<Vec<String>, SolverError> {
        self.solve_with_progress(operands, target, &NoProgress)
    }

    /// Same as [`solve`](Self::solve), reporting to `progress` once per searched ordering
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve).
    pub fn solve_with_progress(
        &self,
        operands: &[f64],
        target: f64,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<String>, SolverError> {
        let traces = self.find_traces(operands, target, progress)?;
        let style = self.config.glyph_style();

        let expressions = traces
            .iter()
            .map(|trace| render(trace, style))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} expression(s) equal to {}", expressions.len(), target);
        Ok(expressions)
    }

    /// Collect the solution traces for every searched ordering, in ordering order
    ///
    /// # Errors
    ///
    /// Returns an error if an operand, the target or the tolerance is invalid.
    pub fn find_traces(
        &self,
        operands: &[f64],
        target: f64,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Trace>, SolverError> {
        validate_operands(operands)?;
        validate_target(target)?;
        validate_epsilon(self.config.epsilon)?;

        if operands.len() < 2 {
            debug!("Fewer than two operands, no expression can be formed");
            return Ok(Vec::new());
        }

        let orderings = if self.config.permutate {
            debug!(
                "Expecting {} distinct ordering(s)",
                count_distinct_permutations(operands)
            );
            distinct_permutations(operands)
        } else {
            vec![operands.to_vec()]
        };
        let total = orderings.len();
        let operators = self.config.operator_set();
        let epsilon = self.config.epsilon;

        info!(
            "Searching {} ordering(s) of {:?} for target {}",
            total, operands, target
        );

        let search = |(index, ordering): (usize, &Vec<f64>)| {
            let mut enumerator = Enumerator::new(&operators, target, epsilon);
            let traces = enumerator.enumerate(ordering);
            progress.ordering_searched(index, total, traces.len());
            traces
        };

        let per_ordering: Vec<Vec<Trace>> = if self.config.parallel {
            orderings.par_iter().enumerate().map(search).collect()
        } else {
            orderings.iter().enumerate().map(search).collect()
        };

        let traces: Vec<Trace> = per_ordering.into_iter().flatten().collect();
        debug!("Collected {} solution trace(s)", traces.len());
        Ok(traces)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
