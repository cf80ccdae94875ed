use crate::operator::core::Operator;

/// One move the search can make from a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Introduce the next remaining operand
    Push,
    /// Combine the top two pending values
    Apply(Operator),
}

/// Ordered set of steps available to the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSet {
    steps: Vec<Step>,
}

impl OperatorSet {
    /// `+ - * /`, with `^` appended when `use_power` is set
    pub fn new(use_power: bool) -> Self {
        let mut steps = vec![
            Step::Push,
            Step::Apply(Operator::Add),
            Step::Apply(Operator::Sub),
            Step::Apply(Operator::Mul),
            Step::Apply(Operator::Div),
        ];
        if use_power {
            steps.push(Step::Apply(Operator::Pow));
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::new(false)
    }
}
