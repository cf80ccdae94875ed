/// Receives a notification after each operand ordering has been searched
pub trait ProgressSink: Sync {
    /// `index` counts from zero; `found` is the number of solutions for that ordering
    fn ordering_searched(&self, index: usize, total: usize, found: usize);
}

/// Discards all progress notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn ordering_searched(&self, _index: usize, _total: usize, _found: usize) {}
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize, usize) + Sync,
{
    fn ordering_searched(&self, index: usize, total: usize, found: usize) {
        self(index, total, found)
    }
}
