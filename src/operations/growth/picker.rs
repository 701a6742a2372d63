/// Chooses which surviving candidate a growth step accepts.
///
/// `pick` is called once per growth step that has at least one survivor,
/// with the number of survivors, and must return an index below it.
pub trait CandidatePicker {
    fn pick(&mut self, count: usize) -> usize;
}

impl<F> CandidatePicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, count: usize) -> usize {
        self(count)
    }
}

/// Accepts the last-enumerated candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastCandidate;

impl CandidatePicker for LastCandidate {
    fn pick(&mut self, count: usize) -> usize {
        count.saturating_sub(1)
    }
}

/// Accepts the first-enumerated candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl CandidatePicker for FirstCandidate {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}
