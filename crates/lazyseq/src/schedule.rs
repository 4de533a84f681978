//! Signal schedules layered over a sequence.

use lazyseq_core::{Finiteness, ResumeSignal, Sequence, SequenceState, StepResult};

/// Forwards resumes to `inner`, attaching a reset signal to the resume with
/// the given 1-based ordinal.
///
/// The reset can revive an exhausted inner sequence, so a `ResetAt` may
/// produce values after a `done` step.
pub struct ResetAt<S> {
    inner: S,
    at: usize,
    resumes: usize,
}

impl<S: Sequence> ResetAt<S> {
    #[must_use]
    pub fn new(inner: S, at: usize) -> Self {
        Self {
            inner,
            at,
            resumes: 0,
        }
    }
}

impl<S: Sequence> Sequence for ResetAt<S> {
    type Item = S::Item;

    fn resume(&mut self, signal: Option<ResumeSignal>) -> StepResult<S::Item> {
        self.resumes += 1;
        let signal = if self.resumes == self.at {
            Some(ResumeSignal::Reset)
        } else {
            signal
        };
        self.inner.resume(signal)
    }

    fn state(&self) -> SequenceState {
        self.inner.state()
    }

    fn finiteness(&self) -> Finiteness {
        self.inner.finiteness()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn supports_reset(&self) -> bool {
        self.inner.supports_reset()
    }
}

#[cfg(test)]
mod tests {
    use lazyseq_core::{fibonacci, range};

    use super::*;

    #[test]
    fn fibonacci_reset_on_eighth_resume() {
        let mut seq = ResetAt::new(fibonacci(), 8);
        let values: Vec<String> = seq
            .collect_values(Some(11))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(values, ["0", "1", "1", "2", "3", "5", "8", "0", "1", "1", "2"]);
    }

    #[test]
    fn range_reset_after_exhaustion() {
        let mut seq = ResetAt::new(range(0, 2), 4);
        assert_eq!(seq.collect_values(Some(2)).unwrap(), [0, 1]);
        assert!(seq.resume(None).is_done());
        assert_eq!(seq.collect_values(None).unwrap(), [0, 1]);
    }

    #[test]
    fn iterator_stays_finished_when_reset_would_revive() {
        let mut it = ResetAt::new(range(0, 2), 4).to_iterable().fuse();
        let trace: Vec<Option<i64>> = (0..5).map(|_| it.next()).collect();
        assert_eq!(trace, [Some(0), Some(1), None, None, None]);
    }

    #[test]
    fn delegates_metadata() {
        let seq = ResetAt::new(range(0, 2), 1);
        assert_eq!(seq.name(), "range");
        assert_eq!(seq.finiteness(), Finiteness::Finite);
        assert!(seq.supports_reset());
    }
}
