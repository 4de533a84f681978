//! Lazy fallback-candidate selection.
//!
//! Candidates are computed one per resume, so a candidate is only evaluated
//! if every earlier one was absent. Selection stops at the first present
//! value and never touches the remaining candidates.

use serde_json::Value;

use crate::error::SequenceError;
use crate::sequence::{Finiteness, ResumeSignal, Sequence, SequenceState};
use crate::sink::{LogSink, Record};
use crate::step::StepResult;

/// A named, possibly expensive, computation that may produce a value.
pub struct Candidate<'a, T> {
    label: String,
    compute: Box<dyn FnOnce() -> Option<T> + 'a>,
}

impl<'a, T> Candidate<'a, T> {
    pub fn new(label: impl Into<String>, compute: impl FnOnce() -> Option<T> + 'a) -> Self {
        Self {
            label: label.into(),
            compute: Box::new(compute),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The evaluated outcome of one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub label: String,
    pub value: Option<T>,
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.value.is_some()
    }
}

/// Finite sequence yielding one [`Outcome`] per candidate, in order.
///
/// Reset is not supported: each candidate computation runs at most once.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use lazyseq_core::fallback::{Candidate, FallbackSequence};
/// use lazyseq_core::sink::TracingSink;
///
/// let headers: HashMap<&str, &str> = [("x-real-ip", "10.0.0.7")].into();
/// let seq = FallbackSequence::new(vec![
///     Candidate::new("x-forwarded-for", || headers.get("x-forwarded-for").copied()),
///     Candidate::new("x-real-ip", || headers.get("x-real-ip").copied()),
/// ]);
/// assert_eq!(seq.select(&TracingSink).unwrap(), "10.0.0.7");
/// ```
pub struct FallbackSequence<'a, T> {
    pending: std::vec::IntoIter<Candidate<'a, T>>,
    attempted: Vec<String>,
    state: SequenceState,
}

impl<'a, T> FallbackSequence<'a, T> {
    #[must_use]
    pub fn new(candidates: Vec<Candidate<'a, T>>) -> Self {
        Self {
            pending: candidates.into_iter(),
            attempted: Vec::new(),
            state: SequenceState::Fresh,
        }
    }

    /// Labels of the candidates evaluated so far, in evaluation order.
    #[must_use]
    pub fn attempted(&self) -> &[String] {
        &self.attempted
    }

    /// Resume until a candidate produces a value and return it.
    ///
    /// When every candidate is absent, the attempted labels are logged to
    /// `sink` and [`SequenceError::NoAcceptingCandidate`] is returned.
    pub fn select(mut self, sink: &dyn LogSink) -> Result<T, SequenceError> {
        while let Some(outcome) = self.resume(None).into_value() {
            if let Some(value) = outcome.value {
                return Ok(value);
            }
        }

        let mut record = Record::new();
        record.insert("attempted".into(), Value::from(self.attempted.clone()));
        record.insert("count".into(), Value::from(self.attempted.len()));
        sink.log(&record, "no accepting candidate");

        Err(SequenceError::NoAcceptingCandidate {
            attempted: self.attempted,
        })
    }
}

impl<T> Sequence for FallbackSequence<'_, T> {
    type Item = Outcome<T>;

    fn resume(&mut self, _signal: Option<ResumeSignal>) -> StepResult<Outcome<T>> {
        let Some(candidate) = self.pending.next() else {
            self.state = SequenceState::Exhausted;
            return StepResult::done();
        };

        self.state = SequenceState::Active;
        let value = (candidate.compute)();
        self.attempted.push(candidate.label.clone());
        StepResult::yielded(Outcome {
            label: candidate.label,
            value,
        })
    }

    fn state(&self) -> SequenceState {
        self.state
    }

    fn finiteness(&self) -> Finiteness {
        Finiteness::Finite
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
