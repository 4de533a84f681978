//! Externally serialized access to a single sequence.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::sequence::{ResumeSignal, Sequence, SequenceState};
use crate::step::StepResult;

/// A cloneable handle that serializes resumes of one sequence.
///
/// Sequences themselves have no internal locking; this wrapper holds the
/// lock for exactly one resume, so each produced value reaches exactly one
/// consumer.
pub struct SharedSequence<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedSequence<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Sequence> SharedSequence<S> {
    #[must_use]
    pub fn new(seq: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(seq)),
        }
    }

    pub fn resume(&self, signal: Option<ResumeSignal>) -> StepResult<S::Item> {
        self.inner.lock().resume(signal)
    }

    pub fn state(&self) -> SequenceState {
        self.inner.lock().state()
    }
}
