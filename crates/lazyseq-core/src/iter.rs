//! Adapter from [`Sequence`] to [`Iterator`].

use std::iter::FusedIterator;

use crate::sequence::{Finiteness, Sequence};

/// Iterator over the values of a sequence.
///
/// Each `next` is exactly one `resume(None)`, so a `for` loop and a manual
/// resume loop observe the same values in the same order. After the first
/// `None` the iterator stops resuming, even if the sequence could revive.
///
/// # Example
/// ```
/// use lazyseq_core::range::{RangeConfig, RangeSequence};
/// use lazyseq_core::Sequence;
///
/// let seq = RangeSequence::new(RangeConfig::bounded(0, 4)).unwrap();
/// let values: Vec<i64> = seq.to_iterable().collect();
/// assert_eq!(values, [0, 1, 2, 3]);
/// ```
pub struct SequenceIter<S> {
    seq: S,
    finished: bool,
}

impl<S: Sequence> SequenceIter<S> {
    #[must_use]
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            finished: false,
        }
    }

    /// Borrow the underlying sequence.
    pub fn sequence(&self) -> &S {
        &self.seq
    }

    /// Recover the underlying sequence, cursor included.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for SequenceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let value = self.seq.resume(None).into_value();
        self.finished = value.is_none();
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        match self.seq.finiteness() {
            Finiteness::Infinite => (usize::MAX, None),
            Finiteness::Finite | Finiteness::Unknown => (0, None),
        }
    }
}

impl<S: Sequence> FusedIterator for SequenceIter<S> {}
