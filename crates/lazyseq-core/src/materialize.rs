//! Bounded bulk materialization.

use tracing::debug;

use crate::constants::DEFAULT_MATERIALIZE_BOUND;
use crate::error::SequenceError;
use crate::sequence::{Finiteness, Sequence};

/// Collect the remaining values of `seq` into a `Vec`.
///
/// With `Some(limit)`, at most `limit` values are produced and the call never
/// fails. With `None`, a sequence reporting [`Finiteness::Infinite`] is
/// rejected before any resume, and any other sequence must signal `done`
/// within [`DEFAULT_MATERIALIZE_BOUND`] values.
pub fn collect<S: Sequence>(
    seq: &mut S,
    limit: Option<usize>,
) -> Result<Vec<S::Item>, SequenceError> {
    collect_with_bound(seq, limit, DEFAULT_MATERIALIZE_BOUND)
}

/// Like [`collect`], with an explicit safety bound for the unlimited case.
pub fn collect_with_bound<S: Sequence>(
    seq: &mut S,
    limit: Option<usize>,
    bound: usize,
) -> Result<Vec<S::Item>, SequenceError> {
    if let Some(limit) = limit {
        return Ok(take_up_to(seq, limit));
    }

    if seq.finiteness() == Finiteness::Infinite {
        debug!(sequence = seq.name(), "refusing unbounded collect");
        return Err(SequenceError::NonTerminating { checked: 0 });
    }

    let mut values = Vec::new();
    while let Some(value) = seq.resume(None).into_value() {
        if values.len() == bound {
            debug!(sequence = seq.name(), bound, "collect bound reached");
            return Err(SequenceError::NonTerminating {
                checked: values.len(),
            });
        }
        values.push(value);
    }
    Ok(values)
}

fn take_up_to<S: Sequence>(seq: &mut S, limit: usize) -> Vec<S::Item> {
    let mut values = Vec::with_capacity(limit.min(1024));
    while values.len() < limit {
        match seq.resume(None).into_value() {
            Some(value) => values.push(value),
            None => break,
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::FibonacciSequence;
    use crate::range::{RangeConfig, RangeSequence};

    #[test]
    fn finite_without_limit() {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, 10)).unwrap();
        assert_eq!(collect(&mut seq, None).unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn limit_truncates() {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, 10)).unwrap();
        assert_eq!(collect(&mut seq, Some(3)).unwrap(), [0, 1, 2]);
        // Cursor continues where the bounded collect stopped.
        assert_eq!(collect(&mut seq, Some(2)).unwrap(), [3, 4]);
    }

    #[test]
    fn limit_larger_than_sequence() {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, 2)).unwrap();
        assert_eq!(collect(&mut seq, Some(100)).unwrap(), [0, 1]);
    }

    #[test]
    fn limit_zero_does_not_resume() {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, 2)).unwrap();
        assert!(collect(&mut seq, Some(0)).unwrap().is_empty());
        assert_eq!(seq.state(), crate::sequence::SequenceState::Fresh);
    }

    #[test]
    fn infinite_without_limit_fails_fast() {
        let mut seq = FibonacciSequence::new();
        let err = collect(&mut seq, None).unwrap_err();
        assert!(matches!(err, SequenceError::NonTerminating { checked: 0 }));
        assert_eq!(seq.state(), crate::sequence::SequenceState::Fresh);
    }

    #[test]
    fn infinite_with_limit() {
        let mut seq = FibonacciSequence::new();
        let values = collect(&mut seq, Some(5)).unwrap();
        let values: Vec<u64> = values.into_iter().map(|v| v.try_into().unwrap()).collect();
        assert_eq!(values, [0, 1, 1, 2, 3]);
    }

    #[test]
    fn bound_exceeded_fails() {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, 100)).unwrap();
        let err = collect_with_bound(&mut seq, None, 10).unwrap_err();
        assert!(matches!(err, SequenceError::NonTerminating { checked: 10 }));
    }

    #[test]
    fn bound_exactly_met_succeeds() {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, 10)).unwrap();
        assert_eq!(collect_with_bound(&mut seq, None, 10).unwrap().len(), 10);
    }
}
