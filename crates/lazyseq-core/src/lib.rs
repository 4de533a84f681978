//! # lazyseq-core
//!
//! Resumable lazy sequences. Each sequence owns a private cursor and
//! advances only when its consumer calls `resume`, optionally passing a
//! reset signal. Sequences adapt to standard iterators and materialize into
//! vectors only under an explicit or default bound.

pub mod cancel;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod fibonacci;
pub mod iter;
pub mod materialize;
pub mod range;
pub mod retry;
pub mod sequence;
pub mod shared;
pub mod sink;
pub mod step;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, DEFAULT_MATERIALIZE_BOUND};
pub use error::{RetryError, SequenceError};
pub use fallback::{Candidate, FallbackSequence};
pub use fibonacci::{Fibonacci, FibonacciSequence};
pub use iter::SequenceIter;
pub use materialize::collect;
pub use range::{Range, RangeConfig, RangeSequence};
pub use retry::{RetryDriver, RetryPolicy};
pub use sequence::{Finiteness, Iterable, ResumeSignal, Sequence, SequenceState};
pub use shared::SharedSequence;
pub use step::StepResult;

/// Ranged sequence over `[start, end)` with step 1.
///
/// # Example
/// ```
/// use lazyseq_core::Sequence;
///
/// let values = lazyseq_core::range(0, 10).collect_values(None).unwrap();
/// assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[must_use]
pub fn range(start: i64, end: i64) -> RangeSequence {
    Range::bounded(start, end).to_sequence()
}

/// Infinite Fibonacci sequence starting at F(0).
#[must_use]
pub fn fibonacci() -> FibonacciSequence {
    FibonacciSequence::new()
}
