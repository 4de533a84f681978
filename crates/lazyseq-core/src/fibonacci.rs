//! Resettable Fibonacci recurrence over arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::sequence::{Finiteness, Iterable, ResumeSignal, Sequence, SequenceState};
use crate::step::StepResult;

/// Re-iterable handle producing fresh [`FibonacciSequence`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl Iterable for Fibonacci {
    type Seq = FibonacciSequence;

    fn to_sequence(&self) -> FibonacciSequence {
        FibonacciSequence::new()
    }
}

/// Infinite Fibonacci sequence `0, 1, 1, 2, 3, 5, ...`.
///
/// The cursor is the pair `(current, next)`, starting at `(0, 1)`. A
/// [`ResumeSignal::Reset`] restores that pair, so the resume carrying the
/// signal yields `0`.
///
/// # Example
/// ```
/// use lazyseq_core::fibonacci::FibonacciSequence;
/// use lazyseq_core::{ResumeSignal, Sequence};
///
/// let mut fib = FibonacciSequence::new();
/// for _ in 0..5 {
///     fib.resume(None);
/// }
/// let after_reset = fib.resume(Some(ResumeSignal::Reset)).into_value().unwrap();
/// assert_eq!(after_reset.to_string(), "0");
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    current: BigUint,
    next: BigUint,
    index: u64,
    state: SequenceState,
}

impl FibonacciSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: BigUint::zero(),
            next: BigUint::one(),
            index: 0,
            state: SequenceState::Fresh,
        }
    }

    /// Start with the cursor positioned so the first resume yields F(n).
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let mut seq = Self::new();
        for _ in 0..n {
            seq.advance();
        }
        seq
    }

    /// Index of the value the next plain resume will yield.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    fn advance(&mut self) -> BigUint {
        let sum = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, sum);
        self.index += 1;
        std::mem::replace(&mut self.current, next)
    }

    fn reset(&mut self) {
        debug!(index = self.index, "fibonacci reset");
        self.current = BigUint::zero();
        self.next = BigUint::one();
        self.index = 0;
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for FibonacciSequence {
    type Item = BigUint;

    fn resume(&mut self, signal: Option<ResumeSignal>) -> StepResult<BigUint> {
        if signal == Some(ResumeSignal::Reset) {
            self.reset();
        }
        self.state = SequenceState::Active;
        StepResult::yielded(self.advance())
    }

    fn state(&self) -> SequenceState {
        self.state
    }

    fn finiteness(&self) -> Finiteness {
        Finiteness::Infinite
    }

    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn supports_reset(&self) -> bool {
        true
    }
}
