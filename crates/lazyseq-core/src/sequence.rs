//! The `Sequence` trait and its lifecycle types.
//!
//! A sequence owns a private cursor and advances only when its consumer
//! calls [`Sequence::resume`]. Resume is total: exhaustion is reported
//! through [`StepResult::is_done`], never as an error.

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::iter::SequenceIter;
use crate::step::StepResult;

/// Input to a resume call that alters the cursor before the next value is
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeSignal {
    /// Restore the cursor to its initial state.
    Reset,
}

/// Lifecycle of a sequence instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SequenceState {
    /// Cursor at its initial value, never resumed.
    Fresh,
    /// Resumed at least once and not yet exhausted.
    Active,
    /// Terminal. Only reachable for finite sequences.
    Exhausted,
}

/// What a sequence can promise about its own length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Finiteness {
    Finite,
    Infinite,
    Unknown,
}

/// A stateful producer of ordered values, advanced one step at a time.
pub trait Sequence {
    /// Type of the produced values.
    type Item;

    /// Advance the cursor by one step.
    ///
    /// A `Some(ResumeSignal::Reset)` is applied before the next value is
    /// computed on sequences that support it; other sequences ignore it.
    fn resume(&mut self, signal: Option<ResumeSignal>) -> StepResult<Self::Item>;

    /// Current lifecycle state.
    fn state(&self) -> SequenceState;

    /// Static knowledge about termination.
    fn finiteness(&self) -> Finiteness;

    /// Short human-readable name.
    fn name(&self) -> &str;

    /// Whether this sequence honors [`ResumeSignal::Reset`].
    fn supports_reset(&self) -> bool {
        false
    }

    /// Adapt into a standard iterator. Enumeration order equals resume order.
    fn to_iterable(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }

    /// Materialize remaining values. See [`crate::materialize::collect`].
    fn collect_values(&mut self, limit: Option<usize>) -> Result<Vec<Self::Item>, SequenceError>
    where
        Self: Sized,
    {
        crate::materialize::collect(self, limit)
    }
}

/// A re-iterable description that can hand out fresh, independent sequences.
pub trait Iterable {
    /// The sequence type produced.
    type Seq: Sequence;

    /// Create a new sequence with its own cursor at the initial state.
    fn to_sequence(&self) -> Self::Seq;
}
