//! Ranged arithmetic sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SequenceError;
use crate::iter::SequenceIter;
use crate::sequence::{Finiteness, Iterable, ResumeSignal, Sequence, SequenceState};
use crate::step::StepResult;

/// Configuration for a ranged sequence.
///
/// Defaults: `start = 0`, `end = None` (unbounded), `step = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// First value produced.
    pub start: i64,
    /// Exclusive bound; `None` means the sequence never reaches `done`.
    pub end: Option<i64>,
    /// Distance between consecutive values. Negative steps count down.
    pub step: i64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: None,
            step: 1,
        }
    }
}

impl RangeConfig {
    /// `[start, end)` with step 1.
    #[must_use]
    pub fn bounded(start: i64, end: i64) -> Self {
        Self {
            start,
            end: Some(end),
            ..Self::default()
        }
    }

    /// `start, start + 1, ...` without an upper bound.
    #[must_use]
    pub fn starting_at(start: i64) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }
}

/// A validated range description. Re-iterable: every call to
/// [`Iterable::to_sequence`] starts a fresh cursor.
///
/// # Example
/// ```
/// use lazyseq_core::range::{Range, RangeConfig};
///
/// let evens = Range::new(RangeConfig::bounded(0, 7).with_step(2)).unwrap();
/// let first: Vec<i64> = (&evens).into_iter().collect();
/// let again: Vec<i64> = (&evens).into_iter().collect();
/// assert_eq!(first, [0, 2, 4, 6]);
/// assert_eq!(first, again);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    config: RangeConfig,
}

impl Range {
    /// Validate `config`. A zero step is rejected here, not at first resume.
    pub fn new(config: RangeConfig) -> Result<Self, SequenceError> {
        if config.step == 0 {
            return Err(SequenceError::Config("range step must be non-zero".into()));
        }
        Ok(Self { config })
    }

    /// `[start, end)` with step 1. Always valid.
    #[must_use]
    pub fn bounded(start: i64, end: i64) -> Self {
        Self {
            config: RangeConfig::bounded(start, end),
        }
    }

    #[must_use]
    pub fn config(&self) -> RangeConfig {
        self.config
    }

    /// Number of values the range produces, `None` when unbounded.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        let RangeConfig { start, end, step } = self.config;
        let end = end?;
        let (span, stride) = if step > 0 {
            (i128::from(end) - i128::from(start), i128::from(step))
        } else {
            (i128::from(start) - i128::from(end), -i128::from(step))
        };
        if span <= 0 {
            return Some(0);
        }
        let count = (span + stride - 1) / stride;
        Some(u64::try_from(count).unwrap_or(u64::MAX))
    }

    /// Whether `index` lies before the exclusive bound in the step direction.
    fn admits(&self, index: i64) -> bool {
        match self.config.end {
            None => true,
            Some(end) if self.config.step > 0 => index < end,
            Some(end) => index > end,
        }
    }
}

impl Iterable for Range {
    type Seq = RangeSequence;

    fn to_sequence(&self) -> RangeSequence {
        RangeSequence::from_range(*self)
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = SequenceIter<RangeSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_sequence().to_iterable()
    }
}

/// Resumable cursor over a [`Range`].
///
/// Supports [`ResumeSignal::Reset`], which rewinds to `start` even after
/// exhaustion. Cursor overflow exhausts the sequence instead of wrapping.
#[derive(Debug, Clone)]
pub struct RangeSequence {
    range: Range,
    cursor: Option<i64>,
    state: SequenceState,
}

impl RangeSequence {
    /// Validate `config` and create a sequence positioned at `start`.
    pub fn new(config: RangeConfig) -> Result<Self, SequenceError> {
        Range::new(config).map(Self::from_range)
    }

    fn from_range(range: Range) -> Self {
        Self {
            range,
            cursor: Some(range.config.start),
            state: SequenceState::Fresh,
        }
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }
}

impl Sequence for RangeSequence {
    type Item = i64;

    fn resume(&mut self, signal: Option<ResumeSignal>) -> StepResult<i64> {
        if signal == Some(ResumeSignal::Reset) {
            debug!(start = self.range.config.start, "range reset");
            self.cursor = Some(self.range.config.start);
        }

        let Some(index) = self.cursor.filter(|&i| self.range.admits(i)) else {
            self.cursor = None;
            self.state = SequenceState::Exhausted;
            return StepResult::done();
        };

        self.cursor = index.checked_add(self.range.config.step);
        self.state = SequenceState::Active;
        StepResult::yielded(index)
    }

    fn state(&self) -> SequenceState {
        self.state
    }

    fn finiteness(&self) -> Finiteness {
        if self.range.config.end.is_some() {
            Finiteness::Finite
        } else {
            Finiteness::Infinite
        }
    }

    fn name(&self) -> &'static str {
        "range"
    }

    fn supports_reset(&self) -> bool {
        true
    }
}
