//! Error types for sequence construction, materialization and retry driving.

/// Errors raised at the boundaries of the engine.
///
/// `resume` itself never fails; only construction, bulk materialization and
/// candidate selection can.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Invalid sequence configuration, reported at construction.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unbounded materialization of a sequence not proven finite.
    ///
    /// `checked` is the number of values produced before giving up; it is
    /// zero when the sequence reports itself as infinite.
    #[error("sequence is not known to terminate ({checked} values examined); pass an explicit limit")]
    NonTerminating { checked: usize },

    /// Every candidate of a fallback sequence was absent.
    #[error("no accepting candidate among [{}]", .attempted.join(", "))]
    NoAcceptingCandidate { attempted: Vec<String> },
}

/// Errors returned by [`RetryDriver::run`](crate::retry::RetryDriver::run).
///
/// The operation's own error is carried unchanged in `Exhausted::last`.
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E> {
    /// The attempt budget or the attempt sequence ran out before a success.
    #[error("operation failed after {attempts} attempts: {last}")]
    Exhausted { attempts: u64, last: E },

    /// The attempt sequence produced no value, so the operation never ran.
    #[error("attempt sequence was empty; operation never ran")]
    NoAttempts,

    /// Cancellation was requested between attempts.
    #[error("retry cancelled after {attempts} attempts")]
    Cancelled { attempts: u64 },
}
