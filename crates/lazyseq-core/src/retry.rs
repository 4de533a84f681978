//! Retry driver fed by an attempt sequence.
//!
//! The driver alternates strictly: one resume of the attempt sequence, one
//! call of the operation, and only then the next resume. The operation's
//! failures are logged and handed back unchanged; the driver never inspects
//! them.

use std::fmt::Display;
use std::time::Duration;

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::constants::FIRST_ATTEMPT;
use crate::error::{RetryError, SequenceError};
use crate::range::{RangeConfig, RangeSequence};
use crate::sequence::Sequence;

/// Limits applied by a [`RetryDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// Maximum number of attempts. `None` retries as long as the attempt
    /// sequence produces values.
    pub max_attempts: Option<u64>,
    /// Pause between a failed attempt and the next resume.
    pub delay: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Reject a zero attempt budget.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.max_attempts == Some(0) {
            return Err(SequenceError::Config(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryReport {
    /// Attempts made, the successful one included.
    pub attempts: u64,
}

/// Drives an operation once per value of an attempt sequence until it
/// succeeds.
///
/// # Example
/// ```
/// use lazyseq_core::retry::{RetryDriver, RetryPolicy};
///
/// let mut driver = RetryDriver::new(RetryPolicy::default().with_max_attempts(5)).unwrap();
/// let report = driver
///     .run(|attempt| if attempt < 3 { Err("not yet") } else { Ok(()) })
///     .unwrap();
/// assert_eq!(report.attempts, 3);
/// ```
pub struct RetryDriver<S> {
    attempts: S,
    policy: RetryPolicy,
    cancel: CancellationToken,
}

impl RetryDriver<RangeSequence> {
    /// Driver over the unbounded attempt numbers `1, 2, 3, ...`.
    pub fn new(policy: RetryPolicy) -> Result<Self, SequenceError> {
        let attempts = RangeSequence::new(RangeConfig::starting_at(FIRST_ATTEMPT))?;
        Self::with_sequence(attempts, policy)
    }
}

impl<S: Sequence> RetryDriver<S> {
    /// Driver over an arbitrary attempt sequence; each produced value is
    /// passed to the operation.
    pub fn with_sequence(attempts: S, policy: RetryPolicy) -> Result<Self, SequenceError> {
        policy.validate()?;
        Ok(Self {
            attempts,
            policy,
            cancel: CancellationToken::new(),
        })
    }

    /// Stop before the next attempt once `cancel` is triggered.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Run `operation` until it returns `Ok`.
    pub fn run<F, E>(&mut self, mut operation: F) -> Result<RetryReport, RetryError<E>>
    where
        F: FnMut(S::Item) -> Result<(), E>,
        E: Display,
    {
        let mut attempts = 0u64;
        let mut last = None;

        loop {
            if self.policy.max_attempts.is_some_and(|max| attempts >= max) {
                break;
            }
            if self.cancel.is_cancelled() {
                debug!(attempts, "retry cancelled");
                return Err(RetryError::Cancelled { attempts });
            }
            if attempts > 0 && !self.policy.delay.is_zero() {
                std::thread::sleep(self.policy.delay);
            }

            let Some(item) = self.attempts.resume(None).into_value() else {
                debug!(attempts, sequence = self.attempts.name(), "attempt sequence exhausted");
                break;
            };
            attempts += 1;

            match operation(item) {
                Ok(()) => {
                    debug!(attempts, "operation succeeded");
                    return Ok(RetryReport { attempts });
                }
                Err(err) => {
                    debug!(attempt = attempts, error = %err, "operation failed");
                    last = Some(err);
                }
            }
        }

        match last {
            Some(last) => Err(RetryError::Exhausted { attempts, last }),
            None => Err(RetryError::NoAttempts),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::sequence::{Finiteness, ResumeSignal, SequenceState};
    use crate::step::StepResult;

    /// Wraps a sequence and records every resume into a shared log.
    struct Logged<'a> {
        inner: RangeSequence,
        log: &'a RefCell<Vec<String>>,
    }

    impl Sequence for Logged<'_> {
        type Item = i64;

        fn resume(&mut self, signal: Option<ResumeSignal>) -> StepResult<i64> {
            let step = self.inner.resume(signal);
            self.log.borrow_mut().push(format!("resume {:?}", step.value()));
            step
        }

        fn state(&self) -> SequenceState {
            self.inner.state()
        }

        fn finiteness(&self) -> Finiteness {
            self.inner.finiteness()
        }

        fn name(&self) -> &'static str {
            "logged"
        }
    }

    #[test]
    fn resumes_and_attempts_alternate() {
        let log = RefCell::new(Vec::new());
        let seq = Logged {
            inner: RangeSequence::new(RangeConfig::starting_at(1)).unwrap(),
            log: &log,
        };
        let mut driver = RetryDriver::with_sequence(seq, RetryPolicy::default()).unwrap();
        let report = driver
            .run(|attempt| {
                log.borrow_mut().push(format!("attempt {attempt}"));
                if attempt < 3 {
                    Err("busy")
                } else {
                    Ok(())
                }
            })
            .unwrap();

        assert_eq!(report.attempts, 3);
        assert_eq!(
            *log.borrow(),
            [
                "resume Some(1)",
                "attempt 1",
                "resume Some(2)",
                "attempt 2",
                "resume Some(3)",
                "attempt 3",
            ]
        );
    }

    #[test]
    fn first_success_stops_immediately() {
        let mut calls = 0;
        let mut driver = RetryDriver::new(RetryPolicy::default()).unwrap();
        let report = driver
            .run(|_| {
                calls += 1;
                Ok::<(), String>(())
            })
            .unwrap();
        assert_eq!(report.attempts, 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn exhausted_returns_last_operation_error() {
        let mut driver = RetryDriver::new(RetryPolicy::default().with_max_attempts(4)).unwrap();
        let err = driver
            .run(|attempt| Err(format!("failure #{attempt}")))
            .unwrap_err();
        match err {
            RetryError::Exhausted { attempts, last } => {
                assert_eq!(attempts, 4);
                assert_eq!(last, "failure #4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn finite_attempt_sequence_bounds_retries() {
        let seq = RangeSequence::new(RangeConfig::bounded(0, 2)).unwrap();
        let mut driver = RetryDriver::with_sequence(seq, RetryPolicy::default()).unwrap();
        let err = driver.run(|_| Err("nope")).unwrap_err();
        assert!(matches!(err, RetryError::Exhausted { attempts: 2, .. }));
    }

    #[test]
    fn empty_attempt_sequence() {
        let seq = RangeSequence::new(RangeConfig::bounded(0, 0)).unwrap();
        let mut driver = RetryDriver::with_sequence(seq, RetryPolicy::default()).unwrap();
        let err = driver.run(|_| Err("unreachable")).unwrap_err();
        assert!(matches!(err, RetryError::NoAttempts));
    }

    #[test]
    fn zero_max_attempts_rejected() {
        let result = RetryDriver::new(RetryPolicy::default().with_max_attempts(0));
        assert!(matches!(result, Err(SequenceError::Config(_))));
    }

    #[test]
    fn cancellation_stops_before_next_attempt() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let mut driver = RetryDriver::new(RetryPolicy::default())
            .unwrap()
            .with_cancellation(cancel);
        let err = driver
            .run(|attempt| {
                if attempt == 2 {
                    trigger.cancel();
                }
                Err("down")
            })
            .unwrap_err();
        assert!(matches!(err, RetryError::Cancelled { attempts: 2 }));
    }

    #[test]
    fn delay_is_applied_between_attempts() {
        let policy = RetryPolicy::default()
            .with_max_attempts(3)
            .with_delay(Duration::from_millis(5));
        let mut driver = RetryDriver::new(policy).unwrap();
        let start = std::time::Instant::now();
        let _ = driver.run(|_| Err("slow"));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
