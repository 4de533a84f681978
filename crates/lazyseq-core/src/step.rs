//! The `(value, done)` pair produced by every resume.

use serde::Serialize;

/// Result of a single resume call.
///
/// A step either carries a value (`done == false`) or marks exhaustion
/// (`done == true`, no value). No sequence in this crate attaches a final
/// sentinel value to the terminal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult<T> {
    value: Option<T>,
    done: bool,
}

impl<T> StepResult<T> {
    /// A step that produced `value`.
    #[must_use]
    pub fn yielded(value: T) -> Self {
        Self {
            value: Some(value),
            done: false,
        }
    }

    /// The terminal step.
    #[must_use]
    pub fn done() -> Self {
        Self {
            value: None,
            done: true,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Borrow the produced value, `None` on the terminal step.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Take the produced value, `None` on the terminal step.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Map the carried value, preserving `done`.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StepResult<U> {
        StepResult {
            value: self.value.map(f),
            done: self.done,
        }
    }
}
