//! Error handling and exit codes.

use lazyseq_core::constants::exit_codes;
use lazyseq_core::{RetryError, SequenceError};

/// Map a sequence error to its process exit code.
#[must_use]
pub fn exit_code(err: &SequenceError) -> i32 {
    match err {
        SequenceError::Config(_) => exit_codes::ERROR_CONFIG,
        SequenceError::NonTerminating { .. } => exit_codes::ERROR_NON_TERMINATING,
        SequenceError::NoAcceptingCandidate { .. } => exit_codes::ERROR_NO_CANDIDATE,
    }
}

/// Map a failed retried read to its process exit code.
#[must_use]
pub fn retry_exit_code<E>(err: &RetryError<E>) -> i32 {
    match err {
        RetryError::Exhausted { .. } | RetryError::NoAttempts => exit_codes::ERROR_RETRY_EXHAUSTED,
        RetryError::Cancelled { .. } => exit_codes::ERROR_CANCELED,
    }
}

/// Exit status for any application error; unrecognized errors are generic.
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let code = if let Some(seq) = err.downcast_ref::<SequenceError>() {
        exit_code(seq)
    } else if let Some(retry) = err.downcast_ref::<RetryError<std::io::Error>>() {
        retry_exit_code(retry)
    } else {
        exit_codes::ERROR_GENERIC
    };
    u8::try_from(code).unwrap_or(1)
}
