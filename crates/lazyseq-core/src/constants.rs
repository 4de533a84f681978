//! Constants for materialization bounds and process exit codes.

/// Maximum number of values `collect` will materialize from a sequence that
/// is not statically known to be finite and was given no explicit limit.
pub const DEFAULT_MATERIALIZE_BOUND: usize = 1_000_000;

/// Default first attempt number handed to a retry operation.
pub const FIRST_ATTEMPT: i64 = 1;

/// Process exit codes used by the `lazyseq` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid sequence or CLI configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Unbounded materialization of a sequence not known to terminate.
    pub const ERROR_NON_TERMINATING: i32 = 5;
    /// Fallback selection found no accepting candidate.
    pub const ERROR_NO_CANDIDATE: i32 = 6;
    /// A retried operation never succeeded.
    pub const ERROR_RETRY_EXHAUSTED: i32 = 7;
    /// Interrupted by the user.
    pub const ERROR_CANCELED: i32 = 130;
}
