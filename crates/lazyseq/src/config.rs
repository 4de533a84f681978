//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use lazyseq_core::{RangeConfig, RetryPolicy, SequenceError};

/// Which built-in sequence to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SequenceKind {
    /// Arithmetic range `start, start + step, ...` below `end`.
    Range,
    /// Fibonacci recurrence `0, 1, 1, 2, ...`.
    Fib,
}

/// lazyseq — resumable lazy sequences.
#[derive(Parser, Debug)]
#[command(name = "lazyseq", version, about)]
pub struct AppConfig {
    /// Sequence to run.
    #[arg(long, value_enum, default_value = "range", env = "LAZYSEQ_SEQ")]
    pub seq: SequenceKind,

    /// First value of a range.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub start: i64,

    /// Exclusive end of a range; omit for an unbounded range.
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Range step; must be non-zero.
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub step: i64,

    /// Maximum number of values to materialize.
    #[arg(short, long, env = "LAZYSEQ_LIMIT")]
    pub limit: Option<usize>,

    /// Send a reset signal on the K-th resume (1-based).
    #[arg(long, value_name = "K")]
    pub reset_at: Option<usize>,

    /// Comma-separated environment variables; print the first one that is set.
    #[arg(long, value_name = "VARS", conflicts_with_all = ["reset_at", "limit"])]
    pub select_env: Option<String>,

    /// Retry reading this file until it exists; print its contents.
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["select_env", "reset_at", "limit"]
    )]
    pub retry_file: Option<PathBuf>,

    /// Maximum read attempts for --retry-file; omit to retry until interrupted.
    #[arg(long, value_name = "N", requires = "retry_file")]
    pub max_attempts: Option<u64>,

    /// Pause between failed attempts (e.g. "250ms", "2s", "1m").
    #[arg(long, value_name = "DURATION", default_value = "0ms", value_parser = parse_duration)]
    pub retry_delay: Duration,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (values only, one per line).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Range configuration assembled from `--start`, `--end` and `--step`.
    #[must_use]
    pub fn range_config(&self) -> RangeConfig {
        RangeConfig {
            start: self.start,
            end: self.end,
            step: self.step,
        }
    }

    /// Retry policy assembled from `--max-attempts` and `--retry-delay`.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: self.retry_delay,
        }
    }

    /// Reject flag values that no sequence accepts.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.reset_at == Some(0) {
            return Err(SequenceError::Config("--reset-at is 1-based".into()));
        }
        self.retry_policy().validate()?;
        if let Some(vars) = &self.select_env {
            if env_candidates(vars).is_empty() {
                return Err(SequenceError::Config(
                    "--select-env needs at least one variable name".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Parse a duration string like "500ms", "30s", "5m", "1h"; a bare number
/// is seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (digits, unit_ms) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 1)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1_000)
    } else if let Some(mins) = s.strip_suffix('m') {
        (mins, 60_000)
    } else if let Some(hours) = s.strip_suffix('h') {
        (hours, 3_600_000)
    } else {
        (s, 1_000)
    };
    let n: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration: {s:?}"))?;
    n.checked_mul(unit_ms)
        .map(Duration::from_millis)
        .ok_or_else(|| format!("duration too large: {s:?}"))
}

/// Split a comma-separated variable list, dropping blanks.
#[must_use]
pub fn env_candidates(vars: &str) -> Vec<&str> {
    vars.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
