//! Application entry point and dispatch.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use lazyseq_core::sink::TracingSink;
use lazyseq_core::{
    CancellationToken, Candidate, FallbackSequence, FibonacciSequence, RangeSequence,
    RetryDriver, RetryPolicy, Sequence,
};

use crate::config::{env_candidates, AppConfig, SequenceKind};
use crate::presenter::{Presenter, SequenceOutput};
use crate::schedule::ResetAt;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "lazyseq", &mut io::stdout());
        return Ok(());
    }

    config.validate()?;
    let presenter = Presenter::new(config.json, config.quiet);
    let mut stdout = io::stdout().lock();

    if let Some(vars) = &config.select_env {
        return run_select(vars, &presenter, &mut stdout);
    }

    if let Some(path) = &config.retry_file {
        let cancel = CancellationToken::new();
        ctrlc_handler(cancel.clone())?;
        return run_retry(path, config.retry_policy(), cancel, &presenter, &mut stdout);
    }

    let output = match config.seq {
        SequenceKind::Range => {
            let seq = RangeSequence::new(config.range_config())?;
            materialize(seq, config, |v| Value::from(*v))?
        }
        SequenceKind::Fib => {
            materialize(FibonacciSequence::new(), config, |v| Value::from(v.to_string()))?
        }
    };

    presenter.present_sequence(&mut stdout, &output)?;
    Ok(())
}

/// Collect `seq` under the configured limit and reset schedule.
fn materialize<S: Sequence>(
    mut seq: S,
    config: &AppConfig,
    to_json: impl Fn(&S::Item) -> Value,
) -> Result<SequenceOutput> {
    let name = seq.name().to_string();
    debug!(sequence = %name, limit = ?config.limit, reset_at = ?config.reset_at, "materializing");

    let values = match config.reset_at {
        Some(at) => ResetAt::new(seq, at).collect_values(config.limit)?,
        None => seq.collect_values(config.limit)?,
    };

    Ok(SequenceOutput::new(
        name,
        values.iter().map(to_json).collect(),
    ))
}

/// Print the first set, non-empty environment variable among `vars`.
fn run_select(vars: &str, presenter: &Presenter, out: &mut dyn Write) -> Result<()> {
    let names = env_candidates(vars);
    let candidates: Vec<Candidate<'_, (&str, String)>> = names
        .iter()
        .map(|&name| {
            Candidate::new(name, move || {
                debug!(variable = name, "reading candidate");
                std::env::var(name)
                    .ok()
                    .filter(|v| !v.is_empty())
                    .map(|v| (name, v))
            })
        })
        .collect();

    let (label, value) = FallbackSequence::new(candidates).select(&TracingSink)?;
    presenter.present_selection(out, label, &value)?;
    Ok(())
}

/// Read `path`, retrying once per attempt number until the read succeeds.
fn run_retry(
    path: &Path,
    policy: RetryPolicy,
    cancel: CancellationToken,
    presenter: &Presenter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut driver = RetryDriver::new(policy)?.with_cancellation(cancel);
    let mut contents = String::new();
    let report = driver.run(|attempt| {
        debug!(attempt, path = %path.display(), "reading");
        contents = std::fs::read_to_string(path)?;
        Ok::<(), io::Error>(())
    })?;

    presenter.present_retry(out, &path.display().to_string(), report.attempts, &contents)?;
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || cancel.cancel())?;
    Ok(())
}
