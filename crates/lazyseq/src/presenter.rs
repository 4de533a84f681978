//! Result presentation for text and JSON output.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

/// A materialized run, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceOutput {
    /// Sequence name.
    pub sequence: String,
    /// Number of values produced.
    pub count: usize,
    /// Produced values. Big integers are rendered as decimal strings.
    pub values: Vec<Value>,
}

impl SequenceOutput {
    pub fn new(sequence: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            sequence: sequence.into(),
            count: values.len(),
            values,
        }
    }
}

/// Writes outputs in the configured format.
pub struct Presenter {
    json: bool,
    quiet: bool,
}

impl Presenter {
    #[must_use]
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Present a materialized sequence.
    pub fn present_sequence(&self, out: &mut dyn Write, output: &SequenceOutput) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut *out, output)?;
            return writeln!(out);
        }

        if self.quiet {
            for value in &output.values {
                writeln!(out, "{}", render(value))?;
            }
            return Ok(());
        }

        writeln!(out, "Sequence: {}", output.sequence)?;
        writeln!(out, "Count: {}", output.count)?;
        let joined: Vec<String> = output.values.iter().map(render).collect();
        writeln!(out, "Values: [{}]", joined.join(", "))
    }

    /// Present the winning candidate of a fallback selection.
    pub fn present_selection(&self, out: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
        if self.json {
            let record = serde_json::json!({ "candidate": label, "value": value });
            serde_json::to_writer(&mut *out, &record)?;
            return writeln!(out);
        }
        if self.quiet {
            return writeln!(out, "{value}");
        }
        writeln!(out, "{label}={value}")
    }

    /// Present the contents obtained by a retried read.
    pub fn present_retry(
        &self,
        out: &mut dyn Write,
        path: &str,
        attempts: u64,
        contents: &str,
    ) -> io::Result<()> {
        if self.json {
            let record = serde_json::json!({
                "path": path,
                "attempts": attempts,
                "contents": contents,
            });
            serde_json::to_writer(&mut *out, &record)?;
            return writeln!(out);
        }
        if self.quiet {
            return write!(out, "{contents}");
        }
        writeln!(out, "{path} (after {attempts} attempts):")?;
        write!(out, "{contents}")
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
