//! # Validation Report
//!
//! Collects per-example outcomes and renders the run output. The format is
//! consumed by CI scripts, so it is reproduced byte for byte:
//!
//! ```text
//! Validating WODIS examples against schema...
//!   examples/a.json: PASS
//!   examples/b.json: FAIL
//!     "id" is a required property
//!
//! 1/2 examples valid, 1 failed.
//! ```
//!
//! [`ReportWriter`] owns the per-example step (check, print, count) and is
//! shared by [`validate_examples`] and callers that load documents lazily.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ConfigError;
use crate::layout::ProjectLayout;
use crate::validate::{SchemaValidator, ValidationOutcome};

/// First line printed once at least one example has been discovered.
pub const HEADER: &str = "Validating WODIS examples against schema...";

/// Sole output line when discovery finds nothing.
pub const NO_EXAMPLES: &str = "No example files found.";

/// A parsed example document.
#[derive(Debug, Clone)]
pub struct ExampleDocument {
    /// Path relative to the project root, used in output lines.
    pub path: PathBuf,
    /// Parsed JSON content.
    pub value: Value,
}

impl ExampleDocument {
    /// Create a document from an already-parsed value.
    pub fn new(path: impl Into<PathBuf>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }

    /// Read and parse the example at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ExampleLoad`] if the file cannot be read and
    /// [`ConfigError::ExampleParse`] if it is not valid JSON. Both are fatal
    /// for the run.
    pub fn load(path: &Path, layout: &ProjectLayout) -> Result<Self, ConfigError> {
        let relative = layout.relative_path(path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ExampleLoad {
            path: relative.display().to_string(),
            reason: e.to_string(),
        })?;

        let value = serde_json::from_str(&content).map_err(|e| ConfigError::ExampleParse {
            path: relative.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::new(relative, value))
    }
}

/// Outcome for one example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleResult {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Pass, or fail with the most relevant violation.
    pub outcome: ValidationOutcome,
}

/// Accumulated outcomes of a run, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    results: Vec<ExampleResult>,
    passed: usize,
    failed: usize,
}

impl ValidationReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result, bump the matching counter, and return the stored
    /// result.
    pub fn record(&mut self, result: ExampleResult) -> &ExampleResult {
        if result.outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        let index = self.results.len();
        self.results.push(result);
        &self.results[index]
    }

    /// All recorded results, in order.
    pub fn results(&self) -> &[ExampleResult] {
        &self.results
    }

    /// Number of passing examples.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failing examples.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Number of examples checked. Always `passed + failed`.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// True when at least one example was checked and none failed.
    pub fn is_success(&self) -> bool {
        self.total() > 0 && self.failed == 0
    }

    /// Process exit code for this report: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// How a run ended, short of a fatal error.
#[derive(Debug, Clone)]
pub enum RunStatus {
    /// Discovery found no example files. Nothing was validated.
    NoExamples,
    /// Every discovered example was checked.
    Completed(ValidationReport),
}

impl RunStatus {
    /// 0 only for a completed run without failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NoExamples => 1,
            Self::Completed(report) => report.exit_code(),
        }
    }
}

/// Write the sole output of a run that found no examples.
pub fn write_no_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NO_EXAMPLES}")?;
    out.flush()
}

/// Streams a run's output while the report is built.
///
/// [`ReportWriter::begin`] prints the header, [`ReportWriter::check`]
/// validates one document and prints its result line(s) immediately, and
/// [`ReportWriter::finish`] prints the summary. Each line is written as soon
/// as it is known, so a fatal error between documents leaves the lines
/// already produced in place.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
    report: ValidationReport,
}

impl<W: Write> ReportWriter<W> {
    /// Write the header line and start an empty report.
    pub fn begin(mut out: W) -> io::Result<Self> {
        writeln!(out, "{HEADER}")?;
        Ok(Self {
            out,
            report: ValidationReport::new(),
        })
    }

    /// Validate `doc`, write its result, and record it.
    pub fn check(
        &mut self,
        validator: &SchemaValidator,
        doc: ExampleDocument,
    ) -> io::Result<&ExampleResult> {
        let result = ExampleResult {
            outcome: validator.check(&doc.value),
            path: doc.path,
        };
        write_result(&mut self.out, &result)?;
        Ok(self.report.record(result))
    }

    /// The report so far.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Write the summary, flush, and hand back the finished report.
    pub fn finish(mut self) -> io::Result<ValidationReport> {
        write_summary(&mut self.out, &self.report)?;
        self.out.flush()?;
        Ok(self.report)
    }
}

fn write_result<W: Write>(out: &mut W, result: &ExampleResult) -> io::Result<()> {
    let path = result.path.display();
    match &result.outcome {
        ValidationOutcome::Pass => writeln!(out, "  {path}: PASS"),
        ValidationOutcome::Fail { message } => {
            writeln!(out, "  {path}: FAIL")?;
            writeln!(out, "    {message}")
        }
    }
}

fn write_summary<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    let total = report.total();
    writeln!(out)?;
    if report.failed() > 0 {
        writeln!(
            out,
            "{}/{total} examples valid, {} failed.",
            report.passed(),
            report.failed()
        )
    } else {
        writeln!(out, "{total}/{total} examples valid.")
    }
}

/// Check every document against the schema, in order, writing the run
/// output to `out`.
///
/// The only I/O is the writes to `out`, so callers can pass an in-memory
/// buffer. An empty input yields [`RunStatus::NoExamples`].
pub fn validate_examples<I, W>(
    validator: &SchemaValidator,
    documents: I,
    out: &mut W,
) -> io::Result<RunStatus>
where
    I: IntoIterator<Item = ExampleDocument>,
    W: Write,
{
    let mut documents = documents.into_iter().peekable();
    if documents.peek().is_none() {
        write_no_examples(out)?;
        return Ok(RunStatus::NoExamples);
    }

    let mut writer = ReportWriter::begin(out)?;
    for doc in documents {
        writer.check(validator, doc)?;
    }
    Ok(RunStatus::Completed(writer.finish()?))
}
