//! # Validate Command
//!
//! Checks every WODIS example against `wodis.schema.json` and writes the
//! report to stdout as it goes. The output format and exit codes are relied
//! on by CI jobs and must not drift.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use wodis_schema::{
    write_no_examples, ExampleDocument, ProjectLayout, ReportWriter, RunStatus, SchemaDocument,
    SchemaValidator,
};

/// Arguments for `wodis-validate`.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Project root containing wodis.schema.json and examples/.
    ///
    /// Defaults to the workspace root this tool was built from.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl ValidateArgs {
    /// The project root to validate.
    pub fn project_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_project_root)
    }
}

/// Two levels above this crate's manifest directory.
///
/// `crates/wodis-cli` sits two levels below the workspace root, which is
/// where `wodis.schema.json` and `examples/` live.
pub fn default_project_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // workspace root
    dir
}

/// Execute a validation run rooted at `root`, writing the report to `out`.
///
/// Returns the exit code: 0 when every example is valid, 1 when none were
/// found or at least one failed. Unreadable or unparsable inputs are
/// returned as errors.
pub fn run_validate<W: Write>(root: &Path, out: &mut W) -> Result<u8> {
    let layout = ProjectLayout::new(root);
    tracing::debug!(root = %layout.root().display(), "validating WODIS project");

    let schema = SchemaDocument::load(&layout.schema_path()).context("failed to load WODIS schema")?;
    tracing::info!(schema = %schema.path().display(), "loaded schema");

    let examples = layout
        .discover_examples()
        .context("failed to discover example files")?;
    tracing::info!(count = examples.len(), "discovered example files");

    if examples.is_empty() {
        write_no_examples(out)?;
        return Ok(RunStatus::NoExamples.exit_code());
    }

    let mut writer = ReportWriter::begin(&mut *out)?;

    let validator = SchemaValidator::compile(&schema).context("failed to compile WODIS schema")?;

    for path in &examples {
        let doc = ExampleDocument::load(path, &layout)
            .with_context(|| format!("failed to read example {}", path.display()))?;
        let result = writer.check(&validator, doc)?;
        tracing::debug!(
            path = %result.path.display(),
            pass = result.outcome.is_pass(),
            "checked example"
        );
    }

    let report = writer.finish()?;

    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        total = report.total(),
        "validation finished"
    );

    Ok(RunStatus::Completed(report).exit_code())
}
