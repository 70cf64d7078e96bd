//! # wodis-validate entry point
//!
//! Parses arguments, sets up tracing on stderr, and runs the validation.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wodis_cli::validate::{run_validate, ValidateArgs};

/// Validate WODIS example documents against wodis.schema.json.
#[derive(Parser, Debug)]
#[command(name = "wodis-validate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose diagnostics on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = cli.args.project_root();
    tracing::debug!(root = %root.display(), "resolved project root");

    let mut stdout = std::io::stdout().lock();
    match run_validate(&root, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
