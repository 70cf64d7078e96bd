//! # wodis-cli — WODIS Example Validator
//!
//! Command-line front end for [`wodis_schema`]. The `wodis-validate` binary
//! takes no required arguments: it loads `wodis.schema.json` from the
//! project root, validates every example in `examples/` and
//! `examples/real-world/`, prints one line per file plus a summary, and
//! exits with 0 (all valid) or 1 (no examples, or any failure).
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; the run itself is
//!   [`validate::run_validate`], which writes to any `io::Write` so tests
//!   can capture the output.
//! - stdout carries only the report, byte for byte. Diagnostics go to
//!   stderr through `tracing`.
//! - Validation semantics belong to `wodis-schema`. Nothing is decided here.

pub mod validate;
