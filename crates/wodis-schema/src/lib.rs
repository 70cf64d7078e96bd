//! # wodis-schema — WODIS Example Validation
//!
//! Checks the example documents of a WODIS project against
//! `wodis.schema.json` and produces a pass/fail report.
//!
//! ## Modules
//!
//! - [`layout`]: the fixed project layout and deterministic discovery of
//!   `examples/*.json` and `examples/real-world/*.json`.
//! - [`validate`]: schema loading and compilation through the `jsonschema`
//!   crate, with offline `$ref` resolution.
//! - [`report`]: per-example outcomes, counters, exit codes, and the
//!   streaming writer that owns the exact output format.
//! - [`error`]: configuration errors that abort a run.
//!
//! ## Crate Policy
//!
//! - JSON Schema semantics belong to the `jsonschema` crate. Nothing here
//!   interprets keywords.
//! - A document that violates the schema is a [`ValidationOutcome::Fail`],
//!   never an `Err`. Only unreadable or unparsable inputs are errors.
//! - No network access: remote `$ref` URIs are not fetched.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod layout;
pub mod report;
pub mod validate;

pub use error::ConfigError;
pub use layout::{ProjectLayout, EXAMPLE_DIRS, SCHEMA_FILENAME};
pub use report::{
    validate_examples, write_no_examples, ExampleDocument, ExampleResult, ReportWriter, RunStatus,
    ValidationReport, HEADER, NO_EXAMPLES,
};
pub use validate::{SchemaDocument, SchemaValidator, ValidationOutcome};
