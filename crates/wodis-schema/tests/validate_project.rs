//! Integration test: discover, load, and validate a complete WODIS project
//! tree through the library API, without the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use wodis_schema::{
    validate_examples, ExampleDocument, ProjectLayout, RunStatus, SchemaValidator,
    ValidationOutcome,
};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small project whose schema pulls a shared definition from a sibling file.
fn sample_project() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();

    write(
        &root.join("identifier.schema.json"),
        &json!({"type": "string", "pattern": "^WOD-[0-9]{4}$"}).to_string(),
    );
    write(
        &root.join("wodis.schema.json"),
        &json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://wodis.example/schemas/wodis.schema.json",
            "type": "object",
            "required": ["id", "kind"],
            "properties": {
                "id": {"$ref": "identifier.schema.json"},
                "kind": {"enum": ["well", "platform"]}
            }
        })
        .to_string(),
    );

    write(
        &root.join("examples/minimal.json"),
        r#"{"id": "WOD-0001", "kind": "well"}"#,
    );
    write(
        &root.join("examples/bad-id.json"),
        r#"{"id": "WOD-1", "kind": "well"}"#,
    );
    write(
        &root.join("examples/real-world/north-sea.json"),
        r#"{"id": "WOD-2024", "kind": "platform"}"#,
    );
    write(&root.join("examples/real-world/README.txt"), "not an example");

    tmp
}

fn load_all(layout: &ProjectLayout) -> Vec<ExampleDocument> {
    layout
        .discover_examples()
        .unwrap()
        .iter()
        .map(|p| ExampleDocument::load(p, layout).unwrap())
        .collect()
}

#[test]
fn test_full_project_pipeline() {
    let tmp = sample_project();
    let layout = ProjectLayout::new(tmp.path());
    let validator = SchemaValidator::from_file(&layout.schema_path()).unwrap();

    let mut out = Vec::new();
    let status = validate_examples(&validator, load_all(&layout), &mut out).unwrap();
    let RunStatus::Completed(report) = &status else {
        panic!("expected examples to be discovered");
    };

    let paths: Vec<PathBuf> = report.results().iter().map(|r| r.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("examples/bad-id.json"),
            PathBuf::from("examples/minimal.json"),
            PathBuf::from("examples/real-world/north-sea.json"),
        ]
    );

    assert!(matches!(
        report.results()[0].outcome,
        ValidationOutcome::Fail { .. }
    ));
    assert_eq!(report.results()[1].outcome, ValidationOutcome::Pass);
    assert_eq!(report.results()[2].outcome, ValidationOutcome::Pass);
    assert_eq!(report.passed(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(status.exit_code(), 1);

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Validating WODIS examples against schema...\n  examples/bad-id.json: FAIL\n"));
    assert!(out.ends_with("\n\n2/3 examples valid, 1 failed.\n"));
}

#[test]
fn test_fixing_the_failure_gives_exit_zero() {
    let tmp = sample_project();
    fs::remove_file(tmp.path().join("examples/bad-id.json")).unwrap();

    let layout = ProjectLayout::new(tmp.path());
    let validator = SchemaValidator::from_file(&layout.schema_path()).unwrap();
    let mut out = Vec::new();
    let status = validate_examples(&validator, load_all(&layout), &mut out).unwrap();

    assert_eq!(status.exit_code(), 0);
    assert!(String::from_utf8(out).unwrap().ends_with("\n\n2/2 examples valid.\n"));
}

#[test]
fn test_project_without_examples() {
    let tmp = tempfile::tempdir().unwrap();
    write(&tmp.path().join("wodis.schema.json"), "{}");

    let layout = ProjectLayout::new(tmp.path());
    let validator = SchemaValidator::from_file(&layout.schema_path()).unwrap();
    let mut out = Vec::new();
    let status = validate_examples(&validator, load_all(&layout), &mut out).unwrap();

    assert!(matches!(status, RunStatus::NoExamples));
    assert_eq!(status.exit_code(), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "No example files found.\n");
}
