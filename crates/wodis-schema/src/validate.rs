//! # Schema Validation
//!
//! Compiles `wodis.schema.json` once with the `jsonschema` crate and checks
//! example documents against it. The draft is taken from the schema's
//! `$schema` keyword, defaulting to 2020-12.
//!
//! Remote `$ref` URIs are never fetched. `LocalSchemaRetriever` resolves
//! a reference by its last path segment against the directory holding the
//! schema file, and fails compilation for anything else.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;

use crate::error::ConfigError;

/// Result of checking one document against the schema.
///
/// A failed check is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The document conforms to the schema.
    Pass,
    /// The document violates the schema.
    Fail {
        /// Message of the most relevant violation.
        message: String,
    },
}

impl ValidationOutcome {
    /// Returns true for [`ValidationOutcome::Pass`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Resolves `$ref` URIs to sibling schema files on disk.
struct LocalSchemaRetriever {
    /// Directory containing the root schema, if it came from a file.
    schema_dir: Option<PathBuf>,
}

impl jsonschema::Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let without_fragment = uri_str.split('#').next().unwrap_or(uri_str);
        let filename = without_fragment.rsplit('/').next().unwrap_or(without_fragment);

        let Some(dir) = &self.schema_dir else {
            return Err(format!("cannot resolve {uri_str}: no local schema directory").into());
        };
        if filename.is_empty() || filename == "." || filename == ".." {
            return Err(format!("cannot resolve {uri_str}: no filename in URI").into());
        }

        let candidate = dir.join(filename);
        if !candidate.is_file() {
            return Err(format!(
                "cannot resolve {uri_str}: {} does not exist and remote references are not fetched",
                candidate.display()
            )
            .into());
        }

        let content = std::fs::read_to_string(&candidate)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// The parsed, not yet compiled, schema file.
///
/// Loading and compiling are separate steps: a run that discovers no
/// examples never compiles the schema, so a structurally invalid schema
/// only surfaces once there is something to validate.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    path: PathBuf,
    value: Value,
}

impl SchemaDocument {
    /// Read and parse the schema at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::SchemaLoad`] if the file cannot be read.
    /// - [`ConfigError::SchemaParse`] if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SchemaLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let value = serde_json::from_str(&content).map_err(|e| ConfigError::SchemaParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    /// Path the schema was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed schema.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A compiled WODIS schema.
pub struct SchemaValidator {
    /// Where the schema came from, for diagnostics.
    source: String,
    validator: Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("source", &self.source)
            .finish()
    }
}

impl SchemaValidator {
    /// Load, parse, and compile the schema at `path`.
    ///
    /// # Errors
    ///
    /// Any error of [`SchemaDocument::load`] or [`SchemaValidator::compile`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::compile(&SchemaDocument::load(path)?)
    }

    /// Compile a loaded schema file.
    ///
    /// Sibling files of the schema are available for `$ref` resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaCompile`] if the document is not a
    /// usable JSON Schema.
    pub fn compile(document: &SchemaDocument) -> Result<Self, ConfigError> {
        Self::build(
            document.value(),
            document.path().display().to_string(),
            document.path().parent().map(Path::to_path_buf),
        )
    }

    /// Compile an in-memory schema. External `$ref`s cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaCompile`] if the value is not a usable
    /// JSON Schema.
    pub fn from_value(schema: &Value) -> Result<Self, ConfigError> {
        Self::build(schema, "<in-memory schema>".to_string(), None)
    }

    fn build(
        schema: &Value,
        source: String,
        schema_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let retriever = LocalSchemaRetriever { schema_dir };

        let validator = jsonschema::options()
            .with_retriever(retriever)
            .build(schema)
            .map_err(|e| ConfigError::SchemaCompile {
                path: source.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { source, validator })
    }

    /// Where the schema was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check `instance` against the schema.
    ///
    /// When several violations are found, the most relevant one is reported
    /// (see `Relevance`); the rest are dropped.
    pub fn check(&self, instance: &Value) -> ValidationOutcome {
        let best = self
            .validator
            .iter_errors(instance)
            .map(|err| (Relevance::of(&err), err.to_string()))
            .reduce(|best, next| if next.0 > best.0 { next } else { best });

        match best {
            None => ValidationOutcome::Pass,
            Some((_, message)) => ValidationOutcome::Fail { message },
        }
    }
}

/// Keywords whose failure only says "none of the alternatives matched".
const WEAK_KEYWORDS: [&str; 2] = ["anyOf", "oneOf"];

/// Ranking used to pick the primary violation of a document.
///
/// Errors closer to the document root win, and at equal depth an
/// `anyOf`/`oneOf` failure loses to any other keyword. Ties keep the error
/// reported first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Relevance {
    shallowness: Reverse<usize>,
    strong: bool,
}

impl Relevance {
    fn of(err: &jsonschema::ValidationError<'_>) -> Self {
        // JSON Pointer escapes `/` inside tokens, so separators count depth.
        let depth = err.instance_path.to_string().matches('/').count();
        let schema_path = err.schema_path.to_string();
        let keyword = schema_path.rsplit('/').next().unwrap_or_default();
        Self {
            shallowness: Reverse(depth),
            strong: !WEAK_KEYWORDS.contains(&keyword),
        }
    }
}
