//! # Error Types
//!
//! Configuration errors abort a validation run. A document that fails the
//! schema is *not* an error: it is a [`ValidationOutcome::Fail`] recorded in
//! the report, and the run moves on to the next example.
//!
//! [`ValidationOutcome::Fail`]: crate::ValidationOutcome::Fail

use thiserror::Error;

/// Unrecoverable problems with the project layout, the schema, or an
/// example file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The schema file could not be read.
    #[error("failed to load schema {path}: {reason}")]
    SchemaLoad {
        /// Path of the schema file.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The schema file is not valid JSON.
    #[error("failed to parse schema {path}: {reason}")]
    SchemaParse {
        /// Path of the schema file.
        path: String,
        /// Parser diagnostic, including line and column.
        reason: String,
    },

    /// The schema is valid JSON but could not be compiled into a validator.
    #[error("failed to compile schema {path}: {reason}")]
    SchemaCompile {
        /// Path or identifier of the schema.
        path: String,
        /// Diagnostic from the `jsonschema` crate.
        reason: String,
    },

    /// An example file could not be read.
    #[error("failed to load example {path}: {reason}")]
    ExampleLoad {
        /// Path of the example file.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// An example file is not valid JSON.
    #[error("failed to parse example {path}: {reason}")]
    ExampleParse {
        /// Path of the example file.
        path: String,
        /// Parser diagnostic, including line and column.
        reason: String,
    },

    /// An existing example directory could not be listed.
    #[error("failed to list example directory {dir}: {reason}")]
    Discovery {
        /// The directory being scanned.
        dir: String,
        /// Human-readable reason for the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_load_display() {
        let err = ConfigError::SchemaLoad {
            path: "/repo/wodis.schema.json".to_string(),
            reason: "No such file or directory (os error 2)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("wodis.schema.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_example_parse_display() {
        let err = ConfigError::ExampleParse {
            path: "examples/broken.json".to_string(),
            reason: "EOF while parsing an object at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse example examples/broken.json: \
             EOF while parsing an object at line 1 column 1"
        );
    }

    #[test]
    fn test_discovery_display() {
        let err = ConfigError::Discovery {
            dir: "/repo/examples".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().starts_with("failed to list example directory"));
    }
}
