//! # Project Layout & Example Discovery
//!
//! A WODIS project root holds the schema at its top level and example
//! documents in two fixed directories:
//!
//! ```text
//! <root>/wodis.schema.json
//! <root>/examples/*.json
//! <root>/examples/real-world/*.json
//! ```
//!
//! Either example directory may be absent. Discovery order is deterministic:
//! lexicographic within each directory, `examples/` before
//! `examples/real-world/`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Schema filename, relative to the project root.
pub const SCHEMA_FILENAME: &str = "wodis.schema.json";

/// Example directories, relative to the project root, in discovery order.
pub const EXAMPLE_DIRS: [&str; 2] = ["examples", "examples/real-world"];

/// File extension matched by discovery (`*.json`).
const EXAMPLE_EXTENSION: &str = ".json";

/// Fixed paths of a WODIS project rooted at a directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`. Nothing is touched on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (or root-relative) path of `wodis.schema.json`.
    pub fn schema_path(&self) -> PathBuf {
        self.root.join(SCHEMA_FILENAME)
    }

    /// Candidate example directories, in discovery order.
    pub fn example_dirs(&self) -> Vec<PathBuf> {
        EXAMPLE_DIRS.iter().map(|d| self.root.join(d)).collect()
    }

    /// Strip the project root from `path` for display.
    ///
    /// Paths outside the root are returned unchanged.
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    /// Collect every `*.json` file in the example directories.
    ///
    /// Directories that do not exist are skipped. Each directory's matches
    /// are sorted by name, and the per-directory lists are concatenated in
    /// [`EXAMPLE_DIRS`] order. Only direct children are considered; files
    /// inside `examples/real-world/` are never picked up by the scan of
    /// `examples/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Discovery`] if a directory exists but cannot
    /// be listed.
    pub fn discover_examples(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut examples = Vec::new();
        for dir in self.example_dirs() {
            if dir.is_dir() {
                examples.extend(Self::json_files_in(&dir)?);
            }
        }
        Ok(examples)
    }

    fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let discovery_error = |e: std::io::Error| ConfigError::Discovery {
            dir: dir.display().to_string(),
            reason: e.to_string(),
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(discovery_error)? {
            let path = entry.map_err(discovery_error)?.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .is_some_and(|n| n.as_encoded_bytes().ends_with(EXAMPLE_EXTENSION.as_bytes()));
            if matches {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
