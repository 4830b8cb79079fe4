//! External form-model documents referenced by a container's document path.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;

/// Port to the store holding form model documents (DAM assets in the
/// reference deployment). Implementations resolve a repository path to the
/// JSON object stored at that path.
pub trait DocumentResolver {
    fn resolve(&self, path: &str) -> Result<serde_json::Map<String, Value>>;
}

/// Filesystem-backed resolver: maps repository paths onto JSON files under a
/// root directory. A path like `/content/dam/formsanddocuments/demo.json`
/// resolves to `<root>/content/dam/formsanddocuments/demo.json`.
pub struct FsDocumentResolver {
    root: PathBuf,
}

impl FsDocumentResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentResolver for FsDocumentResolver {
    fn resolve(&self, path: &str) -> Result<serde_json::Map<String, Value>> {
        let file = self.root.join(path.trim_start_matches('/'));
        let raw = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read form model document at {}", file.display()))?;
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Form model document {} is not valid JSON", file.display()))?;
        match value {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!(
                "Form model document {} must be a JSON object, got {}",
                file.display(),
                match other {
                    Value::Array(_) => "an array",
                    Value::String(_) => "a string",
                    Value::Number(_) => "a number",
                    Value::Bool(_) => "a boolean",
                    _ => "null",
                }
            ),
        }
    }
}
