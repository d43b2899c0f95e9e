//! Build artifacts: the platform-specific file trees produced by emitters.
//!
//! A `BuildArtifact` is owned exclusively by the emitter that created it
//! and is immutable once produced. Redeploys and republishes reference the
//! same artifact; a changed model means a new emission and a new artifact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{error::DomainError, value_objects::TargetKind};

/// An ordered mapping from relative path to file content.
///
/// `BTreeMap` keeps iteration order stable, which is what makes emission
/// byte-for-byte reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTree {
    files: BTreeMap<String, String>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. Later inserts under the same path overwrite.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Validate that every path is relative and non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        for path in self.files.keys() {
            if path.is_empty() || path.starts_with('/') {
                return Err(DomainError::InvalidModel(format!(
                    "artifact path must be relative and non-empty: '{path}'"
                )));
            }
        }
        Ok(())
    }
}

/// The output of one emitter run for one `(SiteModel, TargetKind)` pair.
///
/// Fields are private; an artifact cannot be mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildArtifact {
    id: String,
    target: TargetKind,
    source_model_id: String,
    files: FileTree,
}

impl BuildArtifact {
    pub(crate) fn new(
        target: TargetKind,
        source_model_id: impl Into<String>,
        files: FileTree,
    ) -> Result<Self, DomainError> {
        files.validate()?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            target,
            source_model_id: source_model_id.into(),
            files,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target(&self) -> TargetKind {
        self.target
    }

    pub fn source_model_id(&self) -> &str {
        &self.source_model_id
    }

    pub fn files(&self) -> &FileTree {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_rejected() {
        let tree = FileTree::new().with_file("/etc/passwd", "nope");
        assert!(BuildArtifact::new(TargetKind::Web, "m1", tree).is_err());
    }

    #[test]
    fn file_tree_iteration_is_sorted() {
        let mut tree = FileTree::new();
        tree.insert("b.txt", "b");
        tree.insert("a.txt", "a");
        let paths: Vec<&str> = tree.paths().collect();
        assert_eq!(paths, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn insert_overwrites_same_path() {
        let mut tree = FileTree::new();
        tree.insert("index.html", "v1");
        tree.insert("index.html", "v2");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("index.html"), Some("v2"));
    }
}
