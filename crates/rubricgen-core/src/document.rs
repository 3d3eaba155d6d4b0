//! Source document loading and fingerprinting

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{RubricError, Result};

/// Number of hex characters of the digest shown in the rubric header
pub const FINGERPRINT_LEN: usize = 12;

/// Full SHA-256 hex digest of the document text
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Leading [`FINGERPRINT_LEN`] characters of a fingerprint
pub fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..FINGERPRINT_LEN).unwrap_or(fingerprint)
}

/// Make `path` absolute and normalized.
///
/// Each existing prefix is canonicalized, so symlinked ancestors resolve;
/// `.` and `..` are applied lexically once the path leaves the filesystem.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(real) = fs::canonicalize(&resolved) {
                    resolved = real;
                }
            }
            root => resolved.push(root),
        }
    }
    Ok(resolved)
}

/// A policy document read once per run
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
    pub fingerprint: String,
}

impl Document {
    /// Build a document from text already in memory
    pub fn from_content(path: impl Into<PathBuf>, content: String) -> Self {
        let fingerprint = fingerprint(&content);
        Self {
            path: path.into(),
            content,
            fingerprint,
        }
    }

    /// Read a document, failing with [`RubricError::SourceNotFound`] if it is absent
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RubricError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let doc = Self::from_content(path, content);
        tracing::debug!(
            path = %doc.path.display(),
            bytes = doc.content.len(),
            fingerprint = doc.short_fingerprint(),
            "read_source"
        );
        Ok(doc)
    }

    pub fn short_fingerprint(&self) -> &str {
        short_fingerprint(&self.fingerprint)
    }
}
