use serde::Deserialize;

use crate::error::{CorpusLintError, Result};

/// One unit under analysis.
///
/// `lines` is the line-split view used for 1-based reporting; `content` is the
/// full original text, carried separately so windowed substring searches that
/// span line breaks stay possible.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub lines: Vec<String>,
    pub content: String,
}

/// The full set of files submitted to one rule-evaluation invocation.
///
/// Constructed once from the input document and read-only thereafter.
/// Insertion order is preserved; duplicate paths are not detected.
#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    pub files: Vec<SourceFile>,

    /// Free-form per-rule options threaded through by the host. Decoded for
    /// schema compatibility; the built-in rules do not read it.
    #[serde(default)]
    pub options: Option<serde_json::Value>,

    /// Root directory of the host workspace, when the host supplies one.
    #[serde(default, rename = "workspaceRoot")]
    pub workspace_root: Option<String>,
}

impl Corpus {
    /// Decode an input document into a corpus.
    ///
    /// # Errors
    /// Returns `MalformedInput` when the document lacks a `files` collection
    /// or a file entry lacks `path`, `lines`, or `content`. The failure is
    /// total: no partial corpus is ever produced.
    pub fn decode(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| CorpusLintError::MalformedInput(e.to_string()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
