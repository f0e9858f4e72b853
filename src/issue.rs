use serde::Serialize;

use crate::error::Result;

/// One reported finding, tied to a file and a 1-based line.
///
/// `line` is 1 when no specific line applies (file-wide findings). There is
/// no severity or category: the host platform layers those on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub file: String,
    pub line: usize,
    pub message: String,
}

impl Issue {
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Ordered sequence of issues in detection order: corpus file order, then
/// line order within a file, then check order within a line. Never sorted or
/// deduplicated after collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueReport {
    issues: Vec<Issue>,
}

impl IssueReport {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    #[must_use]
    pub const fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Encode the report as the output document.
    ///
    /// An empty report encodes as `{"issues":[]}`, never omitted or null.
    ///
    /// # Errors
    /// Returns a serialization error if JSON encoding fails.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
