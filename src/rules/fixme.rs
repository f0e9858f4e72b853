use crate::corpus::Corpus;
use crate::issue::Issue;

use super::Rule;

const MSG_FIXME: &str = "FIXME/XXX comment found";

/// Flags lines carrying FIXME or XXX markers, case-insensitively.
pub struct FixmeComments;

impl FixmeComments {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FixmeComments {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for FixmeComments {
    fn name(&self) -> &'static str {
        "no-fixme-comments"
    }

    fn evaluate(&self, corpus: &Corpus) -> Vec<Issue> {
        let mut issues = Vec::new();
        for file in &corpus.files {
            for (idx, line) in file.lines.iter().enumerate() {
                let upper = line.to_uppercase();
                if upper.contains("FIXME") || upper.contains("XXX") {
                    issues.push(Issue::new(&file.path, idx + 1, MSG_FIXME));
                }
            }
        }
        issues
    }
}

#[cfg(test)]
#[path = "fixme_tests.rs"]
mod tests;
