use crate::corpus::Corpus;
use crate::issue::Issue;

use super::Rule;

const DEFAULT_MIN_LINES: usize = 3;

/// Flags files with fewer lines than a minimum, one issue per file at line 1.
pub struct MinFileLength {
    min_lines: usize,
}

impl MinFileLength {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_lines: DEFAULT_MIN_LINES,
        }
    }

    #[must_use]
    pub const fn with_min_lines(mut self, min_lines: usize) -> Self {
        self.min_lines = min_lines;
        self
    }
}

impl Default for MinFileLength {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for MinFileLength {
    fn name(&self) -> &'static str {
        "min-file-length"
    }

    fn evaluate(&self, corpus: &Corpus) -> Vec<Issue> {
        let mut issues = Vec::new();
        for file in &corpus.files {
            let count = file.lines.len();
            let min_lines = self.min_lines;
            if count < min_lines {
                issues.push(Issue::new(
                    &file.path,
                    1,
                    format!("File has only {count} lines, minimum is {min_lines} lines"),
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
#[path = "file_length_tests.rs"]
mod tests;
