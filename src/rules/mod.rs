mod dockerfile;
mod file_length;
mod fixme;

pub use dockerfile::DockerfileBestPractices;
pub use file_length::MinFileLength;
pub use fixme::FixmeComments;

use crate::corpus::Corpus;
use crate::issue::Issue;

/// An independent, stateless check producing zero or more issues from a
/// corpus.
///
/// Rules never observe each other and hold only their own named
/// configuration values, so a host scheduler may evaluate them in any order
/// or in parallel and concatenate the reports.
pub trait Rule {
    fn name(&self) -> &'static str;

    /// Scan the whole corpus and return issues in detection order: file
    /// order, then line order within a file, then check order within a line.
    fn evaluate(&self, corpus: &Corpus) -> Vec<Issue>;
}

/// The fixed built-in battery, in registration order.
#[must_use]
pub fn built_in_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DockerfileBestPractices::new()),
        Box::new(MinFileLength::new()),
        Box::new(FixmeComments::new()),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
