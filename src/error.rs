use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusLintError {
    /// The input document is structurally invalid: no `files` collection, or
    /// a file entry missing `path`, `lines`, or `content`.
    #[error("Malformed input document: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CorpusLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
