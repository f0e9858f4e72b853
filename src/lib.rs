pub mod corpus;
pub mod engine;
pub mod error;
pub mod issue;
pub mod rules;

pub use error::{CorpusLintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
