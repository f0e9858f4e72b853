use regex::Regex;

use crate::corpus::{Corpus, SourceFile};
use crate::issue::Issue;

use super::Rule;

/// How far past an `apt-get update` line to look for a chained install.
///
/// A cheap proxy for "within the same instruction or shortly after"; kept as
/// a fixed span for parity with the existing rule fixtures.
const UPDATE_LOOKAHEAD_CHARS: usize = 500;

const MSG_LATEST_TAG: &str =
    "Avoid using ':latest' tag - use specific version for reproducibility";
const MSG_NO_TAG: &str = "No tag specified (defaults to ':latest') - use explicit version tag";
const MSG_APT_NO_YES: &str = "Add '-y' flag to apt-get install for non-interactive installs";
const MSG_UPDATE_ALONE: &str =
    "Combine 'apt-get update' with 'apt-get install' in same RUN to avoid cache issues";
const MSG_REMOTE_ADD: &str = "Use 'curl' or 'wget' instead of ADD for remote URLs";
const MSG_COPY_PARENT: &str = "Avoid copying from parent directories - restructure your build context";
const MSG_NO_USER: &str = "No USER instruction found - container will run as root";

/// Pattern-based Dockerfile heuristics.
///
/// These are deliberately line-local substring/regex matches, not a parsed
/// instruction grammar. Trigger conditions are load-bearing: downstream
/// fixtures depend on them, looseness included.
pub struct DockerfileBestPractices {
    latest_tag: Regex,
    untagged_from: Regex,
    remote_add: Regex,
}

impl DockerfileBestPractices {
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest_tag: Regex::new(r"(?i)FROM\s+\S+:latest\b").expect("Invalid regex"),
            // Case-sensitive: the untagged check only recognizes the
            // canonical upper-case FROM spelling.
            untagged_from: Regex::new(r"FROM\s+\S+\s*$").expect("Invalid regex"),
            remote_add: Regex::new(r"(?i)^ADD\s+https?://").expect("Invalid regex"),
        }
    }

    fn check_file(&self, file: &SourceFile, issues: &mut Vec<Issue>) {
        // Comment exclusion here is substring-based and differs from the
        // per-line comment skip below: `echo USER` counts, `# USER` does not.
        let has_user_instruction = file
            .lines
            .iter()
            .any(|line| line.contains("USER") && !line.trim().starts_with('#'));

        for (idx, line) in file.lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }
            self.check_line(file, line, trimmed, idx + 1, issues);
        }

        let from_count = file
            .lines
            .iter()
            .filter(|line| line.trim().to_uppercase().starts_with("FROM"))
            .count();
        if from_count > 0 && !has_user_instruction {
            issues.push(Issue::new(&file.path, 1, MSG_NO_USER));
        }
    }

    fn check_line(
        &self,
        file: &SourceFile,
        line: &str,
        trimmed: &str,
        number: usize,
        issues: &mut Vec<Issue>,
    ) {
        let upper = trimmed.to_uppercase();

        if self.latest_tag.is_match(line) {
            issues.push(Issue::new(&file.path, number, MSG_LATEST_TAG));
        }

        if self.untagged_from.is_match(line) && !line.contains(':') {
            issues.push(Issue::new(&file.path, number, MSG_NO_TAG));
        }

        if upper.starts_with("RUN") && line.contains("apt-get install") && !line.contains("-y") {
            issues.push(Issue::new(&file.path, number, MSG_APT_NO_YES));
        }

        if upper.starts_with("RUN")
            && line.contains("apt-get update")
            && !line.contains("apt-get install")
            && !install_follows(line, &file.content)
        {
            issues.push(Issue::new(&file.path, number, MSG_UPDATE_ALONE));
        }

        if self.remote_add.is_match(trimmed) {
            issues.push(Issue::new(&file.path, number, MSG_REMOTE_ADD));
        }

        if upper.starts_with("COPY") && line.contains("..") {
            issues.push(Issue::new(&file.path, number, MSG_COPY_PARENT));
        }
    }
}

/// Whether `&& apt-get install` appears within the fixed lookahead window of
/// `content` starting at the line's first occurrence.
///
/// When the line cannot be found in `content` (host sent inconsistent
/// `lines`/`content`) the window is treated as empty.
fn install_follows(line: &str, content: &str) -> bool {
    let Some(pos) = content.find(line) else {
        return false;
    };
    let window: String = content[pos..].chars().take(UPDATE_LOOKAHEAD_CHARS).collect();
    window.contains("&& apt-get install")
}

impl Default for DockerfileBestPractices {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for DockerfileBestPractices {
    fn name(&self) -> &'static str {
        "dockerfile-best-practices"
    }

    fn evaluate(&self, corpus: &Corpus) -> Vec<Issue> {
        let mut issues = Vec::new();
        for file in &corpus.files {
            self.check_file(file, &mut issues);
        }
        issues
    }
}

#[cfg(test)]
#[path = "dockerfile_tests.rs"]
mod tests;
