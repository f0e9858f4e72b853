use crate::corpus::Corpus;
use crate::error::Result;
use crate::issue::IssueReport;
use crate::rules::Rule;

/// Run each rule over the whole corpus in the given order and concatenate
/// the reports rule-major. Within one rule, issues keep their detection
/// order (file order, then line order, then check order).
#[must_use]
pub fn evaluate(rules: &[Box<dyn Rule>], corpus: &Corpus) -> IssueReport {
    let mut issues = Vec::new();
    for rule in rules {
        issues.extend(rule.evaluate(corpus));
    }
    IssueReport::from_issues(issues)
}

/// The single pure transform the host calls: decode the input document, run
/// the rules, encode the issue report.
///
/// # Errors
/// Returns `MalformedInput` when the input document is structurally invalid;
/// no partial output is produced.
pub fn run(rules: &[Box<dyn Rule>], input: &str) -> Result<String> {
    let corpus = Corpus::decode(input)?;
    let report = evaluate(rules, &corpus);
    report.encode()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
