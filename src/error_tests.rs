use super::*;

#[test]
fn malformed_input_display() {
    let err = CorpusLintError::MalformedInput("missing field `files`".to_string());
    assert_eq!(
        err.to_string(),
        "Malformed input document: missing field `files`"
    );
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: CorpusLintError = io_err.into();
    assert!(matches!(err, CorpusLintError::Io(_)));
    assert!(err.to_string().starts_with("IO error:"));
}

#[test]
fn serde_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: CorpusLintError = json_err.into();
    assert!(matches!(err, CorpusLintError::JsonSerialize(_)));
}
