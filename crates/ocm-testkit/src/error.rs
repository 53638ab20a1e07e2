use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// A line with a label block that does not split into `name{labels}rest`.
    /// Points at the generator producing ill-formed text.
    #[error("failed to sort labels in {line:?}")]
    Malformed { line: String },

    /// Canonical forms differ; both are attached for diffing.
    #[error("expected a to equal b but got:\n{expected}\nand:\n{actual}")]
    Mismatch { expected: String, actual: String },
}
