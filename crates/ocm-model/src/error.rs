use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("label arity mismatch: {keys} keys but {values} values")]
    LabelArity { keys: usize, values: usize },

    #[error("unknown metric kind: {0}")]
    UnknownMetricKind(String),

    #[error("expected resource of kind {expected}, found {found:?}")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("failed to decode {kind}: {reason}")]
    Decode { kind: &'static str, reason: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
