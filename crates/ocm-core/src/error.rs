use ocm_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The environment cannot support metric generation (e.g. the hub identity is unavailable).
    /// Not retried; the process entry point decides how to terminate.
    #[error("fatal configuration error: {0}")]
    FatalConfiguration(String),

    /// A generator received an object that is not of its resource kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl CoreError {
    /// Returns `true` for errors that must end the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CoreError::FatalConfiguration(_))
    }
}

impl From<ModelError> for CoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::KindMismatch { expected, found } => CoreError::TypeMismatch { expected, found },
            ModelError::Decode { kind, reason } => CoreError::TypeMismatch {
                expected: kind,
                found: format!("undecodable object ({reason})"),
            },
            other => CoreError::TypeMismatch {
                expected: "resource",
                found: other.to_string(),
            },
        }
    }
}
