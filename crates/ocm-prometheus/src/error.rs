use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("family {family} has kind {kind}, only gauge-like families can be exported")]
    UnsupportedKind { family: &'static str, kind: String },

    #[error("family {family} produced a record off its label schema: {found:?}")]
    Schema {
        family: &'static str,
        found: Vec<String>,
    },

    #[error("exposition is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
