use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeoError {
    #[error("unrecognized page kind \"{0}\"")]
    UnrecognizedPageKind(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("failed to serialize structured data: {0}")]
    Serialize(#[from] serde_json::Error),
}
