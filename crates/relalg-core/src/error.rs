use thiserror::Error;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    Parameter(String),

    #[error("predicate failed: {0}")]
    Predicate(String),

    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Unsupported(e.to_string())
    }
}
