use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormFillError {
    #[error("Invalid form mapping: {0}")]
    InvalidMapping(String),

    #[error("Form completion failed: {0}")]
    CompletionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FormFillError>;
