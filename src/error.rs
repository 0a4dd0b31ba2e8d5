// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummarizerError>;

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Summarization error: {0}")]
    Summarization(String),

    /// Retries exhausted; carries the last provider failure.
    #[error("Translation error: failed after {attempts} attempts: {message}")]
    Translation { attempts: u32, message: String },

    /// A single failed call to the translation provider.
    #[error("Translation provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SummarizerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SummarizerError::Validation(_))
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, SummarizerError::Translation { .. })
    }
}
