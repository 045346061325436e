pub mod extract;
pub mod response;

pub use extract::{ExtractionError, extract_definitions};
pub use response::RetrieveEntry;

/// Definition provider interface
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Fetch the raw definitions document for a word in the provider's
    /// source language
    async fn definitions(&self, word: &str) -> Result<RetrieveEntry, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("No entry found for {word:?}")]
    NotFound { word: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
