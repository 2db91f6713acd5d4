mod prompt;

pub use prompt::PromptTemplate;

/// Text generation provider interface
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Produce raw text for a rendered prompt.
    ///
    /// Synchronous from the session's point of view; a failure is
    /// surfaced as-is, never retried here.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Authentication,

    #[error("Provider returned no text")]
    EmptyResponse,
}
