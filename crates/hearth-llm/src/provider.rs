use async_trait::async_trait;
use thiserror::Error;

use hearth_types::models::ChatMessage;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider answered with an error (quota, bad request, auth).
    #[error("{0}")]
    Api(String),

    /// The call itself failed (network, timeout, bad URL).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a completion with no content.
    #[error("No content generated")]
    Empty,

    /// The response could not be parsed as the expected shape.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Per-call knobs forwarded to the provider. Unset fields are omitted from
/// the request so the provider's defaults apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Ask the provider to return a JSON object instead of prose.
    pub json: bool,
}

/// The one seam between this system and a text-generation vendor. Adapters
/// take a full message list and return the completion text; they never
/// retry — a failed call is terminal for the request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        opts: GenerateOptions,
    ) -> Result<String, GenerationError>;
}
