use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hearth_types::models::ChatMessage;

use crate::provider::{GenerateOptions, GenerationError, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

const QUOTA_MESSAGE: &str =
    "OpenAI API quota exceeded. Please try again later or contact support.";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Missing key is tolerated at construction; every call then fails with
    /// a provider error, so the rest of the API stays usable.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Adapter for an OpenAI-compatible chat-completion endpoint. The request
/// timeout bounds the only long-latency operation in the system; there is
/// no retry on failure.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        opts: GenerateOptions,
    ) -> Result<String, GenerationError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(GenerationError::Api("OPENAI_API_KEY is not set".into()));
        };

        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: opts.max_tokens,
            temperature: opts.temperature,
            response_format: opts.json.then_some(ResponseFormat { kind: "json_object" }),
        };

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "Calling chat completion endpoint"
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(%status, "Provider returned an error");

            // Prefer the structured error message; fall back to the raw body.
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(parsed) if parsed.error.code.as_deref() == Some("insufficient_quota") => {
                    QUOTA_MESSAGE.to_string()
                }
                Ok(parsed) => parsed.error.message,
                Err(_) => format!("provider error ({}): {}", status, text),
            };
            return Err(GenerationError::Api(message));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(content)
    }
}
