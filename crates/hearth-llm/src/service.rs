use std::sync::Arc;

use hearth_types::api::{GenerationRequest, PropertyAnalysis};
use hearth_types::models::ChatMessage;

use crate::prompts;
use crate::provider::{GenerateOptions, GenerationError, TextGenerator};

/// Stateless façade over the text-generation provider: one method per use
/// case, each building its own prompt. Holds no memory between calls.
#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Client-facing listing summary from the agent's form input.
    pub async fn listing_summary(
        &self,
        req: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        let messages = [
            ChatMessage::system(prompts::SUMMARY_SYSTEM),
            ChatMessage::user(prompts::listing_summary_prompt(req)),
        ];
        let opts = GenerateOptions {
            max_tokens: Some(1000),
            temperature: Some(0.7),
            json: false,
        };
        let text = self.provider.generate(&messages, opts).await?;
        Ok(text.trim().to_string())
    }

    /// Free-form assistant chat. Prepends one synthetic system message and
    /// forwards the caller's transcript verbatim — never mutated, never
    /// reordered.
    pub async fn chat(
        &self,
        transcript: &[ChatMessage],
        context: Option<&str>,
    ) -> Result<String, GenerationError> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(ChatMessage::system(prompts::chat_system_message(context)));
        messages.extend_from_slice(transcript);

        let text = self
            .provider
            .generate(&messages, GenerateOptions::default())
            .await?;
        Ok(text.trim().to_string())
    }

    /// Structured market analysis for a listing. The provider is asked for a
    /// JSON object; anything that does not parse as the expected shape is a
    /// `Malformed` error — no schema validation beyond parsing.
    pub async fn analyze_property(
        &self,
        details: &str,
    ) -> Result<PropertyAnalysis, GenerationError> {
        let messages = [
            ChatMessage::system(prompts::ANALYST_SYSTEM),
            ChatMessage::user(prompts::analysis_prompt(details)),
        ];
        let opts = GenerateOptions {
            json: true,
            ..GenerateOptions::default()
        };
        let raw = self.provider.generate(&messages, opts).await?;
        serde_json::from_str(&raw).map_err(|e| GenerationError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use hearth_types::models::ChatRole;

    /// Records every call and replays a canned response.
    struct RecordingGenerator {
        reply: String,
        calls: Mutex<Vec<(Vec<ChatMessage>, GenerateOptions)>>,
    }

    impl RecordingGenerator {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn last_call(&self) -> (Vec<ChatMessage>, GenerateOptions) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(
            &self,
            messages: &[ChatMessage],
            opts: GenerateOptions,
        ) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push((messages.to_vec(), opts));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn chat_sends_transcript_plus_one_system_message() {
        let provider = RecordingGenerator::replying("sure");
        let service = GenerationService::new(provider.clone());

        let transcript = vec![
            ChatMessage::user("show me lofts"),
            ChatMessage {
                role: ChatRole::Assistant,
                content: "Here are two lofts.".into(),
            },
            ChatMessage::user("which is cheaper?"),
        ];
        service.chat(&transcript, None).await.unwrap();

        let (sent, _) = provider.last_call();
        assert_eq!(sent.len(), transcript.len() + 1);
        assert_eq!(sent[0].role, ChatRole::System);
        assert_eq!(&sent[1..], &transcript[..]);
    }

    #[tokio::test]
    async fn chat_context_lands_in_the_system_message() {
        let provider = RecordingGenerator::replying("ok");
        let service = GenerationService::new(provider.clone());

        service
            .chat(&[ChatMessage::user("hi")], Some("Focus on Beverly Hills."))
            .await
            .unwrap();

        let (sent, _) = provider.last_call();
        assert!(sent[0].content.contains("Focus on Beverly Hills."));
    }

    #[tokio::test]
    async fn listing_summary_trims_and_sets_options() {
        let provider = RecordingGenerator::replying("  A lovely home.\n");
        let service = GenerationService::new(provider.clone());

        let out = service
            .listing_summary(&GenerationRequest::default())
            .await
            .unwrap();
        assert_eq!(out, "A lovely home.");

        let (_, opts) = provider.last_call();
        assert_eq!(opts.max_tokens, Some(1000));
        assert_eq!(opts.temperature, Some(0.7));
        assert!(!opts.json);
    }

    #[tokio::test]
    async fn analyze_parses_the_expected_shape() {
        let provider = RecordingGenerator::replying(
            r#"{"recommendations":["stage the patio"],"marketAnalysis":"hot market","priceEstimate":{"value":900000,"range":{"min":850000,"max":950000}}}"#,
        );
        let service = GenerationService::new(provider.clone());

        let analysis = service.analyze_property("2bd loft").await.unwrap();
        assert_eq!(analysis.recommendations, vec!["stage the patio"]);
        assert_eq!(analysis.price_estimate.range.max, 950_000.0);

        let (_, opts) = provider.last_call();
        assert!(opts.json);
    }

    #[tokio::test]
    async fn analyze_rejects_unparseable_output() {
        let provider = RecordingGenerator::replying("not json at all");
        let service = GenerationService::new(provider);

        let err = service.analyze_property("2bd loft").await.unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
