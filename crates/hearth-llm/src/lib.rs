pub mod openai;
pub mod prompts;
pub mod provider;
pub mod service;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use provider::{GenerateOptions, GenerationError, TextGenerator};
pub use service::GenerationService;
