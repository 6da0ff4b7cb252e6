use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, User};

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User shape returned by the API. Deliberately omits the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

// -- Chat --

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

// -- Listing summary generation --

/// Every field is optional on the wire; missing values are forwarded into
/// the prompt, where per-field fallback text is substituted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub summary_title: String,
    #[serde(default)]
    pub listing_urls: Vec<String>,
    #[serde(default)]
    pub preferences: String,
    #[serde(default)]
    pub message_style: String,
    #[serde(default)]
    pub cta: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generated_content: String,
}

// -- Property analysis --

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAnalysis {
    pub recommendations: Vec<String>,
    pub market_analysis: String,
    pub price_estimate: PriceEstimate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub value: f64,
    pub range: PriceRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}
