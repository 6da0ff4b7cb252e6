use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A listing as stored and served. Ids are assigned sequentially by the
/// store and never reused within a process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub image_url: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_house_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a property; id and timestamp come from
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub image_url: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub open_house_date: Option<NaiveDate>,
}

/// Internal user record. `password` is an argon2 hash; it never leaves
/// the store crate boundary in API responses (see `api::UserResponse`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One turn of a chat transcript. Transient: the server holds no
/// conversation state, so the caller resends the full transcript each turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}
