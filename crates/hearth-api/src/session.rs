use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::{AppState, error::ApiError};

pub const SESSION_COOKIE: &str = "hearth_session";

/// The authenticated caller, resolved from the session cookie. Used as an
/// extractor on protected handlers: a missing, unknown, or expired session
/// rejects with 401 before the handler body runs, so a rejected request can
/// never touch the store.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(ApiError::AuthRequired)?;

        let session = state.sessions.get(&token).ok_or(ApiError::AuthRequired)?;

        // A session for a user the store no longer knows is treated the same
        // as no session at all.
        let user = state
            .store
            .user(session.user_id)
            .ok_or(ApiError::AuthRequired)?;

        Ok(SessionUser {
            id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}
