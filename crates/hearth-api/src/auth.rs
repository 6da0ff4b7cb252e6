use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

use hearth_types::api::{LoginRequest, RegisterRequest, UserResponse};

use crate::error::ApiError;
use crate::session::{SESSION_COOKIE, SessionUser};
use crate::AppState;

fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate input
    if req.username.len() < 3 || req.username.len() > 32 {
        return Err(ApiError::BadRequest(
            "Username must be between 3 and 32 characters".into(),
        ));
    }
    if req.password.len() < 8 {
        return Err(ApiError::BadRequest(
            "Password must be at least 8 characters".into(),
        ));
    }

    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?
        .to_string();

    // Duplicate usernames are rejected by the store itself.
    let user = state.store.create_user(&req.username, &password_hash)?;
    info!("Registered user {} ({})", user.username, user.id);

    let token = state.sessions.create(user.id);
    Ok((
        StatusCode::CREATED,
        jar.add(session_cookie(token)),
        Json(UserResponse::from(&user)),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Unknown username and wrong password are indistinguishable to the caller.
    let user = state
        .store
        .user_by_username(&req.username)
        .ok_or(ApiError::AuthRequired)?;

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|e| ApiError::Internal(format!("stored hash unreadable: {e}")))?;
    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::AuthRequired)?;

    let token = state.sessions.create(user.id);
    Ok((jar.add(session_cookie(token)), Json(UserResponse::from(&user))))
}

/// Destroys the session (if any) and clears the cookie. Never fails.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            state.sessions.destroy(cookie.value());
            jar.remove(session_cookie(String::new()))
        }
        None => jar,
    };
    (jar, StatusCode::OK)
}

pub async fn current_user(user: SessionUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        username: user.username,
        role: user.role,
    })
}
