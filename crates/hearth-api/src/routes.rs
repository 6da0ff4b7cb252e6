use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, auth, generation, properties};

/// Full API router, sans the CORS/trace layers the binary adds on top.
/// Kept separate so tests can drive the service without binding a socket.
///
/// Auth is enforced per handler by the `SessionUser` extractor; the routes
/// whose handlers take one reject with 401 before doing any work.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/properties",
            get(properties::list_properties).post(properties::create_property),
        )
        .route("/api/properties/{id}", get(properties::get_property))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/user", get(auth::current_user))
        .route("/api/chat", post(generation::chat))
        .route("/api/generate", post(generation::generate))
        .route("/api/analyze", post(generation::analyze))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
