use axum::{Json, extract::State};

use hearth_types::api::{
    AnalyzeRequest, ChatRequest, ChatResponse, GenerateResponse, GenerationRequest,
    PropertyAnalysis,
};

use crate::error::ApiError;
use crate::session::SessionUser;
use crate::AppState;

pub async fn chat(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = state
        .generation
        .chat(&req.messages, req.context.as_deref())
        .await
        .map_err(ApiError::generation("Failed to process chat"))?;
    Ok(Json(ChatResponse { response }))
}

pub async fn generate(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(req): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let generated_content = state
        .generation
        .listing_summary(&req)
        .await
        .map_err(ApiError::generation("Failed to generate listing summary"))?;
    Ok(Json(GenerateResponse { generated_content }))
}

pub async fn analyze(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<PropertyAnalysis>, ApiError> {
    let analysis = state
        .generation
        .analyze_property(&req.details)
        .await
        .map_err(ApiError::generation("Failed to analyze property"))?;
    Ok(Json(analysis))
}
