//! Axum route handlers for the Explanation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ensure_within_limit, AppError};
use crate::explain::composer::{compose_chat_request, compose_study_request};
use crate::explain::style::transform_explanation;
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    pub text: String,
    /// Raw style tag; unknown values get the `simple` framing.
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub profile: Profile,
    pub subject: String,
    pub question: String,
    pub goal: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub request: String,
    pub raw_answer: String,
    pub explanation: String,
    pub style: &'static str,
    pub backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub profile: Profile,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub request: String,
    pub reply: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/explain/transform
///
/// Reframes an explanation for a style tag. Never fails on content.
pub async fn handle_transform(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, AppError> {
    ensure_within_limit("text", &request.text, state.config.max_document_bytes)?;

    let explanation = transform_explanation(&request.text, &request.style);
    debug!(style = %request.style, input_len = request.text.len(), "explanation transformed");

    Ok(Json(TransformResponse { explanation }))
}

/// POST /api/v1/explain/ask
///
/// Study mode: compose the request from the profile, await the answer backend,
/// then apply the profile's style to the answer (never to the request).
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let limit = state.config.max_document_bytes;
    ensure_within_limit("subject", &request.subject, limit)?;
    ensure_within_limit("question", &request.question, limit)?;
    if let Some(goal) = &request.goal {
        ensure_within_limit("goal", goal, limit)?;
    }

    let profile = request.profile;
    let outbound = compose_study_request(
        &profile,
        &request.subject,
        &request.question,
        request.goal.as_deref(),
    );

    let raw_answer = state.answer_generator.answer(&outbound).await?;
    let explanation = profile.style.apply(&raw_answer);

    debug!(
        style = profile.style.as_str(),
        backend = state.answer_generator.backend(),
        "study answer generated"
    );

    Ok(Json(AskResponse {
        request: outbound,
        raw_answer,
        explanation,
        style: profile.style.as_str(),
        backend: state.answer_generator.backend(),
    }))
}

/// POST /api/v1/chat
///
/// Free chat: the reply is returned as generated, without a style transform.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    ensure_within_limit("message", &request.message, state.config.max_document_bytes)?;

    let outbound = compose_chat_request(&request.profile, &request.message);
    let reply = state.answer_generator.answer(&outbound).await?;

    Ok(Json(ChatResponse {
        request: outbound,
        reply,
    }))
}
