//! Axum route handlers for the ATS tailoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::annotator::{annotate_lines, render_annotated_lines, AnnotatedLine};
use crate::errors::{ensure_within_limit, AppError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub keywords: Vec<String>,
    /// CV rendered as bullets tagged with the keywords above.
    pub annotated_preview: String,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    pub lines: Vec<AnnotatedLine>,
    pub rendered: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores a CV against a JD and returns the JD keywords plus an annotated
/// preview of the CV. Empty documents are valid and score 0.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let limit = state.config.max_document_bytes;
    ensure_within_limit("cv_text", &request.cv_text, limit)?;
    ensure_within_limit("jd_text", &request.jd_text, limit)?;

    let scorer = state.match_scorer.clone();
    let scorer_backend = scorer.backend();

    // Tokenising two large documents is CPU-bound; keep it off the async workers.
    let (result, annotated_preview) = tokio::task::spawn_blocking(move || {
        let result = scorer.score(&request.cv_text, &request.jd_text);
        let preview = render_annotated_lines(&request.cv_text, &result.keywords);
        (result, preview)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    debug!(
        score = result.score,
        keywords = result.keywords.len(),
        backend = scorer_backend,
        "cv scored against jd"
    );

    Ok(Json(ScoreResponse {
        score: result.score,
        keywords: result.keywords,
        annotated_preview,
        scorer_backend,
    }))
}

/// POST /api/v1/ats/annotate
///
/// Re-renders a CV against a caller-supplied keyword list, typically the one
/// returned by the most recent score call.
pub async fn handle_annotate(
    State(state): State<AppState>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, AppError> {
    ensure_within_limit("cv_text", &request.cv_text, state.config.max_document_bytes)?;

    let lines = annotate_lines(&request.cv_text, &request.keywords);
    let rendered = lines
        .iter()
        .map(AnnotatedLine::render)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Json(AnnotateResponse { lines, rendered }))
}
