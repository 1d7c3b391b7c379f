pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats_handlers;
use crate::errors::AppError;
use crate::explain::handlers as explain_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Explanations
        .route(
            "/api/v1/explain/transform",
            post(explain_handlers::handle_transform),
        )
        .route("/api/v1/explain/ask", post(explain_handlers::handle_ask))
        .route("/api/v1/chat", post(explain_handlers::handle_chat))
        // ATS tailoring
        .route("/api/v1/ats/score", post(ats_handlers::handle_score))
        .route("/api/v1/ats/annotate", post(ats_handlers::handle_annotate))
        .fallback(not_found)
        .with_state(state)
}
