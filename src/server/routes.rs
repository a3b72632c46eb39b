//! REST endpoints for the chat API.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::debug;

use super::responder::Responder;
use crate::remote::ChatRequest;

/// Shared state for chat routes.
#[derive(Clone)]
pub struct ChatApiState {
    pub responder: Arc<Responder>,
}

/// POST /api/chat
///
/// Body `{message, allowance, expenses}`; answers `{reply}` plus
/// `buttons` when the reply offers choices. A body that isn't a JSON
/// object is rejected by the extractor with a 4xx.
async fn post_chat(
    State(state): State<ChatApiState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    debug!(
        message_len = request.message.len(),
        has_amounts = !request.allowance.is_empty() && !request.expenses.is_empty(),
        "Chat request"
    );
    Json(state.responder.respond(&request).await)
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok", "service": "dolla-chat"}))
}

/// Build the chat API routes. Any origin may call them.
pub fn chat_routes(state: ChatApiState) -> Router {
    Router::new()
        .route("/api/chat", post(post_chat))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
