//! Chat relay endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::{debug, error};

use curechat_chat::normalize::normalize_reply;
use curechat_chat::prompt::build_prompt;
use curechat_chat::types::ChatRequest;

use crate::state::AppState;

/// Longest accepted message, in characters.
const MAX_MESSAGE_LEN: usize = 500;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// Relay one chat message: validate, enrich with the doctors context, call
/// the model, normalize its output.
///
/// Directory failures never surface here; inference failures become a 500
/// carrying the error text.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = match req.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Message is required" })),
            );
        }
    };

    if message.chars().count() > MAX_MESSAGE_LEN {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Message is too long. Max 500 characters." })),
        );
    }

    let doctors_context = state.directory.fetch_directory().await;
    let prompt = build_prompt(&doctors_context, message);

    let raw = match state.inference.infer(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Inference call failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            );
        }
    };

    debug!("Model response: {}", raw);

    (StatusCode::OK, Json(normalize_reply(&raw)))
}
