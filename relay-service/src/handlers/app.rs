use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub const LIVENESS_MESSAGE: &str = "✅ TDS Exam Helper API (Claude) is running";

/// Liveness route; never touches the upstream.
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "relay-service",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.provider.model(),
    }))
}
