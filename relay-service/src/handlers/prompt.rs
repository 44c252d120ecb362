use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use service_core::error::AppError;

use crate::startup::AppState;

pub const MISSING_PROMPT: &str = "Missing prompt";

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub output_text: String,
}

/// `POST /api/gpt`: relays `prompt` upstream and returns the generated text.
pub async fn submit_prompt(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PromptResponse>, AppError> {
    let body = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected prompt body");
        AppError::from(rejection)
    })?;

    let Some(prompt) = extract_prompt(&headers, &body)? else {
        return Err(AppError::BadRequest(anyhow::anyhow!(MISSING_PROMPT)));
    };

    let output_text = state.provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Server error");
        AppError::from(e)
    })?;

    Ok(Json(PromptResponse { output_text }))
}

/// Pulls `prompt` out of a request body.
///
/// Bodies that are empty or not declared as JSON carry no prompt. Null,
/// `false`, `0` and `""` count as no prompt as well.
fn extract_prompt(headers: &HeaderMap, body: &[u8]) -> Result<Option<String>, AppError> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected prompt body");
        AppError::BadRequest(anyhow::anyhow!(
            "Failed to parse the request body as JSON: {}",
            e
        ))
    })?;

    match payload.get("prompt") {
        None => Ok(None),
        Some(value) if is_falsy(value) => Ok(None),
        Some(Value::String(prompt)) => Ok(Some(prompt.clone())),
        Some(_) => Err(AppError::Rejected(
            StatusCode::UNPROCESSABLE_ENTITY,
            "prompt must be a string".to_string(),
        )),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
