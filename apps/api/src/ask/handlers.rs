use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Fallback answer when the gateway returns a well-formed but empty
/// completion.
const EMPTY_ANSWER_FALLBACK: &str = "I couldn't generate a response. Please try again.";

/// Confidence reported with every successful answer. The full résumé context
/// rides along in the system prompt, so this is fixed rather than
/// model-derived.
const ANSWER_CONFIDENCE: u8 = 95;

/// The question field is taken as a raw JSON value so that an absent field
/// and a non-string field both produce the same validation error.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub confidence: u8,
}

/// POST /api/v1/ask
///
/// One gateway round trip per request. Upstream rate-limit and credit
/// conditions map to their own statuses; everything else is a generic 500.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = match request.question.as_str().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(AppError::Validation("Question is required".to_string())),
    };

    info!("Processing question ({} chars)", question.len());

    let response = state.gateway.chat(&state.system_prompt, &question).await?;

    let answer = response
        .answer()
        .map(str::to_string)
        .unwrap_or_else(|| EMPTY_ANSWER_FALLBACK.to_string());

    Ok(Json(AskResponse {
        answer,
        confidence: ANSWER_CONFIDENCE,
    }))
}
