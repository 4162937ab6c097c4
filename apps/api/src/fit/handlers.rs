use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::fit::engine::FitAssessment;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/fit
///
/// Blank input is rejected here with the message the UI shows inline —
/// the engine itself accepts any string.
pub async fn handle_fit(
    State(state): State<AppState>,
    Json(request): Json<FitRequest>,
) -> Result<Json<FitAssessment>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job description to analyze.".to_string(),
        ));
    }

    let assessment = state.fit_analyzer.analyze(&request.job_description).await?;

    Ok(Json(assessment))
}
