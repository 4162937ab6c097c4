use axum::{extract::State, Json};

use crate::knowledge::KnowledgeBase;
use crate::state::AppState;

/// GET /api/v1/profile
///
/// Serves the full knowledge base for the UI to render — hero, experience
/// cards, skills matrix, and the starter questions for the ask dialog.
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<KnowledgeBase> {
    Json((*state.knowledge).clone())
}
