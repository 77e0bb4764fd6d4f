//! R&D decision support endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use haber_core::model::DecisionSupportData;

use crate::dto::{ApiResponse, MessageResponse, NotesResponse, NotesUpdateRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/decision-support - Summaries, cost table, recommendations and notes.
pub async fn get_decision_support(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DecisionSupportData>>, ApiError> {
    let data = state
        .store
        .decision_support()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch decision support data"))?;
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/decision-support/notes
pub async fn get_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<NotesResponse>>, ApiError> {
    let notes = state
        .store
        .research_notes()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch research notes"))?;
    Ok(Json(ApiResponse::ok(NotesResponse { notes })))
}

/// POST /api/decision-support/notes - Replace the research notes.
pub async fn update_notes(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NotesUpdateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let Json(request) = payload?;
    state
        .store
        .update_research_notes(request.notes)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to update research notes"))?;
    tracing::info!("Research notes updated");
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Research notes updated",
    ))))
}
