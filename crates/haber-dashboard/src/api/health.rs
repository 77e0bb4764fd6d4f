//! Health check endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health - Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let run_status = state.controller.status().await?;
    Ok(Json(HealthResponse::new(run_status)))
}
