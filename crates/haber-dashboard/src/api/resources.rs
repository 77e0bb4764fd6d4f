//! Quantum resources endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use haber_core::model::QuantumResourceData;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/quantum-resources - Backends, resource estimates and run history.
pub async fn get_quantum_resources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<QuantumResourceData>>, ApiError> {
    let data = state
        .store
        .quantum_resources()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch quantum resources"))?;
    Ok(Json(ApiResponse::ok(data)))
}
