//! Molecular simulation data endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use haber_core::model::MolecularData;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/molecular - NH₃ geometry, Hamiltonian terms and eigenvalue history.
pub async fn get_molecular(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<MolecularData>>, ApiError> {
    let data = state
        .store
        .molecular_data()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch molecular data"))?;
    Ok(Json(ApiResponse::ok(data)))
}
