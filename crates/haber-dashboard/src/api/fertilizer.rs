//! Fertilizer efficiency metrics endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use haber_core::model::FertilizerMetricsData;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/fertilizer-metrics
pub async fn get_fertilizer_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<FertilizerMetricsData>>, ApiError> {
    let data = state
        .store
        .fertilizer_metrics()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch fertilizer metrics"))?;
    Ok(Json(ApiResponse::ok(data)))
}
