//! VQE execution endpoints: data, run and stop.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use haber_core::model::VqeExecutionData;
use haber_core::{RunAck, RunConfig, StopAck};

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/vqe-execution - Algorithm options, limits, live status and convergence log.
pub async fn get_vqe_execution(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<VqeExecutionData>>, ApiError> {
    let data = state
        .store
        .vqe_execution()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch VQE execution data"))?;
    Ok(Json(ApiResponse::ok(data)))
}

/// POST /api/vqe-execution/run - Start a simulated run.
///
/// Body: `{"ansatz": "uccsd", "optimizer": "cobyla", "layers": 4, "stepSize": 0.01}`.
pub async fn start_run(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RunConfig>, JsonRejection>,
) -> Result<Json<ApiResponse<RunAck>>, ApiError> {
    let Json(config) = payload?;
    let ack = state
        .controller
        .start_run(config)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to start VQE execution"))?;
    Ok(Json(ApiResponse::ok(ack)))
}

/// POST /api/vqe-execution/stop - Stop the current run.
pub async fn stop_run(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StopAck>>, ApiError> {
    let ack = state
        .controller
        .stop_run()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to stop VQE execution"))?;
    Ok(Json(ApiResponse::ok(ack)))
}
