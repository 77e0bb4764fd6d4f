//! Request and response envelopes for the dashboard API.

use haber_core::RunStatus;
use serde::{Deserialize, Serialize};

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Plain acknowledgement message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request to replace the research notes.
#[derive(Debug, Deserialize)]
pub struct NotesUpdateRequest {
    pub notes: String,
}

/// Current research notes.
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
    /// Current run status.
    pub run_status: RunStatus,
}

impl HealthResponse {
    pub fn new(run_status: RunStatus) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            run_status,
        }
    }
}
