//! API endpoint handlers.

pub mod decision;
pub mod events;
pub mod fertilizer;
pub mod health;
pub mod molecular;
pub mod resources;
pub mod vqe;

use crate::error::ApiError;

/// Fallback for unknown `/api` paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Unknown API endpoint".to_string())
}
