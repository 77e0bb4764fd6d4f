//! Haber Dashboard - HTTP backend for the NH₃ VQE demo dashboard.
//!
//! Serves the bundled reference datasets as JSON and exposes the simulated
//! run lifecycle:
//!
//! - `GET  /api/molecular`, `/api/quantum-resources`, `/api/fertilizer-metrics`
//! - `GET  /api/vqe-execution`, `POST /api/vqe-execution/run`, `POST /api/vqe-execution/stop`
//! - `GET  /api/vqe-execution/events` (server-sent run status)
//! - `GET  /api/decision-support`, `GET|POST /api/decision-support/notes`
//!
//! Successful responses are wrapped as `{"success": true, "data": ...}`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use haber_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone())?);
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod events;
pub mod server;
pub mod state;

pub use dto::{ApiResponse, HealthResponse, MessageResponse, NotesUpdateRequest};
pub use error::ApiError;
pub use events::DashboardEvent;
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
