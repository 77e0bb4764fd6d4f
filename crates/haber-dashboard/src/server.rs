//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/molecular", get(api::molecular::get_molecular))
        .route(
            "/quantum-resources",
            get(api::resources::get_quantum_resources),
        )
        .route(
            "/fertilizer-metrics",
            get(api::fertilizer::get_fertilizer_metrics),
        )
        // Run lifecycle
        .route("/vqe-execution", get(api::vqe::get_vqe_execution))
        .route("/vqe-execution/run", post(api::vqe::start_run))
        .route("/vqe-execution/stop", post(api::vqe::stop_run))
        .route("/vqe-execution/events", get(api::events::status_events))
        // Decision support
        .route(
            "/decision-support",
            get(api::decision::get_decision_support),
        )
        .route(
            "/decision-support/notes",
            get(api::decision::get_notes).post(api::decision::update_notes),
        )
        .fallback(api::not_found);

    let mut router = Router::new().nest("/api", api_routes);

    // Serve the built frontend with SPA fallback to index.html
    if let Some(dir) = &state.config.static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
