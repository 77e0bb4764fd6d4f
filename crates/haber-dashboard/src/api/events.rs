//! Server-sent events for live run status.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use tokio_stream::StreamExt;

use crate::events::run_status_events;
use crate::state::AppState;

/// GET /api/vqe-execution/events - Stream run status changes.
pub async fn status_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = run_status_events(state.store.subscribe_status()).filter_map(|event| {
        serde_json::to_string(&event)
            .ok()
            .map(|data| Ok(Event::default().event(event.name()).data(data)))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
