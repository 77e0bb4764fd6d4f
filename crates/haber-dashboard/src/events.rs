//! Events pushed to dashboard clients over server-sent events.

use futures::Stream;
use haber_core::RunStatus;
use serde::Serialize;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Events sent to SSE clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// Run status changed (also sent once on subscribe).
    RunStatusChanged { status: RunStatus },
}

impl DashboardEvent {
    /// SSE event name.
    pub fn name(&self) -> &'static str {
        match self {
            DashboardEvent::RunStatusChanged { .. } => "run_status",
        }
    }
}

/// Stream the current run status followed by every change.
pub fn run_status_events(rx: watch::Receiver<RunStatus>) -> impl Stream<Item = DashboardEvent> {
    use tokio_stream::StreamExt;

    WatchStream::new(rx).map(|status| DashboardEvent::RunStatusChanged { status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    #[test]
    fn test_event_serialization() {
        let event = DashboardEvent::RunStatusChanged {
            status: RunStatus::Running,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "run_status_changed");
        assert_eq!(json["status"], "running");
        assert_eq!(event.name(), "run_status");
    }

    #[tokio::test]
    async fn test_stream_starts_with_current_status() {
        let (tx, rx) = watch::channel(RunStatus::Completed);
        let mut events = Box::pin(run_status_events(rx));

        assert_eq!(
            events.next().await,
            Some(DashboardEvent::RunStatusChanged {
                status: RunStatus::Completed
            })
        );

        tx.send(RunStatus::Running).unwrap();
        assert_eq!(
            events.next().await,
            Some(DashboardEvent::RunStatusChanged {
                status: RunStatus::Running
            })
        );

        drop(tx);
        assert_eq!(events.next().await, None);
    }
}
