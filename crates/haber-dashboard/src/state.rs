//! Application state for the dashboard server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use haber_core::{CoreResult, DEFAULT_COMPLETION_DELAY, DataStore, InMemoryStore, RunController};

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Time from starting a run until it completes on its own.
    pub run_completion_delay: Duration,
    /// Directory holding the built frontend bundle, if it should be served.
    pub static_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 5000).into(),
            run_completion_delay: DEFAULT_COMPLETION_DELAY,
            static_dir: None,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Dashboard configuration.
    pub config: DashboardConfig,
    /// Datasets, run status and notes.
    pub store: Arc<dyn DataStore>,
    /// Run lifecycle controller driving `store`.
    pub controller: RunController,
}

impl AppState {
    /// Create application state with default configuration and the bundled datasets.
    pub fn new() -> CoreResult<Self> {
        Self::with_config(DashboardConfig::default())
    }

    /// Create application state with custom configuration and the bundled datasets.
    pub fn with_config(config: DashboardConfig) -> CoreResult<Self> {
        let store: Arc<dyn DataStore> = Arc::new(InMemoryStore::new()?);
        Ok(Self::with_store(config, store))
    }

    /// Create application state on top of an existing store.
    pub fn with_store(config: DashboardConfig, store: Arc<dyn DataStore>) -> Self {
        let controller = RunController::with_delay(Arc::clone(&store), config.run_completion_delay);
        Self {
            config,
            store,
            controller,
        }
    }
}
