//! Haber Dashboard binary entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use haber_dashboard::{AppState, DashboardConfig, create_router};

/// Haber - NH₃ VQE demo dashboard backend
#[derive(Parser)]
#[command(name = "haber-dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "HABER_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Milliseconds until a started run completes on its own
    #[arg(long, env = "HABER_RUN_DELAY_MS", default_value_t = 3000)]
    run_delay_ms: u64,

    /// Directory with the built frontend to serve
    #[arg(long, env = "HABER_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "haber_dashboard=info,haber_core=info,tower_http=info",
            1 => "haber_dashboard=debug,haber_core=debug,tower_http=debug",
            _ => "trace",
        }
    }

    fn into_config(self) -> DashboardConfig {
        DashboardConfig {
            bind_address: self.bind,
            run_completion_delay: Duration::from_millis(self.run_delay_ms),
            static_dir: self.static_dir,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.default_filter().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.into_config();
    let bind_addr = config.bind_address;

    if let Some(dir) = &config.static_dir {
        if !dir.join("index.html").is_file() {
            tracing::warn!("No index.html in static dir {}", dir.display());
        }
    }

    let state = Arc::new(AppState::with_config(config)?);
    tracing::info!(
        delay_ms = state.config.run_completion_delay.as_millis() as u64,
        "Loaded reference datasets"
    );

    let app = create_router(state);

    tracing::info!("Starting Haber Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
