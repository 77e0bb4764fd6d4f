//! Haber Core - datasets and run lifecycle for the NH₃ VQE demo dashboard.
//!
//! This crate holds everything the dashboard server needs besides HTTP:
//!
//! - Typed reference datasets (molecular geometry, quantum resources,
//!   fertilizer metrics, VQE options, decision support), bundled as JSON
//! - A [`DataStore`] with the live run status and research notes
//! - A [`RunController`] that moves the simulated run through
//!   `idle → running → completed` with a cancellable completion timer
//!
//! No quantum computation happens here; every dataset is fixed.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use haber_core::{InMemoryStore, RunConfig, RunController};
//!
//! # async fn demo() -> haber_core::CoreResult<()> {
//! let store = Arc::new(InMemoryStore::new()?);
//! let controller = RunController::new(store);
//!
//! let ack = controller
//!     .start_run(RunConfig::new("uccsd", "cobyla", 4, 0.01))
//!     .await?;
//! println!("started run {}", ack.run_id);
//! controller.stop_run().await?;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod run;
pub mod store;

pub use controller::{DEFAULT_COMPLETION_DELAY, RunController};
pub use error::{CoreError, CoreResult};
pub use fixtures::Fixtures;
pub use run::{ResearchNotes, RunAck, RunConfig, RunStatus, StopAck};
pub use store::{DataStore, InMemoryStore};
