//! # specview: live spectrum-scan viewer
//!
//! A real-time viewer for the streaming output of `ubertooth-specan`. The
//! architecture separates the line-oriented ingestion backend from the UI
//! rendering frontend:
//!
//! - **Backend**: launches the scanner, reads its stdout on a dedicated
//!   thread, and folds lines into sweep frames ([`parser::SweepParser`]).
//! - **History**: a bounded FIFO of recent sweeps ([`history::SweepHistory`])
//!   shared between the two threads behind a single mutex.
//! - **Frontend**: an eframe/egui app that repaints the history as
//!   recency-faded polylines whenever the backend signals new data.
//! - **Shutdown**: one cancellation token ([`backend::ShutdownHandle`]) wired
//!   to both window close and SIGINT/SIGTERM; it terminates the scanner,
//!   which in turn unblocks the read loop.

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod history;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use backend::{RepaintHandle, ShutdownHandle, StreamWorker};
pub use config::{AppConfig, SourceConfig};
pub use error::{Result, SpecViewError};
pub use frontend::SpectrumApp;
pub use history::SweepHistory;
pub use parser::SweepParser;
pub use types::Frame;
