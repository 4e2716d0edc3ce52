//! Data-ingestion backend.
//!
//! The backend owns the scanner process and the read loop, running on a
//! dedicated thread for the process lifetime. It communicates with the
//! frontend through exactly two seams: the shared [`SweepHistory`] it
//! writes, and the [`RepaintHandle`] it signals after each finished sweep.
//!
//! [`SweepHistory`]: crate::history::SweepHistory
//! [`RepaintHandle`]: repaint::RepaintHandle

pub mod repaint;
pub mod shutdown;
pub mod source;
pub mod worker;

pub use repaint::RepaintHandle;
pub use shutdown::ShutdownHandle;
pub use source::SpectrumSource;
pub use worker::StreamWorker;
