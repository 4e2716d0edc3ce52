//! Stream worker thread.
//!
//! Runs for the process lifetime on a dedicated thread: launches the
//! scanner, reads its stdout line by line, folds lines into sweep frames,
//! pushes each finished frame into the shared history, and requests a
//! repaint. The blocking read is the only suspension point; it unblocks on
//! new data, end of stream, or the scanner dying (e.g. after a shutdown
//! request killed it).
//!
//! Failure policy: this is an operator-facing diagnostic tool with no
//! degraded mode. Launch failures, protocol violations, and unrequested
//! scanner error exits all log a diagnostic and terminate the whole process
//! with exit code 1.

use crate::backend::repaint::RepaintHandle;
use crate::backend::shutdown::ShutdownHandle;
use crate::backend::source::SpectrumSource;
use crate::config::SourceConfig;
use crate::error::{Result, SpecViewError};
use crate::history::SweepHistory;
use crate::parser::SweepParser;
use std::io::{BufRead, BufReader};

/// The read-loop side of the pipeline. Writer of the shared history.
pub struct StreamWorker<R: RepaintHandle> {
    config: SourceConfig,
    history: SweepHistory,
    shutdown: ShutdownHandle,
    ui: R,
}

impl<R: RepaintHandle> StreamWorker<R> {
    pub fn new(config: SourceConfig, history: SweepHistory, shutdown: ShutdownHandle, ui: R) -> Self {
        Self {
            config,
            history,
            shutdown,
            ui,
        }
    }

    /// Thread entry point. Returns only on a clean stop; all error paths
    /// terminate the process.
    pub fn run(mut self) {
        match self.stream() {
            Ok(()) => {
                tracing::info!("Scanner stream ended, closing");
                self.ui.request_close();
            }
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    /// Starting -> Streaming -> Terminated.
    fn stream(&mut self) -> Result<()> {
        let mut source = SpectrumSource::spawn(&self.config)?;
        let stdout = source.take_stdout()?;
        self.shutdown.attach(source.into_child());

        let result = self.pump(BufReader::new(stdout));
        if result.is_err() {
            // The scanner may still be streaming; stop it so reap() cannot
            // block on a live process.
            self.shutdown.terminate_source();
        }

        // Reap the scanner before deciding the outcome: an error exit that
        // nobody requested is fatal, anything after a requested stop (or a
        // clean exit) is a normal shutdown.
        let status = self.shutdown.reap();
        result?;

        match status {
            Some(Ok(status)) if !status.success() && !self.shutdown.is_requested() => {
                Err(SpecViewError::Source(format!(
                    "{} exited with {}",
                    self.config.command, status
                )))
            }
            Some(Err(e)) => Err(SpecViewError::Source(format!(
                "failed to await {}: {}",
                self.config.command, e
            ))),
            _ => Ok(()),
        }
    }

    /// Streaming state: drive the parser over every line until end of
    /// stream, pushing finished frames and signaling the display thread.
    ///
    /// Public so integration tests can feed an in-memory stream.
    pub fn pump(&mut self, reader: impl BufRead) -> Result<()> {
        let mut parser = SweepParser::new();
        let mut frames = 0u64;
        for line in reader.lines() {
            let line = line?;
            if let Some(frame) = parser.feed_line(&line)? {
                tracing::trace!("Sweep {} complete ({} samples)", frames, frame.len());
                frames += 1;
                self.history.push(frame);
                self.ui.request_repaint();
            }
        }
        tracing::debug!("End of stream after {} sweeps", frames);
        Ok(())
    }
}
